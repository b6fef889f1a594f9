use anyhow::bail;
use mc_core::entities::{EnrichedTask, Project, Snapshot, Task};
use mc_view::{DashboardSummary, QueryOptions};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

pub const SCHEMA_TYPES: [&str; 6] = ["task", "project", "enriched-task", "snapshot", "summary", "query"];

/// Handle `mc schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_for_name(&args.type_name)?;
    output(&schema, flags.format)
}

fn schema_for_name(name: &str) -> anyhow::Result<schemars::Schema> {
    let schema = match name {
        "task" => schemars::schema_for!(Task),
        "project" => schemars::schema_for!(Project),
        "enriched-task" => schemars::schema_for!(EnrichedTask),
        "snapshot" => schemars::schema_for!(Snapshot),
        "summary" => schemars::schema_for!(DashboardSummary),
        "query" => schemars::schema_for!(QueryOptions),
        other => bail!("unknown schema type '{other}' (expected one of: {})", SCHEMA_TYPES.join(", ")),
    };
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_type_has_a_schema() {
        for name in SCHEMA_TYPES {
            let schema = schema_for_name(name).unwrap();
            let value = serde_json::to_value(&schema).unwrap();
            assert!(value.get("properties").is_some(), "{name} schema has no properties");
        }
    }

    #[test]
    fn enriched_task_schema_includes_flattened_fields() {
        let value = serde_json::to_value(schema_for_name("enriched-task").unwrap()).unwrap();
        let properties = &value["properties"];
        assert!(properties.get("project_name").is_some());
        assert!(properties.get("status").is_some());
    }

    #[test]
    fn unknown_type_is_rejected() {
        let error = schema_for_name("widget").unwrap_err();
        assert!(error.to_string().contains("widget"));
    }
}
