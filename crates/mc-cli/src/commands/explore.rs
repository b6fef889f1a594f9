use anyhow::Context;
use mc_config::{McConfig, ViewConfig};
use mc_core::ordering::{SortDirection, SortKey, SortSpec};
use mc_view::QueryOptions;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExploreArgs;
use crate::commands::shared::limit::effective_limit;
use crate::output::{output, output_tasks};

/// Handle `mc explore`.
pub async fn handle(args: &ExploreArgs, config: &McConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let options = query_options(args, &config.view)?;

    let source = bootstrap::http_source(&config.source)?;
    let snapshot = source
        .fetch_snapshot()
        .await
        .context("failed to fetch mission control data")?;
    let tasks = mc_view::build(&snapshot.tasks, &snapshot.projects);

    if args.list_statuses {
        return output(&mc_view::status_options(&tasks), flags.format);
    }

    let mut matched = mc_view::query(&tasks, &options);
    tracing::debug!(total = tasks.len(), matched = matched.len(), "explore query");
    if let Some(limit) = effective_limit(flags.limit, None) {
        matched.truncate(limit);
    }
    output_tasks(&matched, flags.format)
}

/// Turn command-line arguments into query options, falling back to the
/// configured default sort.
fn query_options(args: &ExploreArgs, view: &ViewConfig) -> anyhow::Result<QueryOptions> {
    let key = match &args.sort {
        Some(raw) => raw.parse::<SortKey>()?,
        None => view.default_sort,
    };
    let direction = match &args.direction {
        Some(raw) => raw.parse::<SortDirection>()?,
        None => view.default_direction,
    };

    Ok(QueryOptions {
        search: args.search.clone(),
        status: args.status.clone(),
        sort: SortSpec::new(key, direction),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args() -> ExploreArgs {
        ExploreArgs {
            search: None,
            status: None,
            sort: None,
            direction: None,
            list_statuses: false,
        }
    }

    #[test]
    fn defaults_come_from_view_config() {
        let view = ViewConfig {
            default_sort: SortKey::UpdatedAt,
            default_direction: SortDirection::Desc,
            ..ViewConfig::default()
        };
        let options = query_options(&args(), &view).unwrap();
        assert_eq!(options.sort, SortSpec::new(SortKey::UpdatedAt, SortDirection::Desc));
        assert_eq!(options.search, None);
    }

    #[test]
    fn flags_override_config() {
        let explore = ExploreArgs {
            search: Some("alpha".to_string()),
            status: Some("Done".to_string()),
            sort: Some("project".to_string()),
            direction: Some("desc".to_string()),
            ..args()
        };
        let options = query_options(&explore, &ViewConfig::default()).unwrap();
        assert_eq!(options.sort, SortSpec::new(SortKey::ProjectName, SortDirection::Desc));
        assert_eq!(options.search.as_deref(), Some("alpha"));
        assert_eq!(options.status.as_deref(), Some("Done"));
    }

    #[test]
    fn unknown_sort_key_is_an_error() {
        let explore = ExploreArgs {
            sort: Some("colour".to_string()),
            ..args()
        };
        let error = query_options(&explore, &ViewConfig::default()).unwrap_err();
        assert!(error.to_string().contains("colour"));
    }
}
