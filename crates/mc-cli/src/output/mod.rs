use mc_core::entities::{EnrichedTask, Project};
use mc_view::DashboardSummary;
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

const TASK_HEADERS: [&str; 7] = ["id", "priority", "status", "name", "project", "updated", "approval"];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_value_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print an explorer result. Tables use fixed task columns.
pub fn output_tasks(tasks: &[EnrichedTask], format: OutputFormat) -> anyhow::Result<()> {
    let rendered = match format {
        OutputFormat::Table => render_tasks(tasks),
        other => render(&tasks, other)?,
    };
    println!("{rendered}");
    Ok(())
}

/// Print a dashboard summary. Tables show one section per bucket followed by
/// the project list.
pub fn output_summary(summary: &DashboardSummary, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = match format {
        OutputFormat::Table => render_summary(summary),
        other => render(summary, other)?,
    };
    println!("{rendered}");
    Ok(())
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

pub fn render_tasks(tasks: &[EnrichedTask]) -> String {
    if tasks.is_empty() {
        return String::from("(no tasks)");
    }
    let rows = tasks.iter().map(task_row).collect::<Vec<_>>();
    table::render_table(&TASK_HEADERS, &rows, options())
}

pub fn render_summary(summary: &DashboardSummary) -> String {
    let mut sections = vec![format!(
        "generated {}  ·  {} tasks",
        summary.generated_at.format("%Y-%m-%d %H:%M UTC"),
        summary.total_tasks
    )];

    for bucket in summary.buckets.iter() {
        sections.push(format!(
            "{} ({})\n{}",
            bucket.name,
            bucket.tasks.len(),
            render_tasks(&bucket.tasks)
        ));
    }

    sections.push(format!("projects ({})\n{}", summary.projects.len(), render_projects(&summary.projects)));
    sections.join("\n\n")
}

fn render_projects(projects: &[Project]) -> String {
    if projects.is_empty() {
        return String::from("(no projects)");
    }
    let rows = projects
        .iter()
        .map(|project| {
            vec![
                project.id.to_string(),
                project.name.clone(),
                project.phase.clone().unwrap_or_else(|| String::from("-")),
            ]
        })
        .collect::<Vec<_>>();
    table::render_table(&["id", "name", "phase"], &rows, options())
}

fn task_row(task: &EnrichedTask) -> Vec<String> {
    vec![
        task.task.id.to_string(),
        task.task.priority.clone().unwrap_or_else(|| String::from("-")),
        task.task.status.clone(),
        task.task.name.clone(),
        task.project_name.clone(),
        task.task
            .updated_at
            .map_or_else(|| String::from("-"), |at| at.format("%Y-%m-%d %H:%M").to_string()),
        if task.task.requires_approval() {
            String::from("approval")
        } else {
            String::new()
        },
    ]
}

fn render_value_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) if items.is_empty() => Ok(String::from("(no rows)")),
        Value::Array(items) => {
            let rows = items.iter().map(|item| vec![value_to_cell(item)]).collect::<Vec<_>>();
            Ok(table::render_table(&["value"], &rows, options()))
        }
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, options()))
        }
        scalar => Ok(table::render_table(&["value"], &[vec![value_to_cell(&scalar)]], options())),
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
