//! View-model builder: tasks + projects → enriched tasks.

use std::collections::HashMap;

use mc_core::CoreError;
use mc_core::entities::{EnrichedTask, NO_PROJECT, Project, Task};
use mc_core::ids::RecordId;
use mc_core::records::decode_collection;
use mc_core::status::priority_rank;
use serde_json::Value;

/// Join every task to its project name and derive its priority rank.
///
/// Output order matches `tasks`. Duplicate project ids resolve to the last
/// project with that id. Unresolved or missing `project_id` falls back to
/// [`NO_PROJECT`].
#[must_use]
pub fn build(tasks: &[Task], projects: &[Project]) -> Vec<EnrichedTask> {
    let names: HashMap<&RecordId, &str> = projects
        .iter()
        .map(|project| (&project.id, project.name.as_str()))
        .collect();

    tasks
        .iter()
        .map(|task| {
            let project_name = task
                .project_id
                .as_ref()
                .and_then(|id| names.get(id).copied())
                .unwrap_or(NO_PROJECT)
                .to_string();
            EnrichedTask {
                priority_rank: priority_rank(task.priority.as_deref()),
                project_name,
                task: task.clone(),
            }
        })
        .collect()
}

/// Untyped entry point: decode both documents, then [`build`].
///
/// # Errors
///
/// Returns [`CoreError::InvalidInput`] if either value is not a JSON array.
pub fn build_from_json(tasks: &Value, projects: &Value) -> Result<Vec<EnrichedTask>, CoreError> {
    let tasks: Vec<Task> = decode_collection(tasks, "tasks")?;
    let projects: Vec<Project> = decode_collection(projects, "projects")?;
    tracing::debug!(tasks = tasks.len(), projects = projects.len(), "building view model");
    Ok(build(&tasks, &projects))
}
