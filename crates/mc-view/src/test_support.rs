use mc_core::entities::{EnrichedTask, Task};
use mc_core::ids::RecordId;
use mc_core::lenient::parse_timestamp;

use crate::builder::build;

pub fn enrich(task: Task) -> EnrichedTask {
    build(&[task], &[]).remove(0)
}

pub fn task_at(id: &str, status: &str, updated_at: &str) -> EnrichedTask {
    enrich(Task {
        id: RecordId::from(id),
        name: format!("task {id}"),
        status: status.to_string(),
        updated_at: parse_timestamp(updated_at),
        ..Task::default()
    })
}

pub fn ids(tasks: &[EnrichedTask]) -> Vec<&str> {
    tasks.iter().map(|task| task.task.id.as_str()).collect()
}
