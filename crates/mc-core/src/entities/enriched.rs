use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Task;

/// Display name used when a task's project cannot be resolved.
pub const NO_PROJECT: &str = "No Project";

/// A task joined to its project name and carrying a derived priority rank.
///
/// Built wholesale on every refresh and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EnrichedTask {
    #[serde(flatten)]
    pub task: Task,
    pub project_name: String,
    /// 1 (High) through 4 (missing or unknown). Lower sorts first.
    pub priority_rank: u8,
}

impl EnrichedTask {
    #[must_use]
    pub fn status(&self) -> &str {
        &self.task.status
    }

    #[must_use]
    pub fn goal(&self) -> &str {
        self.task.goal.as_deref().unwrap_or_default()
    }
}
