use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Project, Task};
use crate::errors::CoreError;
use crate::records::decode_collection;

/// Tasks and projects as fetched together by one refresh.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub projects: Vec<Project>,
    pub fetched_at: DateTime<Utc>,
}

impl Snapshot {
    #[must_use]
    pub const fn new(tasks: Vec<Task>, projects: Vec<Project>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            tasks,
            projects,
            fetched_at,
        }
    }

    /// Decode both documents. Either one failing to be an array fails the
    /// whole snapshot, so a half-decoded pair is never produced.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] if `tasks` or `projects` is not a
    /// JSON array.
    pub fn from_json(
        tasks: &Value,
        projects: &Value,
        fetched_at: DateTime<Utc>,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            tasks: decode_collection(tasks, "tasks")?,
            projects: decode_collection(projects, "projects")?,
            fetched_at,
        })
    }
}
