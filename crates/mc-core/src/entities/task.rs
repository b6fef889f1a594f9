use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::RecordId;
use crate::lenient;

/// A task record as published in `tasks.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient::optional_id")]
    pub project_id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub goal: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub next_step: Option<String>,
    /// Open status label; see [`crate::status`] for the known ones.
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub status: String,
    /// `High`, `Medium`, `Low`, or absent.
    #[serde(default, deserialize_with = "lenient::text")]
    pub priority: Option<String>,
    /// `approval_required` flags tasks that need a human sign-off.
    #[serde(default, deserialize_with = "lenient::text")]
    pub autonomy_level: Option<String>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Only meaningful when `status` is `Done`.
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Whether this task waits on a human approval.
    #[must_use]
    pub fn requires_approval(&self) -> bool {
        self.autonomy_level.as_deref() == Some("approval_required")
    }
}
