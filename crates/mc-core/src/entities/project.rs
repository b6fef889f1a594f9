use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::RecordId;
use crate::lenient;

/// A project that tasks may reference by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub name: String,
    /// Free-text lifecycle label, e.g. `Planning` or `Execution`.
    #[serde(default, deserialize_with = "lenient::text")]
    pub phase: Option<String>,
}
