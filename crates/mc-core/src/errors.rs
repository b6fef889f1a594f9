//! Cross-cutting error types for Mission Control.
//!
//! Transport errors (`SourceError`) and configuration errors (`ConfigError`)
//! live in their own crates. The binary converges everything through
//! `anyhow`.

use thiserror::Error;

/// Errors that can be raised while decoding or deriving views.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A collection was not shaped like a collection at all.
    #[error("Invalid input: expected {collection} to be an array, found {found}")]
    InvalidInput { collection: String, found: String },

    /// A sort key did not name a sortable task field.
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    /// A sort direction was neither `asc` nor `desc`.
    #[error("Unknown sort direction: {0} (expected asc or desc)")]
    UnknownSortDirection(String),
}
