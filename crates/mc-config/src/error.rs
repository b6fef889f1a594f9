//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layer failed to parse or a value had the wrong type.
    #[error("Failed to read mission control config: {0}")]
    Figment(#[from] figment::Error),

    /// A value parsed but cannot be used (zero interval, empty URL, ...).
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
