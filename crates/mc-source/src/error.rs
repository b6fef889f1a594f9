//! Record source error types.

use mc_core::CoreError;
use thiserror::Error;

/// Errors that can occur while fetching or refreshing snapshots.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The host answered a document request with a non-success status.
    #[error("{url} returned {status}: {message}")]
    Api {
        url: String,
        status: u16,
        /// First line of the response body.
        message: String,
    },

    /// The host answered 429 Too Many Requests.
    #[error("{url} rate limited, retry after {retry_after_secs}s")]
    RateLimited { url: String, retry_after_secs: u64 },

    /// The response body was not JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// The JSON was not shaped like the expected collections.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    /// A polling interval of zero was requested.
    #[error("polling interval must be greater than zero")]
    InvalidInterval,
}
