//! Turning one HTTP response into one JSON document.

use serde_json::Value;

use crate::error::SourceError;

/// Static hosts answer 429 without `Retry-After` often enough to need a floor.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Error bodies from static hosts are short ("404: Not Found"); anything
/// longer is an HTML page nobody wants in a log line.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Read `resp` as the JSON document published at `url`.
///
/// `url` is the endpoint as configured, without the cache-busting query, so
/// errors name the document rather than one particular request.
pub async fn read_document(url: &str, resp: reqwest::Response) -> Result<Value, SourceError> {
    let status = resp.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(SourceError::RateLimited {
            url: url.to_string(),
            retry_after_secs: retry_after_secs(&resp),
        });
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(SourceError::Api {
            url: url.to_string(),
            status: status.as_u16(),
            message: error_excerpt(&body),
        });
    }

    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| SourceError::Parse(format!("{url}: {e}")))
}

fn retry_after_secs(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

fn error_excerpt(body: &str) -> String {
    let first_line = body.trim().lines().next().unwrap_or_default();
    let mut excerpt: String = first_line.chars().take(MAX_ERROR_BODY_CHARS).collect();
    if first_line.chars().count() > MAX_ERROR_BODY_CHARS {
        excerpt.push('…');
    }
    excerpt
}
