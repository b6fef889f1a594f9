//! HTTP record source for the two dashboard documents.

use std::time::Duration;

use chrono::Utc;
use mc_core::documents::{DEFAULT_BASE_URL, PROJECTS_DOCUMENT, TASKS_DOCUMENT};
use mc_core::entities::Snapshot;
use serde_json::Value;

use crate::document::read_document;
use crate::{RecordSource, SourceError};

/// Absolute URLs of the two documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub tasks_url: String,
    pub projects_url: String,
}

impl Endpoints {
    /// Join `base_url` with each document path, tolerating stray slashes.
    #[must_use]
    pub fn from_base(base_url: &str, tasks_path: &str, projects_path: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let join = |path: &str| format!("{base}/{}", path.trim_start_matches('/'));
        Self {
            tasks_url: join(tasks_path),
            projects_url: join(projects_path),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_base(DEFAULT_BASE_URL, TASKS_DOCUMENT, PROJECTS_DOCUMENT)
    }
}

/// HTTP client that fetches both documents and decodes them into a
/// [`Snapshot`].
pub struct HttpSource {
    http: reqwest::Client,
    endpoints: Endpoints,
    cache_bust: bool,
}

impl HttpSource {
    /// Create a source for `endpoints` with a per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(endpoints: Endpoints, timeout: Duration) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("mission-control/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            endpoints,
            cache_bust: false,
        })
    }

    /// Append a `t=<unix millis>` query parameter to every request so CDN
    /// caches in front of the documents are bypassed.
    #[must_use]
    pub const fn with_cache_bust(mut self, cache_bust: bool) -> Self {
        self.cache_bust = cache_bust;
        self
    }

    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetch both documents concurrently and decode them.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if either request fails, returns a
    /// non-success status, is not JSON, or is not a JSON array.
    pub async fn fetch_snapshot(&self) -> Result<Snapshot, SourceError> {
        let (tasks, projects) = tokio::try_join!(
            self.fetch_document(&self.endpoints.tasks_url),
            self.fetch_document(&self.endpoints.projects_url),
        )?;
        let snapshot = Snapshot::from_json(&tasks, &projects, Utc::now())?;
        tracing::debug!(
            tasks = snapshot.tasks.len(),
            projects = snapshot.projects.len(),
            "fetched snapshot"
        );
        Ok(snapshot)
    }

    async fn fetch_document(&self, url: &str) -> Result<Value, SourceError> {
        let request_url = self.request_url(url);
        tracing::debug!(url = %request_url, "fetching document");
        let resp = self.http.get(&request_url).send().await?;
        read_document(url, resp).await
    }

    fn request_url(&self, url: &str) -> String {
        if !self.cache_bust {
            return url.to_string();
        }
        let separator = if url.contains('?') { '&' } else { '?' };
        format!("{url}{separator}t={}", Utc::now().timestamp_millis())
    }
}

impl RecordSource for HttpSource {
    async fn fetch(&self) -> Result<Snapshot, SourceError> {
        self.fetch_snapshot().await
    }
}
