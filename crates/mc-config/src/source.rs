//! Record source configuration.

use mc_core::documents::{DEFAULT_BASE_URL, PROJECTS_DOCUMENT, TASKS_DOCUMENT};
use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_tasks_path() -> String {
    TASKS_DOCUMENT.to_string()
}

fn default_projects_path() -> String {
    PROJECTS_DOCUMENT.to_string()
}

const fn default_cache_bust() -> bool {
    true
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Base URL both document paths are joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_tasks_path")]
    pub tasks_path: String,

    #[serde(default = "default_projects_path")]
    pub projects_path: String,

    /// Append a cache-defeating query parameter to every request.
    #[serde(default = "default_cache_bust")]
    pub cache_bust: bool,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            tasks_path: default_tasks_path(),
            projects_path: default_projects_path(),
            cache_bust: default_cache_bust(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
