//! Where the published dashboard documents live.

/// Hosting location of `tasks.json` and `projects.json`.
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/jarvis-needs-to-use-git/mission-control-dashboard/main/data";

pub const TASKS_DOCUMENT: &str = "tasks.json";
pub const PROJECTS_DOCUMENT: &str = "projects.json";
