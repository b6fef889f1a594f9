use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Fetch once and show the bucketed dashboard overview.
    Summary,
    /// Fetch once and search, filter, and sort tasks.
    Explore(ExploreArgs),
    /// Poll continuously and reprint the overview after every refresh.
    Watch(WatchArgs),
    /// Print the JSON Schema of an output type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ExploreArgs {
    /// Case-insensitive text matched against name, project, and goal
    #[arg(short, long)]
    pub search: Option<String>,

    /// Exact status to keep ("All" keeps everything)
    #[arg(long)]
    pub status: Option<String>,

    /// Field to sort by (priority, name, project_name, status, updated_at, ...)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction: asc or desc
    #[arg(long)]
    pub direction: Option<String>,

    /// Print the available status filter values instead of tasks
    #[arg(long)]
    pub list_statuses: bool,
}

#[derive(Clone, Debug, Args)]
pub struct WatchArgs {
    /// Seconds between refreshes (defaults to poll.interval_secs)
    #[arg(short, long)]
    pub interval: Option<u64>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// One of: task, project, enriched-task, snapshot, summary, query
    pub type_name: String,
}
