//! Query engine: status filter, free-text search, and stable sorting.
//!
//! Filtering always runs before sorting, so changing only the sort spec never
//! changes which tasks come back. The input slice is never modified.

use std::cmp::Ordering;

use mc_core::entities::EnrichedTask;
use mc_core::ordering::{SortDirection, SortKey, SortSpec};
use mc_core::status::ALL;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::compare::{optional_text_ci, text_ci, timestamp_asc};

/// Options for one exploration query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QueryOptions {
    /// Case-insensitive substring matched against name, project name, and
    /// goal. Blank means no search.
    #[serde(default)]
    pub search: Option<String>,
    /// Exact status to keep. `None` or `"All"` keeps every status.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub sort: SortSpec,
}

impl QueryOptions {
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub const fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }
}

/// Filter and sort `tasks` according to `opts`.
#[must_use]
pub fn query(tasks: &[EnrichedTask], opts: &QueryOptions) -> Vec<EnrichedTask> {
    let status = opts.status.as_deref().filter(|status| *status != ALL);
    let needle = opts
        .search
        .as_deref()
        .map(str::trim)
        .filter(|search| !search.is_empty())
        .map(str::to_lowercase);

    let mut matched: Vec<EnrichedTask> = tasks
        .iter()
        .filter(|task| status.is_none_or(|status| task.status() == status))
        .filter(|task| {
            needle
                .as_deref()
                .is_none_or(|needle| matches_search(task, needle))
        })
        .cloned()
        .collect();

    sort_tasks(&mut matched, opts.sort);
    matched
}

/// The status filter choices for a task set: `"All"`, then each distinct
/// status in first-seen order.
#[must_use]
pub fn status_options(tasks: &[EnrichedTask]) -> Vec<String> {
    let mut options = vec![ALL.to_string()];
    for task in tasks {
        if !options.iter().any(|seen| seen == task.status()) {
            options.push(task.status().to_string());
        }
    }
    options
}

/// `needle` must already be lower-cased. `next_step` is deliberately not
/// part of the searched fields.
fn matches_search(task: &EnrichedTask, needle: &str) -> bool {
    [task.task.name.as_str(), task.project_name.as_str(), task.goal()]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn sort_tasks(tasks: &mut [EnrichedTask], spec: SortSpec) {
    tasks.sort_by(|a, b| {
        let ordering = compare_by(a, b, spec.key);
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare_by(a: &EnrichedTask, b: &EnrichedTask, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => compare_ids(a.task.id.as_str(), b.task.id.as_str()),
        SortKey::Name => text_ci(&a.task.name, &b.task.name),
        SortKey::ProjectName => text_ci(&a.project_name, &b.project_name),
        SortKey::Status => text_ci(a.status(), b.status()),
        SortKey::Priority => a.priority_rank.cmp(&b.priority_rank),
        SortKey::AutonomyLevel => optional_text_ci(
            a.task.autonomy_level.as_deref(),
            b.task.autonomy_level.as_deref(),
        ),
        SortKey::UpdatedAt => timestamp_asc(a.task.updated_at, b.task.updated_at),
        SortKey::CompletedAt => timestamp_asc(a.task.completed_at, b.task.completed_at),
    }
}

/// Numeric ids come first, ordered by value so `9` sorts before `10`; every
/// other id follows in case-insensitive text order.
fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => text_ci(a, b),
    }
}
