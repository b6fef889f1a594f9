//! Dashboard overview assembled from one snapshot.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use mc_core::entities::{Project, Snapshot};
use mc_core::ordering::BucketSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::builder::build;
use crate::segment::{Segments, segment};

/// Everything the summary page shows: buckets, the project list, per-status
/// counts, and when the underlying data was fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DashboardSummary {
    pub generated_at: DateTime<Utc>,
    pub total_tasks: usize,
    pub counts: BTreeMap<String, usize>,
    pub projects: Vec<Project>,
    pub buckets: Segments,
}

#[must_use]
pub fn summarize(snapshot: &Snapshot, spec: &[BucketSpec]) -> DashboardSummary {
    let enriched = build(&snapshot.tasks, &snapshot.projects);

    let mut counts = BTreeMap::new();
    for task in &enriched {
        *counts.entry(task.status().to_string()).or_insert(0) += 1;
    }

    DashboardSummary {
        generated_at: snapshot.fetched_at,
        total_tasks: enriched.len(),
        counts,
        projects: snapshot.projects.clone(),
        buckets: segment(&enriched, spec),
    }
}
