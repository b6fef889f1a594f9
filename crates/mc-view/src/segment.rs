//! Segmentation engine: enriched tasks → ordered status buckets.
//!
//! Buckets are described by [`BucketSpec`] values. A task goes to the first
//! bucket whose status set contains its status, so a task is never in two
//! buckets even if a configuration lists a status twice. Tasks with a status
//! no bucket names are left out.

use mc_core::entities::EnrichedTask;
use mc_core::ordering::{BucketOrder, BucketSpec};
use mc_core::status::{ACTION, DEEP_DIVE, DONE, ONGOING, PAUSED, QUEUED};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::compare::timestamp_desc;

/// One named bucket of ordered tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Bucket {
    pub name: String,
    pub tasks: Vec<EnrichedTask>,
}

/// All buckets of one segmentation, in configured order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Segments {
    buckets: Vec<Bucket>,
}

impl Segments {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Bucket> {
        self.buckets.iter().find(|bucket| bucket.name == name)
    }

    /// Tasks of the named bucket; empty if there is no such bucket.
    #[must_use]
    pub fn tasks(&self, name: &str) -> &[EnrichedTask] {
        self.get(name)
            .map(|bucket| bucket.tasks.as_slice())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bucket> {
        self.buckets.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// The canonical dashboard buckets.
///
/// | bucket    | statuses            | order                               |
/// |-----------|---------------------|-------------------------------------|
/// | `active`  | Ongoing, Deep Dive  | updated, newest first               |
/// | `pending` | Action              | priority rank                       |
/// | `paused`  | Queued, Paused      | Queued before Paused, then updated  |
/// | `done`    | Done                | completed, newest first             |
#[must_use]
pub fn default_buckets() -> Vec<BucketSpec> {
    vec![
        BucketSpec::new("active", &[ONGOING, DEEP_DIVE], BucketOrder::UpdatedDesc),
        BucketSpec::new("pending", &[ACTION], BucketOrder::PriorityAsc),
        BucketSpec::new(
            "paused",
            &[QUEUED, PAUSED],
            BucketOrder::StatusThenUpdatedDesc {
                statuses: vec![QUEUED.to_string(), PAUSED.to_string()],
            },
        ),
        BucketSpec::new("done", &[DONE], BucketOrder::CompletedDesc),
    ]
}

/// Partition `tasks` into the buckets described by `spec`.
#[must_use]
pub fn segment(tasks: &[EnrichedTask], spec: &[BucketSpec]) -> Segments {
    let mut buckets: Vec<Bucket> = spec
        .iter()
        .map(|bucket| Bucket {
            name: bucket.name.clone(),
            tasks: Vec::new(),
        })
        .collect();

    let mut unmatched = 0usize;
    for task in tasks {
        let target = spec
            .iter()
            .position(|bucket| bucket.accepts(task.status()))
            .and_then(|index| buckets.get_mut(index));
        match target {
            Some(bucket) => bucket.tasks.push(task.clone()),
            None => unmatched += 1,
        }
    }
    if unmatched > 0 {
        tracing::debug!(unmatched, "tasks with unbucketed statuses omitted");
    }

    for (bucket, bucket_spec) in buckets.iter_mut().zip(spec) {
        order_bucket(&mut bucket.tasks, &bucket_spec.order);
        if let Some(limit) = bucket_spec.limit {
            bucket.tasks.truncate(limit);
        }
    }

    Segments { buckets }
}

fn order_bucket(tasks: &mut [EnrichedTask], order: &BucketOrder) {
    match order {
        BucketOrder::Input => {}
        BucketOrder::UpdatedDesc => {
            tasks.sort_by(|a, b| timestamp_desc(a.task.updated_at, b.task.updated_at));
        }
        BucketOrder::PriorityAsc => tasks.sort_by_key(|task| task.priority_rank),
        BucketOrder::StatusThenUpdatedDesc { statuses } => {
            let group = |task: &EnrichedTask| {
                statuses
                    .iter()
                    .position(|status| status == task.status())
                    .unwrap_or(statuses.len())
            };
            tasks.sort_by(|a, b| {
                group(a)
                    .cmp(&group(b))
                    .then_with(|| timestamp_desc(a.task.updated_at, b.task.updated_at))
            });
        }
        BucketOrder::CompletedDesc => {
            tasks.sort_by(|a, b| timestamp_desc(a.task.completed_at, b.task.completed_at));
        }
    }
}
