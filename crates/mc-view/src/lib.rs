//! # mc-view
//!
//! Derived views over a Mission Control snapshot.
//!
//! Everything here is a pure function of its inputs:
//! - [`builder`] joins tasks to project names and attaches a priority rank
//! - [`segment`] partitions enriched tasks into ordered status buckets
//! - [`query`] filters, searches, and sorts enriched tasks for exploration
//! - [`summary`] assembles the dashboard overview from a snapshot

pub mod builder;
pub mod query;
pub mod segment;
pub mod summary;

mod compare;
#[cfg(test)]
mod test_support;

pub use builder::{build, build_from_json};
pub use query::{QueryOptions, query, status_options};
pub use segment::{Bucket, Segments, default_buckets, segment};
pub use summary::{DashboardSummary, summarize};
