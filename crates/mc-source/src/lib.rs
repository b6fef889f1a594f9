//! # mc-source
//!
//! Where Mission Control snapshots come from and how they are kept fresh.
//!
//! - [`HttpSource`] fetches `tasks.json` and `projects.json` over HTTP
//! - [`SnapshotStore`] holds the latest snapshot; readers never wait on I/O
//! - [`Refresher`] runs at most one fetch at a time and installs results
//!   whole, keeping the previous snapshot when a fetch fails
//! - [`Poller`] is an owned scheduler that drives a refresher on an interval

mod client;
mod document;
mod error;
mod poller;
mod refresh;
mod store;

pub use client::{Endpoints, HttpSource};
pub use error::SourceError;
pub use poller::{DEFAULT_INTERVAL, Poller, PollerHandle};
pub use refresh::{RefreshOutcome, Refresher};
pub use store::SnapshotStore;

use std::future::Future;

use mc_core::entities::Snapshot;

/// Anything that can produce a complete snapshot on demand.
pub trait RecordSource: Send + Sync {
    /// Fetch both collections. Implementations must return either a full
    /// snapshot or an error, never a partial one.
    fn fetch(&self) -> impl Future<Output = Result<Snapshot, SourceError>> + Send;
}
