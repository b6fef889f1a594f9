//! Single-flight refresh of the snapshot store.

use std::sync::Arc;

use mc_core::entities::Snapshot;
use tokio::sync::Mutex;

use crate::{RecordSource, SnapshotStore, SourceError};

/// What a call to [`Refresher::refresh`] did.
#[derive(Debug, Clone)]
pub enum RefreshOutcome {
    /// A new snapshot was fetched and installed.
    Installed(Arc<Snapshot>),
    /// Another refresh was already running; nothing was fetched.
    Skipped,
}

/// Fetches from a [`RecordSource`] into a [`SnapshotStore`], one refresh at a
/// time.
pub struct Refresher<S> {
    source: S,
    store: SnapshotStore,
    in_flight: Mutex<()>,
}

impl<S: RecordSource> Refresher<S> {
    pub fn new(source: S, store: SnapshotStore) -> Self {
        Self {
            source,
            store,
            in_flight: Mutex::new(()),
        }
    }

    #[must_use]
    pub const fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Fetch and install a fresh snapshot.
    ///
    /// If a refresh is already outstanding this returns
    /// [`RefreshOutcome::Skipped`] immediately. On failure the previously
    /// installed snapshot is left as it was.
    ///
    /// # Errors
    ///
    /// Returns the source's [`SourceError`] when the fetch fails.
    pub async fn refresh(&self) -> Result<RefreshOutcome, SourceError> {
        let Ok(_guard) = self.in_flight.try_lock() else {
            tracing::debug!("refresh already in flight, skipping");
            return Ok(RefreshOutcome::Skipped);
        };

        match self.source.fetch().await {
            Ok(snapshot) => {
                tracing::info!(
                    tasks = snapshot.tasks.len(),
                    projects = snapshot.projects.len(),
                    "installed snapshot"
                );
                Ok(RefreshOutcome::Installed(self.store.install(snapshot)))
            }
            Err(error) => {
                tracing::warn!(%error, "refresh failed, keeping previous snapshot");
                Err(error)
            }
        }
    }
}
