//! Latest-snapshot store.

use std::sync::Arc;

use mc_core::entities::Snapshot;
use tokio::sync::watch;

/// Holds the most recently installed snapshot.
///
/// Cloning shares the same store. Reads are synchronous and never wait on a
/// fetch. A snapshot is only ever replaced as a whole.
#[derive(Clone)]
pub struct SnapshotStore {
    tx: Arc<watch::Sender<Option<Arc<Snapshot>>>>,
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// The current snapshot, or `None` before the first successful refresh.
    #[must_use]
    pub fn current(&self) -> Option<Arc<Snapshot>> {
        self.tx.borrow().clone()
    }

    /// Replace the current snapshot and notify subscribers.
    pub fn install(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let snapshot = Arc::new(snapshot);
        self.tx.send_replace(Some(Arc::clone(&snapshot)));
        snapshot
    }

    /// Receiver that is notified after every install.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<Snapshot>>> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn starts_empty() {
        assert!(SnapshotStore::new().current().is_none());
    }

    #[test]
    fn install_replaces_whole_snapshot() {
        let store = SnapshotStore::new();
        let first = store.install(Snapshot::new(Vec::new(), Vec::new(), Utc::now()));
        let second = store.install(Snapshot::default());
        let current = store.current().unwrap();
        assert!(Arc::ptr_eq(&current, &second));
        assert!(!Arc::ptr_eq(&current, &first));
    }

    #[tokio::test]
    async fn subscribers_see_installs() {
        let store = SnapshotStore::new();
        let mut rx = store.subscribe();
        let shared = store.clone();
        shared.install(Snapshot::default());
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_some());
    }
}
