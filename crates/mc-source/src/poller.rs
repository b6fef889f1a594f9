//! Owned polling scheduler.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::{RecordSource, RefreshOutcome, Refresher, SourceError};

/// Refresh cadence of the always-polling dashboard.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

/// Starts background polling. See [`Poller::start`].
pub struct Poller;

impl Poller {
    /// Spawn a task that refreshes immediately and then every `interval`.
    ///
    /// Ticks that fall behind are delayed rather than bunched, and a refresh
    /// that is still running when a tick fires is skipped by the refresher,
    /// so fetches never overlap. Failed refreshes are logged and polling
    /// continues.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidInterval`] if `interval` is zero.
    pub fn start<S>(
        refresher: Arc<Refresher<S>>,
        interval: Duration,
    ) -> Result<PollerHandle, SourceError>
    where
        S: RecordSource + 'static,
    {
        if interval.is_zero() {
            return Err(SourceError::InvalidInterval);
        }

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            tracing::debug!(interval_secs = interval.as_secs(), "poller started");

            loop {
                tokio::select! {
                    biased;
                    _ = &mut shutdown_rx => break,
                    _ = ticker.tick() => {
                        match refresher.refresh().await {
                            Ok(RefreshOutcome::Installed(_)) | Err(_) => {}
                            Ok(RefreshOutcome::Skipped) => {
                                tracing::debug!("poll tick skipped, refresh in flight");
                            }
                        }
                    }
                }
            }

            tracing::debug!("poller stopped");
        });

        Ok(PollerHandle {
            shutdown: Some(shutdown_tx),
            task,
        })
    }
}

/// Handle to a running poller. Dropping it without calling
/// [`PollerHandle::stop`] also ends polling, once any refresh in progress
/// has finished.
pub struct PollerHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Signal the poller to stop and wait for it to finish. An in-progress
    /// refresh completes first.
    pub async fn stop(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Err(error) = (&mut self.task).await {
            tracing::warn!(%error, "poller task ended abnormally");
        }
    }
}
