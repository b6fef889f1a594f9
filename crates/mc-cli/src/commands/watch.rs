use std::sync::Arc;
use std::time::Duration;

use mc_config::McConfig;
use mc_source::{Poller, Refresher, SnapshotStore};

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::WatchArgs;
use crate::output::output_summary;

/// Handle `mc watch`: poll until Ctrl-C, printing a summary after every
/// installed snapshot.
pub async fn handle(args: &WatchArgs, config: &McConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let interval = Duration::from_secs(args.interval.unwrap_or(config.poll.interval_secs));
    let specs = bootstrap::bucket_specs(&config.view, flags.limit);

    let store = SnapshotStore::new();
    let mut updates = store.subscribe();
    let refresher = Arc::new(Refresher::new(bootstrap::http_source(&config.source)?, store));
    let poller = Poller::start(Arc::clone(&refresher), interval)?;
    tracing::info!(interval_secs = interval.as_secs(), "watching for updates, Ctrl-C to stop");

    let result = loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => break signal.map_err(anyhow::Error::from),
            changed = updates.changed() => {
                if changed.is_err() {
                    break Ok(());
                }
                let latest = updates.borrow_and_update().clone();
                if let Some(snapshot) = latest {
                    let summary = mc_view::summarize(&snapshot, &specs);
                    if let Err(error) = output_summary(&summary, flags.format) {
                        break Err(error);
                    }
                }
            }
        }
    };

    poller.stop().await;
    result
}
