use anyhow::Context;
use mc_config::McConfig;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::output::output_summary;

/// Handle `mc summary`.
pub async fn handle(config: &McConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let source = bootstrap::http_source(&config.source)?;
    let snapshot = source
        .fetch_snapshot()
        .await
        .context("failed to fetch mission control data")?;
    let summary = mc_view::summarize(&snapshot, &bootstrap::bucket_specs(&config.view, flags.limit));
    output_summary(&summary, flags.format)
}
