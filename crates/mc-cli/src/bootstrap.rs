use std::time::Duration;

use anyhow::Context;
use mc_config::{McConfig, SourceConfig, ViewConfig};
use mc_core::ordering::BucketSpec;
use mc_source::{Endpoints, HttpSource};

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;

/// Name of the bucket `view.history_limit` applies to.
const HISTORY_BUCKET: &str = "done";

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<McConfig> {
    let config = match &flags.config {
        Some(path) => {
            anyhow::ensure!(path.exists(), "config file '{}' does not exist", path.display());
            McConfig::load_from(path)
        }
        None => McConfig::load_with_dotenv(),
    };
    config.context("failed to load mission control configuration")
}

pub fn http_source(config: &SourceConfig) -> anyhow::Result<HttpSource> {
    let endpoints = Endpoints::from_base(&config.base_url, &config.tasks_path, &config.projects_path);
    tracing::debug!(tasks = %endpoints.tasks_url, projects = %endpoints.projects_url, "record source");
    let source = HttpSource::new(endpoints, Duration::from_secs(config.timeout_secs))
        .context("failed to build HTTP client")?;
    Ok(source.with_cache_bust(config.cache_bust))
}

/// Configured buckets (or the defaults), with the history limit applied to
/// the `done` bucket unless it already carries its own limit. A `--limit`
/// flag caps every bucket and takes precedence over configured limits.
pub fn bucket_specs(config: &ViewConfig, limit: Option<u32>) -> Vec<BucketSpec> {
    let mut specs = config
        .buckets
        .clone()
        .unwrap_or_else(mc_view::default_buckets);
    if config.history_limit > 0 {
        for spec in specs.iter_mut().filter(|spec| spec.name == HISTORY_BUCKET) {
            if spec.limit.is_none() {
                spec.limit = Some(config.history_limit);
            }
        }
    }
    for spec in &mut specs {
        spec.limit = effective_limit(limit, spec.limit);
    }
    specs
}

#[cfg(test)]
mod tests {
    use mc_core::ordering::BucketOrder;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn history_limit_applies_to_done_bucket_only() {
        let specs = bucket_specs(&ViewConfig::default(), None);
        let limits: Vec<_> = specs.iter().map(|s| (s.name.as_str(), s.limit)).collect();
        assert_eq!(
            limits,
            vec![("active", None), ("pending", None), ("paused", None), ("done", Some(10))]
        );
    }

    #[test]
    fn zero_history_limit_keeps_everything() {
        let config = ViewConfig {
            history_limit: 0,
            ..ViewConfig::default()
        };
        assert!(bucket_specs(&config, None).iter().all(|s| s.limit.is_none()));
    }

    #[test]
    fn configured_bucket_limit_is_kept() {
        let config = ViewConfig {
            buckets: Some(vec![
                BucketSpec::new("done", &["Done"], BucketOrder::CompletedDesc).with_limit(Some(3)),
            ]),
            ..ViewConfig::default()
        };
        assert_eq!(bucket_specs(&config, None)[0].limit, Some(3));
    }

    #[test]
    fn limit_flag_caps_every_bucket() {
        let specs = bucket_specs(&ViewConfig::default(), Some(2));
        assert!(specs.iter().all(|s| s.limit == Some(2)));
    }

    #[test]
    fn default_source_config_points_at_default_endpoints() {
        let source = http_source(&SourceConfig::default()).unwrap();
        assert_eq!(source.endpoints(), &Endpoints::default());
    }
}
