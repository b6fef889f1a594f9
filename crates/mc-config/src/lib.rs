//! # mc-config
//!
//! Layered configuration loading for Mission Control using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MISSION_CONTROL_*` prefix, `__` as separator)
//! 2. Project-level `.mission-control/config.toml`
//! 3. User-level `~/.config/mission-control/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MISSION_CONTROL_SOURCE__BASE_URL` -> `source.base_url`,
//! `MISSION_CONTROL_POLL__INTERVAL_SECS` -> `poll.interval_secs`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use mc_config::McConfig;
//!
//! let config = McConfig::load_with_dotenv().expect("config");
//! println!("polling every {}s", config.poll.interval_secs);
//! ```

mod error;
mod poll;
mod source;
mod view;

pub use error::ConfigError;
pub use poll::PollConfig;
pub use source::SourceConfig;
pub use view::ViewConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "MISSION_CONTROL_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct McConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub poll: PollConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

impl McConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`McConfig::load_with_dotenv`] for `.env`
    /// file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is out
    /// of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`McConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load with an explicit project config file in place of
    /// `.mission-control/config.toml`.
    ///
    /// # Errors
    ///
    /// Same as [`McConfig::load`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let figment = Self::base_figment()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));
        Self::from_figment(&figment)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Self::base_figment();

        let local_path = PathBuf::from(".mission-control/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extract and validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on extraction failure or an invalid value.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the rest of the system cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.base_url.trim().is_empty() {
            return Err(invalid("source.base_url", "must not be empty"));
        }
        if self.source.timeout_secs == 0 {
            return Err(invalid("source.timeout_secs", "must be greater than zero"));
        }
        if self.poll.interval_secs == 0 {
            return Err(invalid("poll.interval_secs", "must be greater than zero"));
        }
        if let Some(buckets) = &self.view.buckets {
            if let Some(bucket) = buckets.iter().find(|b| b.name.trim().is_empty()) {
                return Err(invalid(
                    "view.buckets",
                    &format!("bucket with statuses {:?} has no name", bucket.statuses),
                ));
            }
        }
        Ok(())
    }

    /// Defaults layered under the user-global config file.
    fn base_figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }
        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mission-control").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
