//! View defaults: history length, explorer sort, bucket layout.

use mc_core::ordering::{BucketSpec, SortDirection, SortKey};
use serde::{Deserialize, Serialize};

const fn default_history_limit() -> usize {
    10
}

const fn default_sort() -> SortKey {
    SortKey::Priority
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ViewConfig {
    /// How many finished tasks the `done` bucket keeps. `0` keeps all.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Explorer sort key when none is given on the command line.
    #[serde(default = "default_sort")]
    pub default_sort: SortKey,

    #[serde(default)]
    pub default_direction: SortDirection,

    /// Replaces the built-in bucket layout when set.
    #[serde(default)]
    pub buckets: Option<Vec<BucketSpec>>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            default_sort: default_sort(),
            default_direction: SortDirection::Asc,
            buckets: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ViewConfig::default();
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.default_sort, SortKey::Priority);
        assert_eq!(config.default_direction, SortDirection::Asc);
        assert!(config.buckets.is_none());
    }
}
