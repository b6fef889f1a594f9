//! Declarative bucket and sort specifications.
//!
//! These are plain data so bucket layouts and default sorts can be loaded
//! from configuration. The engines that interpret them live in `mc-view`.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Buckets
// ---------------------------------------------------------------------------

/// How tasks inside one bucket are ordered. Every variant is applied with a
/// stable sort, so equal keys keep input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BucketOrder {
    /// Keep input order.
    Input,
    /// Most recently updated first; missing `updated_at` last.
    UpdatedDesc,
    /// Lowest `priority_rank` first.
    PriorityAsc,
    /// Group by the position of the status in `statuses`, then most recently
    /// updated first within each group.
    StatusThenUpdatedDesc { statuses: Vec<String> },
    /// Most recently completed first; missing `completed_at` last.
    CompletedDesc,
}

/// A named, status-defined partition of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BucketSpec {
    pub name: String,
    pub statuses: BTreeSet<String>,
    pub order: BucketOrder,
    /// Keep at most this many tasks after ordering.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl BucketSpec {
    #[must_use]
    pub fn new(name: &str, statuses: &[&str], order: BucketOrder) -> Self {
        Self {
            name: name.to_string(),
            statuses: statuses.iter().map(|s| (*s).to_string()).collect(),
            order,
            limit: None,
        }
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn accepts(&self, status: &str) -> bool {
        self.statuses.contains(status)
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// A task field the query engine can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Id,
    Name,
    ProjectName,
    Status,
    /// Sorts by `priority_rank`, not the label.
    Priority,
    AutonomyLevel,
    UpdatedAt,
    CompletedAt,
}

impl SortKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::ProjectName => "project_name",
            Self::Status => "status",
            Self::Priority => "priority",
            Self::AutonomyLevel => "autonomy_level",
            Self::UpdatedAt => "updated_at",
            Self::CompletedAt => "completed_at",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "project_name" | "project" => Ok(Self::ProjectName),
            "status" => Ok(Self::Status),
            "priority" | "priority_rank" => Ok(Self::Priority),
            "autonomy_level" | "autonomy" => Ok(Self::AutonomyLevel),
            "updated_at" | "updated" => Ok(Self::UpdatedAt),
            "completed_at" | "completed" => Ok(Self::CompletedAt),
            _ => Err(CoreError::UnknownSortKey(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(CoreError::UnknownSortDirection(s.to_string())),
        }
    }
}

/// Sort key plus direction. Defaults to priority, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::Priority,
            direction: SortDirection::Asc,
        }
    }
}

impl SortSpec {
    #[must_use]
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Column-header toggle: the current key flips direction, a new key
    /// starts ascending.
    #[must_use]
    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.flipped())
        } else {
            Self::new(key, SortDirection::Asc)
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("priority", SortKey::Priority)]
    #[case("Project", SortKey::ProjectName)]
    #[case("project_name", SortKey::ProjectName)]
    #[case(" updated_at ", SortKey::UpdatedAt)]
    #[case("completed", SortKey::CompletedAt)]
    fn sort_key_parses_aliases(#[case] input: &str, #[case] expected: SortKey) {
        assert_eq!(input.parse::<SortKey>().unwrap(), expected);
    }

    #[test]
    fn unknown_sort_key_is_rejected() {
        let err = "next_step".parse::<SortKey>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownSortKey(ref key) if key == "next_step"));
    }

    #[test]
    fn sort_direction_parses() {
        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert!("sideways".parse::<SortDirection>().is_err());
    }

    #[test]
    fn toggle_flips_same_key_and_resets_new_key() {
        let spec = SortSpec::default();
        let flipped = spec.toggle(SortKey::Priority);
        assert_eq!(flipped, SortSpec::new(SortKey::Priority, SortDirection::Desc));
        assert_eq!(flipped.toggle(SortKey::Priority), spec);

        let renamed = flipped.toggle(SortKey::Name);
        assert_eq!(renamed, SortSpec::new(SortKey::Name, SortDirection::Asc));
    }

    #[test]
    fn bucket_spec_deserializes_from_toml_shape() {
        let json = r#"{
            "name": "paused",
            "statuses": ["Queued", "Paused"],
            "order": {"kind": "status_then_updated_desc", "statuses": ["Queued", "Paused"]},
            "limit": 5
        }"#;
        let spec: BucketSpec = serde_json::from_str(json).unwrap();
        assert!(spec.accepts("Queued"));
        assert!(!spec.accepts("Done"));
        assert_eq!(spec.limit, Some(5));
        assert!(matches!(spec.order, BucketOrder::StatusThenUpdatedDesc { ref statuses } if statuses.len() == 2));
    }
}
