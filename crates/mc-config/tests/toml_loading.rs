//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use mc_config::{ConfigError, McConfig};
use mc_core::ordering::{BucketOrder, SortDirection, SortKey};

#[test]
fn loads_source_and_poll_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[source]
base_url = "http://localhost:8080/data"
tasks_path = "t.json"
cache_bust = false
timeout_secs = 3

[poll]
interval_secs = 15
"#,
        )?;

        let config: McConfig = Figment::from(Serialized::defaults(McConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.source.base_url, "http://localhost:8080/data");
        assert_eq!(config.source.tasks_path, "t.json");
        assert_eq!(config.source.projects_path, "projects.json");
        assert!(!config.source.cache_bust);
        assert_eq!(config.source.timeout_secs, 3);
        assert_eq!(config.poll.interval_secs, 15);
        Ok(())
    });
}

#[test]
fn loads_custom_buckets_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[view]
history_limit = 0
default_sort = "updated_at"
default_direction = "desc"

[[view.buckets]]
name = "now"
statuses = ["Ongoing", "Deep Dive", "Action"]
order = { kind = "priority_asc" }

[[view.buckets]]
name = "later"
statuses = ["Backlog", "Queued"]
order = { kind = "status_then_updated_desc", statuses = ["Queued", "Backlog"] }
limit = 5
"#,
        )?;

        let config = McConfig::load_from(std::path::Path::new("config.toml"))
            .map_err(|e| e.to_string())?;

        assert_eq!(config.view.history_limit, 0);
        assert_eq!(config.view.default_sort, SortKey::UpdatedAt);
        assert_eq!(config.view.default_direction, SortDirection::Desc);

        let buckets = config.view.buckets.expect("buckets configured");
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].name, "now");
        assert!(buckets[0].accepts("Deep Dive"));
        assert_eq!(buckets[0].order, BucketOrder::PriorityAsc);
        assert_eq!(buckets[1].limit, Some(5));
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".mission-control")?;
        jail.create_file(
            ".mission-control/config.toml",
            r#"
[poll]
interval_secs = 300
"#,
        )?;

        let config = McConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.poll.interval_secs, 300);
        Ok(())
    });
}

#[test]
fn invalid_values_fail_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[source]
timeout_secs = 0
"#,
        )?;

        let err = McConfig::load_from(std::path::Path::new("config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "source.timeout_secs"));
        Ok(())
    });
}

#[test]
fn unknown_sort_key_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[view]
default_sort = "next_step"
"#,
        )?;

        let err = McConfig::load_from(std::path::Path::new("config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}

#[test]
fn load_from_reads_an_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mission.toml");
    std::fs::write(
        &path,
        r#"
[view]
history_limit = 25
default_sort = "updated_at"
default_direction = "desc"
"#,
    )
    .unwrap();

    let config = McConfig::load_from(&path).unwrap();
    assert_eq!(config.view.history_limit, 25);
    assert_eq!(config.view.default_sort, SortKey::UpdatedAt);
    assert_eq!(config.view.default_direction, SortDirection::Desc);
}

#[test]
fn load_from_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[source]\ntimeout_secs = 0\n").unwrap();

    let err = McConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "source.timeout_secs"));
}
