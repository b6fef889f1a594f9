//! End-to-end properties of the view pipeline over dashboard-shaped JSON.

use std::collections::HashSet;

use mc_core::entities::{EnrichedTask, NO_PROJECT};
use mc_core::ordering::{SortDirection, SortKey, SortSpec};
use mc_view::{QueryOptions, build_from_json, default_buckets, query, segment};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn projects() -> Value {
    json!([
        {"id": "p1", "name": "Platform", "phase": "Execution"},
        {"id": "p2", "name": "Research", "phase": "Planning"}
    ])
}

fn tasks() -> Value {
    json!([
        {"id": 1, "project_id": "p1", "name": "Deploy API Gateway", "status": "Ongoing",
         "priority": "High", "updated_at": "2024-05-01T10:00:00Z", "goal": "Public ingress"},
        {"id": 2, "project_id": "p2", "name": "Survey vector stores", "status": "Deep Dive",
         "priority": "Medium", "updated_at": "2024-05-03T10:00:00Z"},
        {"id": 3, "project_id": "p1", "name": "Rotate TLS certs", "status": "Action",
         "priority": "Low", "updated_at": "2024-04-01"},
        {"id": 4, "project_id": "nope", "name": "Approve budget", "status": "Action",
         "priority": "High", "autonomy_level": "approval_required"},
        {"id": 5, "name": "Write postmortem", "status": "Action"},
        {"id": 6, "project_id": "p2", "name": "Benchmark", "status": "Action", "priority": "High"},
        {"id": 7, "project_id": "p1", "name": "Old migration", "status": "Done",
         "completed_at": "2024-02-01"},
        {"id": 8, "project_id": "p1", "name": "Docs refresh", "status": "Done"},
        {"id": 9, "project_id": "p1", "name": "Cut release", "status": "Done",
         "completed_at": "2024-05-20T08:00:00Z"},
        {"id": 10, "name": "Idea dump", "status": "Backlog"},
        {"id": 11, "name": "Waiting on vendor", "status": "Paused", "updated_at": "2024-06-01"},
        {"id": 12, "name": "Next sprint", "status": "Queued", "updated_at": "2024-01-01"}
    ])
}

fn enriched() -> Vec<EnrichedTask> {
    build_from_json(&tasks(), &projects()).expect("fixture should build")
}

fn ids(tasks: &[EnrichedTask]) -> Vec<&str> {
    tasks.iter().map(|t| t.task.id.as_str()).collect()
}

#[test]
fn priority_rank_matches_table_for_every_task() {
    for task in enriched() {
        let expected = match task.task.priority.as_deref() {
            Some("High") => 1,
            Some("Medium") => 2,
            Some("Low") => 3,
            _ => 4,
        };
        assert_eq!(task.priority_rank, expected, "task {}", task.task.id);
    }
}

#[test]
fn project_names_resolve_or_fall_back() {
    let tasks = enriched();
    let by_id = |id: &str| tasks.iter().find(|t| t.task.id.as_str() == id).unwrap();
    assert_eq!(by_id("1").project_name, "Platform");
    assert_eq!(by_id("2").project_name, "Research");
    assert_eq!(by_id("4").project_name, NO_PROJECT);
    assert_eq!(by_id("5").project_name, NO_PROJECT);
}

#[test]
fn buckets_are_disjoint() {
    let segments = segment(&enriched(), &default_buckets());
    let mut seen = HashSet::new();
    for bucket in segments.iter() {
        for task in &bucket.tasks {
            assert!(seen.insert(task.task.id.clone()), "task {} in two buckets", task.task.id);
        }
    }
    assert!(!seen.iter().any(|id| id.as_str() == "10"));
}

#[test]
fn default_bucket_orders() {
    let segments = segment(&enriched(), &default_buckets());

    assert_eq!(ids(segments.tasks("active")), vec!["2", "1"]);
    assert_eq!(ids(segments.tasks("pending")), vec!["4", "6", "3", "5"]);
    assert_eq!(ids(segments.tasks("paused")), vec!["12", "11"]);
    assert_eq!(ids(segments.tasks("done")), vec!["9", "7", "8"]);
}

#[test]
fn active_is_non_increasing_by_updated_at() {
    let segments = segment(&enriched(), &default_buckets());
    let active = segments.tasks("active");
    assert!(active.windows(2).all(|w| w[0].task.updated_at >= w[1].task.updated_at));
}

#[test]
fn queued_sorts_before_paused_despite_older_timestamp() {
    let tasks = build_from_json(
        &json!([
            {"id": 1, "status": "Queued", "updated_at": "2024-01-01"},
            {"id": 2, "status": "Paused", "updated_at": "2024-06-01"}
        ]),
        &json!([]),
    )
    .unwrap();
    let segments = segment(&tasks, &default_buckets());
    assert_eq!(ids(segments.tasks("paused")), vec!["1", "2"]);
}

#[test]
fn priority_scenario_keeps_high_ties_in_order() {
    let tasks = build_from_json(
        &json!([
            {"id": "a", "priority": "Low"},
            {"id": "b", "priority": "High"},
            {"id": "c", "priority": "Medium"},
            {"id": "d", "priority": "High"}
        ]),
        &json!([]),
    )
    .unwrap();
    let opts = QueryOptions {
        search: Some(String::new()),
        status: Some("All".to_string()),
        sort: SortSpec::new(SortKey::Priority, SortDirection::Asc),
    };
    let sorted = query(&tasks, &opts);
    let labels: Vec<_> = sorted.iter().map(|t| t.task.priority.as_deref().unwrap()).collect();
    assert_eq!(labels, vec!["High", "High", "Medium", "Low"]);
    assert_eq!(ids(&sorted), vec!["b", "d", "c", "a"]);
}

#[test]
fn explorer_query_combines_filter_search_and_sort() {
    let opts = QueryOptions::default()
        .with_status("Action")
        .with_search("platform")
        .with_sort(SortSpec::new(SortKey::Name, SortDirection::Desc));
    let found = query(&enriched(), &opts);
    assert_eq!(ids(&found), vec!["3"]);

    let opts = QueryOptions::default().with_status("Action");
    assert_eq!(ids(&query(&enriched(), &opts)), vec!["4", "6", "3", "5"]);
}

#[test]
fn empty_task_list_is_never_an_error() {
    let tasks = build_from_json(&json!([]), &json!([])).unwrap();
    assert!(tasks.is_empty());
    let segments = segment(&tasks, &default_buckets());
    assert!(segments.iter().all(|b| b.tasks.is_empty()));
    assert!(query(&tasks, &QueryOptions::default()).is_empty());
}
