//! Tests for domain models.

use chrono::{TimeZone, Utc};

use crate::db::{SearchOptions, Task};

#[test]
fn task_serializes_round_trip() {
    let task = Task {
        id: 9,
        opened: Some(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()),
        closed: None,
        author_id: 1,
        assigned_id: 2,
        title: "Serialize Me".to_string(),
        content: "Body.".to_string(),
    };

    let json = serde_json::to_string(&task).expect("serialize");
    let back: Task = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, task);
}

#[test]
fn default_task_has_unset_sentinels() {
    let task = Task::default();
    assert_eq!(task.id, 0);
    assert!(task.opened.is_none());
    assert!(task.closed.is_none());
    assert_eq!(task.author_id, 0);
}

#[test]
fn default_search_options_disable_every_dimension() {
    let opts = SearchOptions::default();
    assert_eq!(opts.filter.author_id, 0);
    assert_eq!(opts.filter.label_id, 0);
    assert_eq!(opts.page.limit, 0);
    assert_eq!(opts.page.offset, 0);
}
