//! Row mapping between the domain `Task` and the `tasks` table.
//!
//! The single place that knows storage column shapes. Both directions are
//! total, field-for-field copies; no derived or computed fields.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::db::Task;

/// Stored-row shape of one task.
///
/// `opened` is `Option` to mirror the domain exactly; the column itself is
/// NOT NULL so reads always carry a value.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub(crate) struct TaskRow {
    pub id: i64,
    pub opened: Option<DateTime<Utc>>,
    pub closed: Option<DateTime<Utc>>,
    pub author_id: i64,
    pub assigned_id: i64,
    pub title: String,
    pub content: String,
}

pub(crate) fn task_to_row(t: &Task) -> TaskRow {
    TaskRow {
        id: t.id,
        opened: t.opened,
        closed: t.closed,
        author_id: t.author_id,
        assigned_id: t.assigned_id,
        title: t.title.clone(),
        content: t.content.clone(),
    }
}

pub(crate) fn row_to_task(r: TaskRow) -> Task {
    Task {
        id: r.id,
        opened: r.opened,
        closed: r.closed,
        author_id: r.author_id,
        assigned_id: r.assigned_id,
        title: r.title,
        content: r.content,
    }
}

/// Convert an ordered row set, preserving order.
pub(crate) fn rows_to_tasks(rows: Vec<TaskRow>) -> Vec<Task> {
    rows.into_iter().map(row_to_task).collect()
}
