//! Domain models for task persistence.
//!
//! These models are storage-agnostic and carry no behavior; all schema
//! knowledge lives in the backend's row mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An issue/ticket-like work item.
///
/// `id == 0` means "not yet assigned" — the store allocates one on creation.
/// Explicit ids are honoured so fixtures can seed known rows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    /// Open time. `None` on input lets the store apply its default;
    /// never absent once persisted.
    pub opened: Option<DateTime<Utc>>,
    /// Close time. `None` means the task is still open.
    pub closed: Option<DateTime<Utc>>,
    /// Authoring user reference; `0` is reserved as "unset".
    pub author_id: i64,
    /// Assigned user reference; `0` is reserved as "unset".
    pub assigned_id: i64,
    pub title: String,
    pub content: String,
}

/// Filter dimensions for list queries.
///
/// Each field is independently togglable: `0` disables the dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Restrict to tasks authored by this user.
    pub author_id: i64,
    /// Restrict to tasks carrying this label.
    pub label_id: i64,
}

/// Result-window bounds for list queries. `0` means unbounded / from the start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationOptions {
    pub offset: u32,
    pub limit: u32,
}

/// Combined filter and pagination carrier for [`list`](crate::db::TaskStorage::list).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub filter: FilterOptions,
    pub page: PaginationOptions,
}
