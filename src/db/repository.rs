//! Repository trait for task persistence.
//!
//! This trait defines the contract for data access, allowing different
//! storage backends to be swapped without changing business logic. Mutations
//! report outcome via affected-row counts: a count of `0` from `update` or
//! `delete` is a legitimate "nothing matched" result, not an error, which
//! avoids a read-before-write race and an extra round trip.

use crate::db::{
    DbResult,
    models::{SearchOptions, Task},
};

/// Task persistence contract.
///
/// Every operation is a single stateless round trip to the engine; no
/// transaction spans calls and nothing is retried internally. Dropping a
/// returned future cancels the in-flight round trip.
#[allow(async_fn_in_trait)]
pub trait TaskStorage {
    /// Insert one task. Returns the affected-row count (expected `1`).
    ///
    /// A zero `id` lets the engine assign one; a non-zero `id` is stored
    /// as given. Title emptiness is enforced by the engine's constraint
    /// and surfaces as [`DbError::Insert`](crate::db::DbError::Insert).
    async fn create(&self, task: &Task) -> DbResult<u64>;

    /// Insert the whole sequence in one batched statement, all-or-nothing.
    ///
    /// Returns the total affected count, expected to equal `tasks.len()`.
    /// An empty input is a no-op returning `Ok(0)`.
    async fn bulk_create(&self, tasks: &[Task]) -> DbResult<u64>;

    /// Fetch exactly one task by primary key.
    ///
    /// Fails with [`DbError::NotFound`](crate::db::DbError::NotFound) when
    /// no row matches; this is the one domain-distinguishable error kind.
    async fn get_by_id(&self, id: i64) -> DbResult<Task>;

    /// List tasks matching the given filters, ordered by ascending id.
    ///
    /// Filter dimensions compose with AND; a zero value disables a
    /// dimension. Zero matches yield an empty vec, not an error.
    async fn list(&self, opts: &SearchOptions) -> DbResult<Vec<Task>>;

    /// Replace all fields of the row identified by `task.id`.
    ///
    /// Returns `0` (not an error) when no such row exists.
    async fn update(&self, task: &Task) -> DbResult<u64>;

    /// Remove the row with the given id.
    ///
    /// Returns `0` (not an error) when nothing matched; deleting the same
    /// id twice is therefore idempotent.
    async fn delete(&self, id: i64) -> DbResult<u64>;
}
