//! SQLite implementation of the storage contract.
//!
//! This module provides a sqlx-backed implementation of the
//! [`TaskStorage`](crate::db::TaskStorage) trait defined in the parent
//! module.

mod connection;
mod helpers;
mod row;
mod task;

#[cfg(test)]
mod connection_test;

pub use connection::SqliteDatabase;
pub use task::SqliteTaskStore;
