//! Database abstraction layer.
//!
//! This module provides trait-based abstractions for task persistence,
//! allowing different storage backends to be swapped without changing
//! business logic.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Task) and query option carriers
//! - `repository`: Trait definition for data access
//! - `fixtures`: Test-seeding helpers (behind the `fixtures` feature)
//! - `sqlite`: SQLite implementation built on sqlx

mod error;
mod models;
mod repository;
pub mod sqlite;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

#[cfg(test)]
mod models_test;

pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::{SqliteDatabase, SqliteTaskStore};
