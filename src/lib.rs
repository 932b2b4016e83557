//! Storage-agnostic task persistence.
//!
//! The [`db`] module defines the domain model, the [`db::TaskStorage`]
//! contract, and a SQLite-backed implementation built on sqlx.

pub mod db;
