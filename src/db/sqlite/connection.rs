//! SQLite connection and migration management.

use std::path::Path;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::task::SqliteTaskStore;
use crate::db::{DbError, DbResult};

/// SQLite database handle.
///
/// Owns the connection pool and hands out repositories borrowing it.
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open a database at the given path, creating the file if missing.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Create an in-memory database (useful for testing).
    ///
    /// Capped at one connection; each in-memory connection would otherwise
    /// see its own empty database.
    pub async fn in_memory() -> DbResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Run pending migrations embedded from `migrations/`.
    pub async fn migrate(&self) -> DbResult<()> {
        sqlx::migrate!()
            .run(&self.pool)
            .await
            .map_err(|e| DbError::Migration {
                message: e.to_string(),
            })
    }

    /// Get the task repository.
    pub fn tasks(&self) -> SqliteTaskStore<'_> {
        SqliteTaskStore { pool: &self.pool }
    }

    /// Access the underlying pool, for seeding and advanced operations.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
