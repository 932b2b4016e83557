//! Database error types.
//!
//! Abstracted error types for storage operations: miette for diagnostic
//! output, thiserror for the derives. Each mutating operation gets its own
//! variant so callers see which statement kind failed; the engine error is
//! preserved as the source and never swallowed.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    /// No row matched a point lookup. Only `get_by_id` surfaces this;
    /// update/delete report a zero affected count instead.
    #[error("task not found: id {id}")]
    #[diagnostic(code(taskstore::db::not_found))]
    NotFound { id: i64 },

    #[error("insert rejected by engine")]
    #[diagnostic(code(taskstore::db::insert))]
    Insert {
        #[source]
        source: sqlx::Error,
    },

    #[error("update rejected by engine")]
    #[diagnostic(code(taskstore::db::update))]
    Update {
        #[source]
        source: sqlx::Error,
    },

    #[error("delete rejected by engine")]
    #[diagnostic(code(taskstore::db::delete))]
    Delete {
        #[source]
        source: sqlx::Error,
    },

    #[error("query failed: {statement}")]
    #[diagnostic(code(taskstore::db::query))]
    Query {
        /// The rendered statement, for diagnostics.
        statement: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("connection error: {message}")]
    #[diagnostic(code(taskstore::db::connection))]
    Connection { message: String },

    #[error("migration error: {message}")]
    #[diagnostic(code(taskstore::db::migration))]
    Migration { message: String },

    /// The caller's deadline or cancellation fired mid-operation.
    #[error("operation cancelled: {operation}")]
    #[diagnostic(code(taskstore::db::cancelled))]
    Cancelled { operation: &'static str },
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// SQLITE_INTERRUPT: a statement aborted by sqlite3_interrupt.
const SQLITE_INTERRUPT: &str = "9";

impl DbError {
    fn interrupted(err: &sqlx::Error) -> bool {
        match err {
            sqlx::Error::Database(db) => db.code().as_deref() == Some(SQLITE_INTERRUPT),
            sqlx::Error::PoolTimedOut => true,
            _ => false,
        }
    }

    pub(crate) fn insert(source: sqlx::Error) -> Self {
        if Self::interrupted(&source) {
            return Self::Cancelled {
                operation: "insert",
            };
        }
        Self::Insert { source }
    }

    pub(crate) fn update(source: sqlx::Error) -> Self {
        if Self::interrupted(&source) {
            return Self::Cancelled {
                operation: "update",
            };
        }
        Self::Update { source }
    }

    pub(crate) fn delete(source: sqlx::Error) -> Self {
        if Self::interrupted(&source) {
            return Self::Cancelled {
                operation: "delete",
            };
        }
        Self::Delete { source }
    }

    pub(crate) fn query(statement: impl Into<String>, source: sqlx::Error) -> Self {
        if Self::interrupted(&source) {
            return Self::Cancelled { operation: "query" };
        }
        Self::Query {
            statement: statement.into(),
            source,
        }
    }
}
