//! SQLite `TaskStorage` implementation.

use sqlx::SqlitePool;
use tracing::debug;

use super::helpers::build_limit_offset_clause;
use super::row::{TaskRow, row_to_task, rows_to_tasks, task_to_row};
use crate::db::{DbError, DbResult, SearchOptions, Task, TaskStorage};

const TASK_COLUMNS: &str = "id, opened, closed, author_id, assigned_id, title, content";

/// One VALUES group per inserted row; a NULL id lets the engine assign one
/// and a NULL opened falls to the engine's default open time.
const INSERT_VALUES: &str = "(?, COALESCE(?, CURRENT_TIMESTAMP), ?, ?, ?, ?, ?)";

/// sqlx-backed task repository.
///
/// Stateless between calls; every operation is a single autonomous
/// statement executed through the shared pool.
pub struct SqliteTaskStore<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> SqliteTaskStore<'a> {
    fn bind_insert_row<'q>(
        query: sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>>,
        row: TaskRow,
    ) -> sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>> {
        query
            .bind((row.id != 0).then_some(row.id))
            .bind(row.opened)
            .bind(row.closed)
            .bind(row.author_id)
            .bind(row.assigned_id)
            .bind(row.title)
            .bind(row.content)
    }
}

impl<'a> TaskStorage for SqliteTaskStore<'a> {
    async fn create(&self, task: &Task) -> DbResult<u64> {
        let sql = format!("INSERT INTO tasks ({TASK_COLUMNS}) VALUES {INSERT_VALUES}");

        let result = Self::bind_insert_row(sqlx::query(&sql), task_to_row(task))
            .execute(self.pool)
            .await
            .map_err(DbError::insert)?;

        let affected = result.rows_affected();
        debug!(task_id = task.id, affected, "created task");
        Ok(affected)
    }

    async fn bulk_create(&self, tasks: &[Task]) -> DbResult<u64> {
        if tasks.is_empty() {
            return Ok(0);
        }

        // One multi-row statement: the whole batch succeeds or fails as a
        // unit, no partial insert is attempted or retried.
        let mut sql = format!("INSERT INTO tasks ({TASK_COLUMNS}) VALUES ");
        sql.push_str(&vec![INSERT_VALUES; tasks.len()].join(", "));

        let mut query = sqlx::query(&sql);
        for task in tasks {
            query = Self::bind_insert_row(query, task_to_row(task));
        }

        let result = query
            .execute(self.pool)
            .await
            .map_err(DbError::insert)?;

        let affected = result.rows_affected();
        debug!(batch = tasks.len(), affected, "bulk created tasks");
        Ok(affected)
    }

    async fn get_by_id(&self, id: i64) -> DbResult<Task> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?");

        let row = sqlx::query_as::<_, TaskRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| DbError::query(&sql, e))?;

        row.map(row_to_task).ok_or(DbError::NotFound { id })
    }

    async fn list(&self, opts: &SearchOptions) -> DbResult<Vec<Task>> {
        // Composable predicates: each filter dimension is independently
        // omittable and the active ones are ANDed. The label association is
        // consulted only when that dimension is active, so unlabelled tasks
        // still appear in unfiltered listings.
        let mut conditions: Vec<&str> = Vec::new();
        let mut binds: Vec<i64> = Vec::new();

        if opts.filter.author_id != 0 {
            conditions.push("author_id = ?");
            binds.push(opts.filter.author_id);
        }

        if opts.filter.label_id != 0 {
            conditions.push(
                "EXISTS (SELECT 1 FROM tasks_labels tl \
                 WHERE tl.task_id = tasks.id AND tl.label_id = ?)",
            );
            binds.push(opts.filter.label_id);
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let window = build_limit_offset_clause(&opts.page);
        let sql =
            format!("SELECT {TASK_COLUMNS} FROM tasks{where_clause} ORDER BY id ASC{window}");

        let mut query = sqlx::query_as::<_, TaskRow>(&sql);
        for value in binds {
            query = query.bind(value);
        }

        let rows = query
            .fetch_all(self.pool)
            .await
            .map_err(|e| DbError::query(&sql, e))?;

        debug!(matched = rows.len(), "listed tasks");
        Ok(rows_to_tasks(rows))
    }

    async fn update(&self, task: &Task) -> DbResult<u64> {
        // Full-field replacement by primary key. A `None` opened keeps the
        // stored open time so the column never goes null.
        let row = task_to_row(task);

        let result = sqlx::query(
            "UPDATE tasks SET opened = COALESCE(?, opened), closed = ?, author_id = ?, \
             assigned_id = ?, title = ?, content = ? WHERE id = ?",
        )
        .bind(row.opened)
        .bind(row.closed)
        .bind(row.author_id)
        .bind(row.assigned_id)
        .bind(row.title)
        .bind(row.content)
        .bind(row.id)
        .execute(self.pool)
        .await
        .map_err(DbError::update)?;

        let affected = result.rows_affected();
        debug!(task_id = task.id, affected, "updated task");
        Ok(affected)
    }

    async fn delete(&self, id: i64) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(DbError::delete)?;

        let affected = result.rows_affected();
        debug!(task_id = id, affected, "deleted task");
        Ok(affected)
    }
}
