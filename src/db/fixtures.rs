//! Test-seeding fixtures.
//!
//! Deterministic and randomized sample tasks plus range-based seed/cleanup
//! helpers. Randomized ids land in a reserved high band disjoint from real
//! data so cleanup can always go by range bound instead of per-id tracking.
//! The repository itself never touches this module.

use chrono::{Duration, TimeZone, Utc};
use sqlx::SqlitePool;

use crate::db::sqlite::SqliteTaskStore;
use crate::db::{DbError, DbResult, Task, TaskStorage};

/// Lower bound of the id band reserved for test-generated rows; the
/// cleanup boundary is `id >= RANDOM_ID_FACTOR`.
pub const RANDOM_ID_FACTOR: i64 = 1_000_000;

const FIXTURE_TASK_1_ID: i64 = 1337;
const FIXTURE_TASK_2_ID: i64 = 7331;
const FIXTURE_TASK_3_ID: i64 = 1234;

const OPENED_AFTER_DAYS: i64 = 5;

const AUTHOR_1_ID: i64 = 1;
const AUTHOR_2_ID: i64 = 2;

/// Draw a random task id from `[RANDOM_ID_FACTOR, 2 * RANDOM_ID_FACTOR)`.
pub fn random_task_id() -> i64 {
    let fraction: f64 = rand::random();
    RANDOM_ID_FACTOR + (fraction * RANDOM_ID_FACTOR as f64) as i64
}

pub fn fixture_task_1() -> Task {
    Task {
        id: FIXTURE_TASK_1_ID,
        opened: Some(Utc::now()),
        closed: None,
        author_id: AUTHOR_1_ID,
        assigned_id: AUTHOR_1_ID,
        title: "Fixture Task #1".to_string(),
        content: "This is a task #1 for tests.".to_string(),
    }
}

pub fn fixture_task_2() -> Task {
    Task {
        id: FIXTURE_TASK_2_ID,
        opened: Some(Utc::now() + Duration::days(OPENED_AFTER_DAYS)),
        closed: None,
        author_id: AUTHOR_2_ID,
        assigned_id: AUTHOR_2_ID,
        title: "Fixture Task #2".to_string(),
        content: "This is a task #2 for tests.".to_string(),
    }
}

pub fn fixture_task_3() -> Task {
    let opened = Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap();

    Task {
        id: FIXTURE_TASK_3_ID,
        opened: Some(opened),
        closed: Some(opened + Duration::days(1)),
        author_id: AUTHOR_1_ID,
        assigned_id: AUTHOR_2_ID,
        title: "Fixture Task #3".to_string(),
        content: "This is a task #3 for tests.".to_string(),
    }
}

/// All deterministic fixtures, in id-agnostic seeding order.
pub fn fixture_tasks() -> Vec<Task> {
    vec![fixture_task_1(), fixture_task_2(), fixture_task_3()]
}

/// Seed the given tasks in one batch.
pub async fn apply_fixtures(pool: &SqlitePool, tasks: &[Task]) -> DbResult<u64> {
    let store = SqliteTaskStore { pool };
    store.bulk_create(tasks).await
}

/// Remove every task at or above the given id bound.
pub async fn flush_fixtures(pool: &SqlitePool, min_id: i64) -> DbResult<u64> {
    let result = sqlx::query("DELETE FROM tasks WHERE id >= ?")
        .bind(min_id)
        .execute(pool)
        .await
        .map_err(DbError::delete)?;

    Ok(result.rows_affected())
}
