//! Tests for SqliteDatabase connection handling.

use crate::db::{SqliteDatabase, Task, TaskStorage};

#[tokio::test]
async fn in_memory_database_migrates() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("in-memory database");
    db.migrate().await.expect("migrations apply");

    // Running the migrator again is a no-op, not an error.
    db.migrate().await.expect("migrations are idempotent");
}

#[tokio::test]
async fn file_database_persists_across_handles() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("tasks.db");

    {
        let db = SqliteDatabase::open(&path).await.expect("open database");
        db.migrate().await.expect("migrations apply");
        let task = Task {
            id: 1,
            title: "Persisted".to_string(),
            ..Task::default()
        };
        db.tasks().create(&task).await.expect("create");
    }

    let db = SqliteDatabase::open(&path).await.expect("reopen database");
    db.migrate().await.expect("migrations apply");
    let task = db.tasks().get_by_id(1).await.expect("row survives reopen");
    assert_eq!(task.title, "Persisted");
}
