//! Test utilities and module declarations for storage tests.

use std::str::FromStr;

use crate::SqliteStorage;
use incident_tracker_core::NewIncidentRow;

#[expect(clippy::unwrap_used, reason = "test code")]
pub async fn create_test_storage() -> SqliteStorage {
    SqliteStorage::in_memory().await.unwrap()
}

/// File-backed storage in a fresh temp dir. Keep the dir alive for the test.
#[expect(clippy::unwrap_used, reason = "test code")]
pub async fn create_file_storage(max_connections: u32) -> (tempfile::TempDir, SqliteStorage) {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let url = format!("sqlite://{}", temp_dir.path().join("rows.db").display());
    let storage = SqliteStorage::new(&url, max_connections).await.unwrap();
    (temp_dir, storage)
}

pub fn create_test_row(incident: &str, assigned_to: &str) -> NewIncidentRow {
    NewIncidentRow {
        incident: incident.to_owned(),
        prep: "Yes 2024-05-01".to_owned(),
        assigned_to: assigned_to.to_owned(),
        issue_date: "2024-05-02".to_owned(),
        in_scope: "Yes".to_owned(),
        comments: "Test comments".to_owned(),
        rca: "Test rca".to_owned(),
        identified_issue: "Disk full".to_owned(),
    }
}

mod row_tests;

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn file_database_is_created_and_reopened() {
    use crate::RowStore;

    let temp_dir = tempfile::TempDir::new().unwrap();
    let url = format!("sqlite://{}", temp_dir.path().join("rows.db").display());

    let storage = SqliteStorage::new(&url, 2).await.unwrap();
    storage.create_row(create_test_row("INC-persist", "alice")).await.unwrap();
    storage.pool().close().await;

    let reopened = SqliteStorage::new(&url, 2).await.unwrap();
    let rows = reopened.list_rows().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].incident, "INC-persist");
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn legacy_rows_table_gets_folded_columns_backfilled() {
    use crate::RowStore;
    use incident_tracker_core::{PageRequest, RowFilter};

    let temp_dir = tempfile::TempDir::new().unwrap();
    let url = format!("sqlite://{}", temp_dir.path().join("rows.db").display());

    let options = sqlx::sqlite::SqliteConnectOptions::from_str(&url).unwrap().create_if_missing(true);
    let legacy = sqlx::SqlitePool::connect_with(options).await.unwrap();
    sqlx::query(
        "CREATE TABLE rows (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            incident TEXT NOT NULL DEFAULT '',
            prep TEXT NOT NULL DEFAULT '',
            assigned_to TEXT NOT NULL DEFAULT '',
            issue_date TEXT NOT NULL DEFAULT '',
            in_scope TEXT NOT NULL DEFAULT '',
            comments TEXT NOT NULL DEFAULT '',
            rca TEXT NOT NULL DEFAULT '',
            identified_issue TEXT NOT NULL DEFAULT ''
        )",
    )
    .execute(&legacy)
    .await
    .unwrap();
    sqlx::query("INSERT INTO rows (incident, assigned_to) VALUES ('Élan outage', 'Zoë')")
        .execute(&legacy)
        .await
        .unwrap();
    legacy.close().await;

    let storage = SqliteStorage::new(&url, 2).await.unwrap();
    let filter = RowFilter::new(Some("ÉLAN".to_owned()), vec![]);
    let page = storage.list_rows_page(&filter, PageRequest::default()).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].assigned_to, "Zoë");

    // Reopening finds the columns present and leaves them alone.
    storage.pool().close().await;
    let reopened = SqliteStorage::new(&url, 2).await.unwrap();
    let filter = RowFilter::new(Some("zoË".to_owned()), vec![]);
    assert_eq!(reopened.list_rows_page(&filter, PageRequest::default()).await.unwrap().total, 1);
}
