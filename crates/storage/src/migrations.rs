//! SQLite schema for incident-tracker storage.

use incident_tracker_core::fold_case;
use sqlx::{Row, SqlitePool};

use crate::sqlite_storage::BEGIN_WRITE;

/// Create the `rows` and `identified_issues` tables if they are missing.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS rows (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            incident TEXT NOT NULL DEFAULT '',
            prep TEXT NOT NULL DEFAULT '',
            assigned_to TEXT NOT NULL DEFAULT '',
            issue_date TEXT NOT NULL DEFAULT '',
            in_scope TEXT NOT NULL DEFAULT '',
            comments TEXT NOT NULL DEFAULT '',
            rca TEXT NOT NULL DEFAULT '',
            identified_issue TEXT NOT NULL DEFAULT '',
            incident_folded TEXT NOT NULL DEFAULT '',
            assigned_to_folded TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    add_folded_columns(pool).await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_rows_assigned_to ON rows (assigned_to)")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS identified_issues (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            identified_issue TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::debug!("schema migrations applied");
    Ok(())
}

/// Databases created before the folded search columns existed get them added
/// and backfilled. SQLite's `lower()` only folds ASCII, so the backfill runs in Rust.
async fn add_folded_columns(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let columns: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info('rows')")
        .fetch_all(pool)
        .await?;
    if columns.iter().any(|c| c == "incident_folded") {
        return Ok(());
    }

    let mut tx = pool.begin_with(BEGIN_WRITE).await?;
    sqlx::query("ALTER TABLE rows ADD COLUMN incident_folded TEXT NOT NULL DEFAULT ''")
        .execute(&mut *tx)
        .await?;
    sqlx::query("ALTER TABLE rows ADD COLUMN assigned_to_folded TEXT NOT NULL DEFAULT ''")
        .execute(&mut *tx)
        .await?;

    let rows = sqlx::query("SELECT id, incident, assigned_to FROM rows")
        .fetch_all(&mut *tx)
        .await?;
    for row in &rows {
        let id: i64 = row.try_get("id")?;
        let incident: String = row.try_get("incident")?;
        let assigned_to: String = row.try_get("assigned_to")?;
        sqlx::query("UPDATE rows SET incident_folded = ?, assigned_to_folded = ? WHERE id = ?")
            .bind(fold_case(&incident))
            .bind(fold_case(&assigned_to))
            .bind(id)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    tracing::info!(backfilled = rows.len(), "added folded search columns to rows");
    Ok(())
}
