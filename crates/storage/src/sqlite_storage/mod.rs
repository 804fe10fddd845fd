//! SQLite storage backend using sqlx.
//!
//! Split into files by table.

mod issues;
mod rows;

use std::str::FromStr;
use std::time::Duration;

use incident_tracker_core::{BUSY_TIMEOUT_SECS, IncidentRow, POOL_ACQUIRE_TIMEOUT_SECS};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};

use crate::error::{Result, StorageError};
use crate::migrations::run_migrations;

#[derive(Clone, Debug)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Open (creating if missing) the database at `database_url` and apply the schema.
    ///
    /// The file runs in WAL mode so readers never block the single writer.
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(BUSY_TIMEOUT_SECS));
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(POOL_ACQUIRE_TIMEOUT_SECS))
            .connect_with(options)
            .await?;
        Self::from_pool(pool).await
    }

    /// Private in-memory database. Single connection that is never recycled,
    /// since every SQLite connection to `:memory:` sees its own database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self> {
        run_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("SqliteStorage initialized");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Opens write transactions. Taking the write lock at `BEGIN` lets concurrent
/// writers wait on the busy timeout instead of deadlocking on a lock upgrade.
pub(crate) const BEGIN_WRITE: &str = "BEGIN IMMEDIATE";

pub(crate) const ROW_COLUMNS: &str =
    "id, incident, prep, assigned_to, issue_date, in_scope, comments, rca, identified_issue";

pub(crate) fn row_to_incident(row: &SqliteRow) -> Result<IncidentRow> {
    Ok(IncidentRow {
        id: row.try_get("id")?,
        incident: row.try_get("incident")?,
        prep: row.try_get("prep")?,
        assigned_to: row.try_get("assigned_to")?,
        issue_date: row.try_get("issue_date")?,
        in_scope: row.try_get("in_scope")?,
        comments: row.try_get("comments")?,
        rca: row.try_get("rca")?,
        identified_issue: row.try_get("identified_issue")?,
    })
}

/// Escape LIKE metacharacters so user text matches literally (`ESCAPE '\'`).
pub(crate) fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

/// Convert a `u64` count or offset to `i64` for SQL binds.
pub(crate) fn u64_to_i64(val: u64) -> i64 {
    i64::try_from(val).unwrap_or(i64::MAX)
}
