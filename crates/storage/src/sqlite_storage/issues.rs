//! IssueStore implementation for SqliteStorage.

use async_trait::async_trait;
use incident_tracker_core::IdentifiedIssue;
use sqlx::Row;

use super::{BEGIN_WRITE, SqliteStorage};
use crate::error::Result;
use crate::traits::IssueStore;

#[async_trait]
impl IssueStore for SqliteStorage {
    async fn list_issues(&self) -> Result<Vec<IdentifiedIssue>> {
        let rows = sqlx::query(
            "SELECT id, identified_issue FROM identified_issues ORDER BY identified_issue",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter()
            .map(|r| {
                Ok(IdentifiedIssue {
                    id: r.try_get("id")?,
                    identified_issue: r.try_get("identified_issue")?,
                })
            })
            .collect()
    }

    async fn insert_new_issues(&self, values: &[String]) -> Result<Vec<String>> {
        if values.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin_with(BEGIN_WRITE).await?;
        let mut inserted = Vec::new();

        for value in values {
            let existing: Option<i64> =
                sqlx::query_scalar("SELECT id FROM identified_issues WHERE identified_issue = ?")
                    .bind(value)
                    .fetch_optional(&mut *tx)
                    .await?;
            if existing.is_some() {
                continue;
            }

            // Unique index still guards against writers outside this store.
            let result = sqlx::query(
                "INSERT INTO identified_issues (identified_issue) VALUES (?)
                 ON CONFLICT (identified_issue) DO NOTHING",
            )
            .bind(value)
            .execute(&mut *tx)
            .await?;
            if result.rows_affected() > 0 {
                inserted.push(value.clone());
            } else {
                tracing::debug!(issue = %value, "identified issue already present, skipped");
            }
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
