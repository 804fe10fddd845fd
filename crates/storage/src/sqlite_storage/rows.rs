//! RowStore implementation for SqliteStorage.

use async_trait::async_trait;
use incident_tracker_core::{
    IncidentRow, NewIncidentRow, Page, PageRequest, RowFilter, RowPatch, fold_case,
};
use sqlx::{QueryBuilder, Sqlite};

use super::{escape_like, row_to_incident, u64_to_i64, SqliteStorage, ROW_COLUMNS};
use crate::error::{Result, StorageError};
use crate::traits::RowStore;

/// Append the WHERE clause for `filter` (nothing when the filter is empty).
fn push_filter(qb: &mut QueryBuilder<'_, Sqlite>, filter: &RowFilter) {
    let mut has_where = false;
    if let Some(search) = filter.folded_search() {
        let pattern = format!("%{}%", escape_like(&search));
        qb.push(" WHERE (incident_folded LIKE ");
        qb.push_bind(pattern.clone());
        qb.push(" ESCAPE '\\' OR assigned_to_folded LIKE ");
        qb.push_bind(pattern);
        qb.push(" ESCAPE '\\')");
        has_where = true;
    }
    if !filter.assignees.is_empty() {
        qb.push(if has_where { " AND " } else { " WHERE " });
        qb.push("assigned_to IN (");
        let mut names = qb.separated(", ");
        for name in &filter.assignees {
            names.push_bind(name.clone());
        }
        names.push_unseparated(")");
    }
}

#[async_trait]
impl RowStore for SqliteStorage {
    async fn create_row(&self, row: NewIncidentRow) -> Result<IncidentRow> {
        let result = sqlx::query(
            "INSERT INTO rows (incident, prep, assigned_to, issue_date, in_scope, comments, rca,
                               identified_issue, incident_folded, assigned_to_folded)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&row.incident)
        .bind(&row.prep)
        .bind(&row.assigned_to)
        .bind(&row.issue_date)
        .bind(&row.in_scope)
        .bind(&row.comments)
        .bind(&row.rca)
        .bind(&row.identified_issue)
        .bind(fold_case(&row.incident))
        .bind(fold_case(&row.assigned_to))
        .execute(&self.pool)
        .await?;
        Ok(row.into_row(result.last_insert_rowid()))
    }

    async fn list_rows(&self) -> Result<Vec<IncidentRow>> {
        let rows = sqlx::query(&format!("SELECT {ROW_COLUMNS} FROM rows ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_incident).collect()
    }

    async fn list_rows_page(
        &self,
        filter: &RowFilter,
        page: PageRequest,
    ) -> Result<Page<IncidentRow>> {
        let mut count_qb = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM rows");
        push_filter(&mut count_qb, filter);
        let total = count_qb.build_query_scalar::<i64>().fetch_one(&self.pool).await?;

        let mut qb = QueryBuilder::<Sqlite>::new(format!("SELECT {ROW_COLUMNS} FROM rows"));
        push_filter(&mut qb, filter);
        qb.push(" ORDER BY id LIMIT ");
        qb.push_bind(i64::from(page.per_page()));
        qb.push(" OFFSET ");
        qb.push_bind(u64_to_i64(page.offset()));
        let rows = qb.build().fetch_all(&self.pool).await?;
        let items = rows.iter().map(row_to_incident).collect::<Result<Vec<_>>>()?;

        Ok(Page::new(items, u64::try_from(total).unwrap_or(0), page))
    }

    async fn get_row(&self, id: i64) -> Result<Option<IncidentRow>> {
        let row = sqlx::query(&format!("SELECT {ROW_COLUMNS} FROM rows WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_incident(&r)).transpose()
    }

    async fn update_row(&self, id: i64, patch: &RowPatch) -> Result<IncidentRow> {
        // One statement, so there is no read lock to upgrade under concurrent saves.
        let row = sqlx::query(&format!(
            "UPDATE rows
             SET incident = COALESCE(?, incident),
                 prep = COALESCE(?, prep),
                 assigned_to = COALESCE(?, assigned_to),
                 issue_date = COALESCE(?, issue_date),
                 in_scope = COALESCE(?, in_scope),
                 comments = COALESCE(?, comments),
                 rca = COALESCE(?, rca),
                 identified_issue = COALESCE(?, identified_issue),
                 incident_folded = COALESCE(?, incident_folded),
                 assigned_to_folded = COALESCE(?, assigned_to_folded)
             WHERE id = ?
             RETURNING {ROW_COLUMNS}"
        ))
        .bind(patch.incident.as_deref())
        .bind(patch.prep.as_deref())
        .bind(patch.assigned_to.as_deref())
        .bind(patch.issue_date.as_deref())
        .bind(patch.in_scope.as_deref())
        .bind(patch.comments.as_deref())
        .bind(patch.rca.as_deref())
        .bind(patch.identified_issue.as_deref())
        .bind(patch.incident.as_deref().map(fold_case))
        .bind(patch.assigned_to.as_deref().map(fold_case))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => row_to_incident(&row),
            None => Err(StorageError::not_found("row", id)),
        }
    }

    async fn delete_row(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM rows WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StorageError::not_found("row", id));
        }
        Ok(())
    }

    async fn distinct_assignees(&self) -> Result<Vec<String>> {
        let names: Vec<String> = sqlx::query_scalar(
            "SELECT DISTINCT assigned_to FROM rows WHERE assigned_to <> '' ORDER BY assigned_to",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }
}
