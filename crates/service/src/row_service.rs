use std::collections::BTreeMap;
use std::sync::Arc;

use incident_tracker_core::{IncidentRow, NewIncidentRow, Page, PageRequest, RowFilter, RowPatch};
use incident_tracker_storage::SqliteStorage;
use incident_tracker_storage::traits::RowStore;

use crate::{IssueService, ServiceError};

/// Result of a bulk edit: which ids were written and which had no row.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BulkEditOutcome {
    pub updated: Vec<i64>,
    pub missing: Vec<i64>,
}

pub struct RowService {
    storage: Arc<SqliteStorage>,
    issues: Arc<IssueService>,
}

impl RowService {
    #[must_use]
    pub fn new(storage: Arc<SqliteStorage>, issues: Arc<IssueService>) -> Self {
        Self { storage, issues }
    }

    /// Insert a submitted row and feed its issue text to the vocabulary.
    pub async fn submit_row(&self, row: NewIncidentRow) -> Result<IncidentRow, ServiceError> {
        let row = self.storage.create_row(row).await?;
        tracing::info!(id = row.id, incident = %row.incident, "row created");
        self.issues.record_issues(&row.identified_issue).await?;
        Ok(row)
    }

    pub async fn list_rows(&self) -> Result<Vec<IncidentRow>, ServiceError> {
        Ok(self.storage.list_rows().await?)
    }

    pub async fn list_rows_page(
        &self,
        filter: &RowFilter,
        page: PageRequest,
    ) -> Result<Page<IncidentRow>, ServiceError> {
        Ok(self.storage.list_rows_page(filter, page).await?)
    }

    pub async fn get_row(&self, id: i64) -> Result<Option<IncidentRow>, ServiceError> {
        Ok(self.storage.get_row(id).await?)
    }

    /// Update one row. Not-found if `id` has no row.
    pub async fn update_row(
        &self,
        id: i64,
        patch: &RowPatch,
    ) -> Result<IncidentRow, ServiceError> {
        if patch.is_empty() {
            return Err(ServiceError::InvalidInput("no fields to update".to_owned()));
        }
        let row = self.storage.update_row(id, patch).await?;
        if let Some(ref text) = patch.identified_issue {
            self.issues.record_issues(text).await?;
        }
        Ok(row)
    }

    /// Apply every patch, one commit per row. Ids without a row are skipped.
    pub async fn bulk_update(
        &self,
        patches: &BTreeMap<i64, RowPatch>,
    ) -> Result<BulkEditOutcome, ServiceError> {
        let mut outcome = BulkEditOutcome::default();
        for (&id, patch) in patches {
            match self.update_row(id, patch).await {
                Ok(_) => outcome.updated.push(id),
                Err(e) if e.is_not_found() => {
                    tracing::warn!(id, "bulk edit skipped missing row");
                    outcome.missing.push(id);
                },
                Err(e) => return Err(e),
            }
        }
        tracing::info!(
            updated = outcome.updated.len(),
            missing = outcome.missing.len(),
            "bulk edit applied"
        );
        Ok(outcome)
    }

    /// Delete one row. Not-found if `id` has no row.
    pub async fn delete_row(&self, id: i64) -> Result<(), ServiceError> {
        self.storage.delete_row(id).await?;
        tracing::info!(id, "row deleted");
        Ok(())
    }

    pub async fn assignees(&self) -> Result<Vec<String>, ServiceError> {
        Ok(self.storage.distinct_assignees().await?)
    }
}
