use std::sync::Arc;

use incident_tracker_core::{IdentifiedIssue, split_issues};
use incident_tracker_storage::SqliteStorage;
use incident_tracker_storage::traits::IssueStore;

use crate::ServiceError;

/// Maintains the deduplicated identified-issue vocabulary.
pub struct IssueService {
    storage: Arc<SqliteStorage>,
}

impl IssueService {
    #[must_use]
    pub fn new(storage: Arc<SqliteStorage>) -> Self {
        Self { storage }
    }

    /// Split comma-separated `text` and add the segments the vocabulary lacks.
    ///
    /// One transaction per call. Returns the newly added values.
    pub async fn record_issues(&self, text: &str) -> Result<Vec<String>, ServiceError> {
        let segments = split_issues(text);
        if segments.is_empty() {
            return Ok(Vec::new());
        }
        let inserted = self.storage.insert_new_issues(&segments).await?;
        if !inserted.is_empty() {
            tracing::info!(count = inserted.len(), "added identified issues");
        }
        Ok(inserted)
    }

    pub async fn list_issues(&self) -> Result<Vec<IdentifiedIssue>, ServiceError> {
        Ok(self.storage.list_issues().await?)
    }
}
