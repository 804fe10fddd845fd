//! Storage trait abstraction
//!
//! Async domain traits for the record store, so services can be exercised
//! against any backend that implements them.

use async_trait::async_trait;
use incident_tracker_core::{
    IdentifiedIssue, IncidentRow, NewIncidentRow, Page, PageRequest, RowFilter, RowPatch,
};

use crate::error::Result;

/// CRUD and listing operations on incident rows.
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Insert a row and return it with its assigned id.
    async fn create_row(&self, row: NewIncidentRow) -> Result<IncidentRow>;

    /// All rows, ascending by id.
    async fn list_rows(&self) -> Result<Vec<IncidentRow>>;

    /// Filtered rows for one page, with the total filtered count.
    async fn list_rows_page(
        &self,
        filter: &RowFilter,
        page: PageRequest,
    ) -> Result<Page<IncidentRow>>;

    /// Get row by id.
    async fn get_row(&self, id: i64) -> Result<Option<IncidentRow>>;

    /// Apply `patch` to row `id` and return the updated row. `NotFound` if absent.
    async fn update_row(&self, id: i64, patch: &RowPatch) -> Result<IncidentRow>;

    /// Delete row `id`. `NotFound` if absent.
    async fn delete_row(&self, id: i64) -> Result<()>;

    /// Distinct non-empty assignee names, sorted.
    async fn distinct_assignees(&self) -> Result<Vec<String>>;
}

/// Identified-issue vocabulary.
#[async_trait]
pub trait IssueStore: Send + Sync {
    /// Whole vocabulary, sorted by text.
    async fn list_issues(&self) -> Result<Vec<IdentifiedIssue>>;

    /// Insert each value not yet present, in a single transaction.
    ///
    /// Returns the values that were actually inserted; existing values and
    /// unique-constraint conflicts are skipped.
    async fn insert_new_issues(&self, values: &[String]) -> Result<Vec<String>>;
}
