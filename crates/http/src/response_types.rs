//! Response types (Serialize)

use incident_tracker_core::{IdentifiedIssue, IncidentRow, Page};
use serde::Serialize;

/// One autocomplete entry from `/get_issues`.
#[derive(Debug, Serialize)]
pub struct IssueSuggestion {
    pub text: String,
}

impl From<IdentifiedIssue> for IssueSuggestion {
    fn from(issue: IdentifiedIssue) -> Self {
        Self { text: issue.identified_issue }
    }
}

#[derive(Debug, Serialize)]
pub struct RowsResponse {
    pub rows: Vec<IncidentRow>,
    pub total: u64,
    pub pages: u64,
    pub current_page: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl From<Page<IncidentRow>> for RowsResponse {
    fn from(page: Page<IncidentRow>) -> Self {
        Self {
            total: page.total,
            pages: page.pages(),
            current_page: page.page,
            has_next: page.has_next(),
            has_prev: page.has_prev(),
            rows: page.items,
        }
    }
}
