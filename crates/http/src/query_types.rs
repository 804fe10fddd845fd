//! Request/query types (Deserialize)

use incident_tracker_core::{
    NewIncidentRow, PageRequest, RowFilter, derive_in_scope, derive_prep,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub page: Option<u32>,
}

/// New-row submission from the index page form.
///
/// Checkbox fields are present only when checked.
#[derive(Debug, Deserialize)]
pub struct SubmitRowForm {
    pub incident: String,
    pub prep_checkbox: Option<String>,
    pub prep_date: String,
    pub assigned_to: String,
    #[serde(alias = "date")]
    pub issue_date: String,
    pub in_scope: Option<String>,
    pub comments: String,
    pub rca: String,
    #[serde(default)]
    pub identified_issue: String,
}

impl SubmitRowForm {
    pub fn into_new_row(self) -> NewIncidentRow {
        NewIncidentRow {
            prep: derive_prep(self.prep_checkbox.is_some(), &self.prep_date),
            in_scope: derive_in_scope(self.in_scope.is_some()),
            incident: self.incident,
            assigned_to: self.assigned_to,
            issue_date: self.issue_date,
            comments: self.comments,
            rca: self.rca,
            identified_issue: self.identified_issue,
        }
    }
}

/// `/get_rows` query: `page`, `per_page`, `filter`, repeatable `assignee`.
#[derive(Debug, PartialEq, Eq)]
pub struct RowsQuery {
    pub page: PageRequest,
    pub filter: RowFilter,
}

impl RowsQuery {
    /// Build from raw query pairs so `assignee` can repeat. Unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>, default_per_page: u32) -> Result<Self, String> {
        let mut page = 1u32;
        let mut per_page = default_per_page;
        let mut search = None;
        let mut assignees = Vec::new();
        for (key, value) in pairs {
            match key.as_str() {
                "page" => page = parse_number("page", &value)?,
                "per_page" => per_page = parse_number("per_page", &value)?,
                "filter" => search = Some(value),
                "assignee" => assignees.push(value),
                _ => {},
            }
        }
        Ok(Self {
            page: PageRequest::new(page, per_page),
            filter: RowFilter::new(search, assignees),
        })
    }
}

fn parse_number(name: &str, value: &str) -> Result<u32, String> {
    value.trim().parse().map_err(|_| format!("{name} must be a positive integer, got '{value}'"))
}
