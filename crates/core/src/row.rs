//! Incident rows and the fields derived from the submission form.

use serde::{Deserialize, Serialize};

use crate::constants::{NO, YES};

/// One persisted incident record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentRow {
    pub id: i64,
    pub incident: String,
    /// `"Yes <date>"` or `"No"`.
    pub prep: String,
    pub assigned_to: String,
    pub issue_date: String,
    /// `"Yes"` or `"No"`.
    pub in_scope: String,
    pub comments: String,
    pub rca: String,
    /// Comma-separated free text.
    pub identified_issue: String,
}

/// A row as it is about to be inserted (no id yet).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIncidentRow {
    pub incident: String,
    pub prep: String,
    pub assigned_to: String,
    pub issue_date: String,
    pub in_scope: String,
    pub comments: String,
    pub rca: String,
    pub identified_issue: String,
}

impl NewIncidentRow {
    #[must_use]
    pub fn into_row(self, id: i64) -> IncidentRow {
        IncidentRow {
            id,
            incident: self.incident,
            prep: self.prep,
            assigned_to: self.assigned_to,
            issue_date: self.issue_date,
            in_scope: self.in_scope,
            comments: self.comments,
            rca: self.rca,
            identified_issue: self.identified_issue,
        }
    }
}

/// Partial update of a row. `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowPatch {
    pub incident: Option<String>,
    pub prep: Option<String>,
    pub assigned_to: Option<String>,
    pub issue_date: Option<String>,
    pub in_scope: Option<String>,
    pub comments: Option<String>,
    pub rca: Option<String>,
    pub identified_issue: Option<String>,
}

impl RowPatch {
    pub fn is_empty(&self) -> bool {
        self.incident.is_none()
            && self.prep.is_none()
            && self.assigned_to.is_none()
            && self.issue_date.is_none()
            && self.in_scope.is_none()
            && self.comments.is_none()
            && self.rca.is_none()
            && self.identified_issue.is_none()
    }

    /// Overwrite the fields of `row` that this patch carries.
    pub fn apply_to(&self, row: &mut IncidentRow) {
        let fields = [
            (&self.incident, &mut row.incident),
            (&self.prep, &mut row.prep),
            (&self.assigned_to, &mut row.assigned_to),
            (&self.issue_date, &mut row.issue_date),
            (&self.in_scope, &mut row.in_scope),
            (&self.comments, &mut row.comments),
            (&self.rca, &mut row.rca),
            (&self.identified_issue, &mut row.identified_issue),
        ];
        for (patch, target) in fields {
            if let Some(value) = patch {
                target.clone_from(value);
            }
        }
    }

    /// Set the field named `field`. Returns `false` for an unknown name.
    pub fn set_field(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "incident" => &mut self.incident,
            "prep" => &mut self.prep,
            "assigned_to" => &mut self.assigned_to,
            "issue_date" => &mut self.issue_date,
            "in_scope" => &mut self.in_scope,
            "comments" => &mut self.comments,
            "rca" => &mut self.rca,
            "identified_issue" => &mut self.identified_issue,
            _ => return false,
        };
        *slot = Some(value);
        true
    }
}

/// Encode the prep checkbox and its date as `"Yes <date>"` or `"No"`.
pub fn derive_prep(checked: bool, prep_date: &str) -> String {
    if checked {
        format!("{YES} {prep_date}")
    } else {
        NO.to_owned()
    }
}

/// Encode the in-scope checkbox as `"Yes"` or `"No"`.
pub fn derive_in_scope(checked: bool) -> String {
    let flag = if checked { YES } else { NO };
    flag.to_owned()
}
