//! Identified-issue vocabulary entries.

use serde::{Deserialize, Serialize};

/// One deduplicated root-cause tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifiedIssue {
    pub id: i64,
    pub identified_issue: String,
}

/// Split comma-separated issue text into trimmed, non-empty, unique segments.
///
/// First occurrence wins; relative order is preserved.
pub fn split_issues(text: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for segment in text.split(',') {
        let segment = segment.trim();
        if segment.is_empty() || out.iter().any(|s| s == segment) {
            continue;
        }
        out.push(segment.to_owned());
    }
    out
}
