//! Parsing of bulk-edit form submissions.
//!
//! The bulk form names every input `<field>_<row id>`, e.g. `assigned_to_12`.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::row::RowPatch;

static BULK_KEY: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^(incident|prep|assigned_to|issue_date|in_scope|comments|rca|identified_issue)_(\d+)$",
    )
    .ok()
});

/// Split a bulk-edit key into its field name and row id.
pub fn parse_bulk_key(key: &str) -> Option<(&str, i64)> {
    let caps = BULK_KEY.as_ref()?.captures(key)?;
    let field = caps.get(1)?.as_str();
    let id = caps.get(2)?.as_str().parse().ok()?;
    Some((field, id))
}

/// Group submitted key/value pairs into one patch per row id.
///
/// Keys that do not follow the `<field>_<id>` scheme are ignored. When a key
/// repeats, the last value wins.
pub fn parse_bulk_edit<I, K, V>(pairs: I) -> BTreeMap<i64, RowPatch>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut patches: BTreeMap<i64, RowPatch> = BTreeMap::new();
    for (key, value) in pairs {
        let Some((field, id)) = parse_bulk_key(key.as_ref()) else {
            continue;
        };
        patches.entry(id).or_default().set_field(field, value.into());
    }
    patches
}
