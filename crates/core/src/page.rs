//! Pagination and filtering inputs for row listings.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// A 1-based page request. Out-of-range values are clamped on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    #[must_use]
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page: page.max(1), per_page: per_page.clamp(1, MAX_PAGE_SIZE) }
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// One page of results plus the total count across all pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self { items, total, page: request.page(), per_page: request.per_page() }
    }

    /// Number of pages; zero when there are no items.
    pub fn pages(&self) -> u64 {
        self.total.div_ceil(u64::from(self.per_page.max(1)))
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// Row listing filter. Empty fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFilter {
    /// Substring matched against incident or assignee after [`fold_case`]
    /// on both sides, so non-ASCII letters compare case-insensitively too.
    pub search: Option<String>,
    /// Exact assignee names; a row matches if its assignee is any of them.
    pub assignees: Vec<String>,
}

impl RowFilter {
    /// Build a filter, treating blank search text and blank assignees as absent.
    #[must_use]
    pub fn new(search: Option<String>, assignees: Vec<String>) -> Self {
        let search = search.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty());
        let assignees = assignees
            .into_iter()
            .map(|a| a.trim().to_owned())
            .filter(|a| !a.is_empty())
            .collect();
        Self { search, assignees }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.assignees.is_empty()
    }

    /// The search text in the form stored in the folded columns.
    pub fn folded_search(&self) -> Option<String> {
        self.search.as_deref().map(fold_case)
    }
}

/// Unicode lowercase used for case-insensitive matching.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}
