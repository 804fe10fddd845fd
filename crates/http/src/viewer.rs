//! Server-rendered index page: row table, submission form, bulk edit, pagination.

use incident_tracker_core::IncidentRow;
use serde::Serialize;
use tera::{Context, Tera};

/// Embedded tera template for the index page.
pub const INDEX_TEMPLATE: &str = include_str!("index.html");

const INDEX_NAME: &str = "index.html";

/// Everything the index template reads.
#[derive(Debug, Serialize)]
pub struct IndexView {
    pub rows: Vec<IncidentRow>,
    pub total: u64,
    pub pages: u64,
    pub current_page: u32,
    pub has_next: bool,
    pub has_prev: bool,
    pub issues: Vec<String>,
    pub assignees: Vec<String>,
    pub notice: Option<String>,
}

/// Tera instance holding the embedded templates. Autoescaping is on for `.html`.
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(INDEX_NAME, INDEX_TEMPLATE)?;
        Ok(Self { tera })
    }

    pub fn render_index(&self, view: &IndexView) -> Result<String, tera::Error> {
        let context = Context::from_serialize(view)?;
        self.tera.render(INDEX_NAME, &context)
    }
}
