//! HTTP server for incident-tracker.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;
mod viewer;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use incident_tracker_service::{IssueService, RowService};
use incident_tracker_storage::SqliteStorage;

pub use query_types::RowsQuery;
pub use response_types::{IssueSuggestion, RowsResponse};
pub use viewer::{IndexView, PageRenderer};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Row CRUD and listing
    pub row_service: Arc<RowService>,
    /// Identified-issue vocabulary
    pub issue_service: Arc<IssueService>,
    /// Index page templates
    pub renderer: PageRenderer,
    /// Rows per page for `/` and the `/get_rows` default
    pub page_size: u32,
}

impl AppState {
    /// Wire services and templates over one storage handle.
    pub fn new(storage: Arc<SqliteStorage>, page_size: u32) -> Result<Self, tera::Error> {
        let issue_service = Arc::new(IssueService::new(Arc::clone(&storage)));
        let row_service = Arc::new(RowService::new(storage, Arc::clone(&issue_service)));
        Ok(Self { row_service, issue_service, renderer: PageRenderer::new()?, page_size })
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index::show_index).post(handlers::index::submit_row))
        .route("/health", get(health))
        .route("/delete_row/{id}", post(handlers::rows::delete_row))
        .route("/edit_row/{id}", post(handlers::rows::edit_row))
        .route("/save_changes", post(handlers::rows::save_changes))
        .route("/get_issues", get(handlers::issues::get_issues))
        .route("/get_rows", get(handlers::rows::get_rows))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
