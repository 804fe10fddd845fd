use axum::{
    Form,
    extract::{Query, State},
    response::Html,
};
use std::sync::Arc;

use incident_tracker_core::{PageRequest, RowFilter};

use crate::api_error::ApiError;
use crate::query_types::{IndexQuery, SubmitRowForm};
use crate::viewer::IndexView;
use crate::AppState;

pub async fn show_index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IndexQuery>,
) -> Result<Html<String>, ApiError> {
    render_index(&state, query.page.unwrap_or(1), None).await
}

/// Insert the submitted row, then render the same page as `GET /`.
pub async fn submit_row(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IndexQuery>,
    Form(form): Form<SubmitRowForm>,
) -> Result<Html<String>, ApiError> {
    let row = state.row_service.submit_row(form.into_new_row()).await?;
    let notice = format!("Added incident {}", row.incident);
    render_index(&state, query.page.unwrap_or(1), Some(notice)).await
}

async fn render_index(
    state: &AppState,
    page: u32,
    notice: Option<String>,
) -> Result<Html<String>, ApiError> {
    let page = state
        .row_service
        .list_rows_page(&RowFilter::default(), PageRequest::new(page, state.page_size))
        .await?;
    let issues = state
        .issue_service
        .list_issues()
        .await?
        .into_iter()
        .map(|i| i.identified_issue)
        .collect();
    let assignees = state.row_service.assignees().await?;

    let view = IndexView {
        total: page.total,
        pages: page.pages(),
        current_page: page.page,
        has_next: page.has_next(),
        has_prev: page.has_prev(),
        rows: page.items,
        issues,
        assignees,
        notice,
    };
    Ok(Html(state.renderer.render_index(&view)?))
}
