use axum::{
    Form, Json,
    extract::{Path, Query, State},
    response::Redirect,
};
use std::sync::Arc;

use incident_tracker_core::{RowPatch, parse_bulk_edit};

use crate::api_error::ApiError;
use crate::query_types::RowsQuery;
use crate::response_types::RowsResponse;
use crate::AppState;

pub async fn delete_row(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Redirect, ApiError> {
    state.row_service.delete_row(id).await?;
    Ok(Redirect::to("/"))
}

pub async fn edit_row(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Form(patch): Form<RowPatch>,
) -> Result<Redirect, ApiError> {
    state.row_service.update_row(id, &patch).await?;
    Ok(Redirect::to("/"))
}

/// Bulk edit from the table form; inputs are named `<field>_<row id>`.
pub async fn save_changes(
    State(state): State<Arc<AppState>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Redirect, ApiError> {
    let patches = parse_bulk_edit(fields);
    state.row_service.bulk_update(&patches).await?;
    Ok(Redirect::to("/"))
}

pub async fn get_rows(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<RowsResponse>, ApiError> {
    let query = RowsQuery::from_pairs(pairs, state.page_size).map_err(ApiError::BadRequest)?;
    let page = state.row_service.list_rows_page(&query.filter, query.page).await?;
    Ok(Json(page.into()))
}
