use axum::{Json, extract::State};
use std::sync::Arc;

use crate::api_error::ApiError;
use crate::response_types::IssueSuggestion;
use crate::AppState;

pub async fn get_issues(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<IssueSuggestion>>, ApiError> {
    let issues = state.issue_service.list_issues().await?;
    Ok(Json(issues.into_iter().map(IssueSuggestion::from).collect()))
}
