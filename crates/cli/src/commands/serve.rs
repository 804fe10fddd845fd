use anyhow::Result;
use incident_tracker_core::page_size_from_env;
use incident_tracker_http::{AppState, create_router};
use std::sync::Arc;

use crate::open_storage;

pub(crate) async fn run(database: Option<String>, port: u16, host: String) -> Result<()> {
    let storage = Arc::new(open_storage(database).await?);
    let page_size = page_size_from_env();
    let state = Arc::new(AppState::new(storage, page_size)?);

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!(page_size, "Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
