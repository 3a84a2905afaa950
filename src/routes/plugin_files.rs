//! Repository snapshot endpoint.
//!
//! GET /plugin-files
//!
//! Checks the token before any upstream call, then runs the snapshot pipeline.
//! A listing failure aborts with 500 and no `files`; per-file failures are
//! reported inside the snapshot.

use axum::{extract::State, routing::get, Json, Router};
use tracing::error;

use crate::error::{AppError, Result};
use crate::github::fetch_snapshot;
use crate::models::SnapshotResponse;
use crate::routes::AppState;

pub const PLUGIN_FILES_PATH: &str = "/plugin-files";

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(PLUGIN_FILES_PATH, get(get_plugin_files))
        .with_state(state)
}

async fn get_plugin_files(State(state): State<AppState>) -> Result<Json<SnapshotResponse>> {
    let Some(token) = state.config.token() else {
        error!("GitHub token not configured");
        return Err(AppError::TokenNotConfigured);
    };

    let snapshot = fetch_snapshot(state.github.as_ref(), &state.config.repository, token)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch repository data");
            AppError::UpstreamListing(e)
        })?;

    Ok(Json(snapshot))
}
