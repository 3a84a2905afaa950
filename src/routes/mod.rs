//! API route handlers.
//!
//! Each submodule defines routes for one endpoint:
//! - `health`: Liveness and endpoint listing (GET /)
//! - `plugin_files`: Repository snapshot (GET /plugin-files)
//!
//! `create_router` also installs the CORS/preflight layers and request tracing,
//! so tests drive exactly what the server serves.

pub mod health;
pub mod plugin_files;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::cors;
use crate::github::SharedGitHub;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub github: SharedGitHub,
}

impl AppState {
    pub fn new(config: Config, github: SharedGitHub) -> Self {
        Self {
            config: Arc::new(config),
            github,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .merge(health::routes())
        .merge(plugin_files::routes(state));

    cors::apply(router).layer(TraceLayer::new_for_http())
}
