use axum::{routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};

use crate::models::HealthResponse;

pub const HEALTH_MESSAGE: &str = "Jemini Plugin API is running!";

pub fn routes() -> Router {
    Router::new().route("/", get(get_health))
}

async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: HEALTH_MESSAGE.to_string(),
        endpoints: vec![super::plugin_files::PLUGIN_FILES_PATH.to_string()],
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
