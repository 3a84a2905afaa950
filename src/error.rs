//! Application error types and HTTP response mapping.
//!
//! `GitHubError` covers failed upstream calls. `AppError` covers conditions that
//! abort a whole request and implements Axum's `IntoResponse` to render the JSON
//! error bodies the plugin host expects.
//!
//! Error mappings:
//! - `TokenNotConfigured` → 500 `{ error }`
//! - `UpstreamListing` → 500 `{ error, details }`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub const TOKEN_NOT_CONFIGURED: &str = "GitHub token not configured";
pub const LISTING_FAILED: &str = "Failed to fetch repository data";

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GitHub API returned {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("Invalid base64 content: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Response for {0} carried no content")]
    MissingContent(String),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("GitHub token not configured")]
    TokenNotConfigured,

    #[error("Failed to fetch repository data: {0}")]
    UpstreamListing(#[source] GitHubError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            AppError::TokenNotConfigured => json!({
                "error": TOKEN_NOT_CONFIGURED,
            }),
            AppError::UpstreamListing(e) => json!({
                "error": LISTING_FAILED,
                "details": e.to_string(),
            }),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_token_not_configured_response() {
        let response = AppError::TokenNotConfigured.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, json!({"error": "GitHub token not configured"}));
    }

    #[tokio::test]
    async fn test_listing_failure_carries_details() {
        let err = AppError::UpstreamListing(GitHubError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            message: "Not Found".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to fetch repository data");
        assert_eq!(body["details"], "GitHub API returned 404 Not Found: Not Found");
        assert!(body.get("files").is_none());
    }
}
