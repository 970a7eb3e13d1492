// ABOUTME: Request-level error type for the grocerd API handlers.
// ABOUTME: Maps decode failures to 400 and persistence failures to 500 with JSON error bodies.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors a request handler can surface to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body failed to decode. Carries the decoder's message so
    /// the caller can see what was wrong with the payload.
    #[error("{0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
