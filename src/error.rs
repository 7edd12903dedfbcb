//! Request-level error taxonomy and its HTTP mapping.
//!
//! Every per-request failure is converted to a JSON error response here; no
//! error escapes a handler as an unhandled panic.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed client input; messages are aggregated per the /convert contract.
    #[error("validation failed")]
    Validation(Vec<String>),
    /// Malformed client input with a single message (/database contract).
    #[error("{0}")]
    BadRequest(String),
    /// Currency code absent from the store.
    #[error("{0}")]
    NotFound(String),
    /// Store failure mid-request.
    #[error("store unavailable: {0}")]
    Unavailable(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "errors": errors })),
            )
                .into_response(),
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": message })),
            )
                .into_response(),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": message })),
            )
                .into_response(),
            ApiError::Unavailable(err) => {
                tracing::error!(err = ?err, "rate store failure");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(serde_json::json!({ "error": "rate store unavailable" })),
                )
                    .into_response()
            }
        }
    }
}
