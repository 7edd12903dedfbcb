//! HTTP route handlers.
//!
//! - `convert` - currency conversion against stored rates
//! - `database` - bulk rate updates (merge or replace)
//!
//! Plus the ambient `/health` readiness probe and `/metrics` endpoint.

pub mod convert;
pub mod database;

use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::metrics;

/// Assemble the application router. CORS is layered on by the caller.
pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/convert", get(convert::convert))
        .route("/database", post(database::update_database))
        .route("/health", get(health))
        .route("/metrics", get(metrics_text))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .with_state(state)
}

/// GET /health - readiness probe; 503 when the store is unreachable.
async fn health(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    state.store.ping()?;
    Ok(Json(serde_json::json!({
        "ok": true,
        "rates": state.store.len(),
    })))
}

/// GET /metrics - prometheus text exposition.
async fn metrics_text() -> impl IntoResponse {
    let headers = [(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; version=0.0.4"),
    )];
    (StatusCode::OK, headers, metrics::render())
}
