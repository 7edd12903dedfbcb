//! POST /database - bulk rate update with merge-or-replace semantics.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use tracing::info;

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::metrics;
use crate::validate;

#[derive(Debug, Default, Deserialize)]
pub struct DatabaseQuery {
    pub merge: Option<String>,
}

/// POST /database?merge=0|1 with a JSON object body of code -> rate.
///
/// `merge=0` (the default) replaces the whole store with the payload in one
/// atomic batch; any other integer upserts the payload and leaves other keys
/// untouched. A `merge` value that is not an integer falls back to 0.
pub async fn update_database(
    State(state): State<AppState>,
    Query(query): Query<DatabaseQuery>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ApiError> {
    metrics::DATABASE_REQUESTS.inc();

    let merge = query
        .merge
        .as_deref()
        .and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(0);

    let rates = validate::rate_payload(&body).map_err(|err| {
        metrics::VALIDATION_REJECTS.inc();
        err
    })?;

    if merge == 0 {
        state.store.replace_all(&rates)?;
    } else {
        state.store.merge_all(&rates)?;
    }

    info!(entries = rates.len(), merge, "rates updated");
    Ok(Json(serde_json::json!({ "success": true })))
}
