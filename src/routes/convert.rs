//! GET /convert - convert an amount between two stored currencies.

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Serialize;
use tracing::debug;

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::metrics;
use crate::validate::{self, ConvertQuery};

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub converted_amount: f64,
}

/// GET /convert?from=USD&to=EUR&amount=100
///
/// Reads the pre-validated request, fetches both rates and computes
/// `amount * to_rate / from_rate`. No side effects.
pub async fn convert(
    State(state): State<AppState>,
    Query(query): Query<ConvertQuery>,
) -> Result<Json<ConvertResponse>, ApiError> {
    metrics::CONVERT_REQUESTS.inc();

    let req = validate::convert_request(query).map_err(|errors| {
        metrics::VALIDATION_REJECTS.inc();
        ApiError::Validation(errors)
    })?;

    let from_rate = state
        .store
        .get(&req.from)?
        .ok_or_else(|| ApiError::NotFound(format!("Currency '{}' not found", req.from)))?;
    let to_rate = state
        .store
        .get(&req.to)?
        .ok_or_else(|| ApiError::NotFound(format!("Currency '{}' not found", req.to)))?;

    // a zero divisor would convert everything to infinity
    if from_rate == 0.0 {
        return Err(ApiError::BadRequest(format!(
            "Rate for '{}' is zero",
            req.from
        )));
    }

    let converted_amount = req.amount * to_rate / from_rate;
    debug!(
        from = %req.from,
        to = %req.to,
        amount = req.amount,
        converted_amount,
        "converted"
    );

    Ok(Json(ConvertResponse {
        from: req.from,
        to: req.to,
        amount: req.amount,
        converted_amount,
    }))
}
