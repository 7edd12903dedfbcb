//! Request validation.
//!
//! Raw transport-level inputs (all-optional query strings, arbitrary body
//! bytes) are checked here and turned into typed values the handlers consume
//! directly. Handlers never re-parse.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::ApiError;

/// Raw /convert query as it arrives off the wire.
#[derive(Debug, Default, Deserialize)]
pub struct ConvertQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<String>,
}

/// Validated per-request context for /convert.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

/// Validate the /convert query. All applicable errors are collected and
/// returned together, not short-circuited.
pub fn convert_request(query: ConvertQuery) -> Result<ConvertRequest, Vec<String>> {
    let mut errors = Vec::new();

    let from = match query.from.filter(|s| !s.is_empty()) {
        Some(v) => v,
        None => {
            errors.push("Parameter 'from' is required".to_string());
            String::new()
        }
    };
    let to = match query.to.filter(|s| !s.is_empty()) {
        Some(v) => v,
        None => {
            errors.push("Parameter 'to' is required".to_string());
            String::new()
        }
    };

    let mut amount = 0.0_f64;
    match query.amount.filter(|s| !s.is_empty()) {
        None => errors.push("Parameter 'amount' is required".to_string()),
        Some(raw) => match raw.parse::<f64>() {
            // NaN/inf parse as f64 but are not usable amounts
            Ok(v) if v.is_finite() => {
                if v < 0.0 {
                    errors.push("Parameter 'amount' must be positive".to_string());
                } else {
                    amount = v;
                }
            }
            _ => errors.push("Parameter 'amount' must be a number".to_string()),
        },
    }

    if errors.is_empty() {
        Ok(ConvertRequest { from, to, amount })
    } else {
        Err(errors)
    }
}

/// Validate the /database body: must be a JSON object of code -> numeric rate.
/// Unlike /convert, checks short-circuit on the first bad entry.
pub fn rate_payload(body: &[u8]) -> Result<BTreeMap<String, f64>, ApiError> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|_| ApiError::BadRequest("Invalid JSON data".to_string()))?;
    let object = value
        .as_object()
        .ok_or_else(|| ApiError::BadRequest("Invalid JSON data".to_string()))?;

    let mut rates = BTreeMap::new();
    for (code, raw) in object {
        let rate = raw
            .as_f64()
            .ok_or_else(|| ApiError::BadRequest("Exchange rate must be a number".to_string()))?;
        if rate < 0.0 {
            return Err(ApiError::BadRequest(
                "Exchange rate must not be negative".to_string(),
            ));
        }
        rates.insert(code.clone(), rate);
    }
    Ok(rates)
}
