//! Prometheus metrics. Collectors are lazy statics registered on first use.

use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

pub static CONVERT_REQUESTS: Lazy<IntCounter> = Lazy::new(|| {
    let c = IntCounter::new(
        "ratehub_convert_requests_total",
        "Total GET /convert requests received",
    )
    .expect("create counter");
    let _ = REGISTRY.register(Box::new(c.clone()));
    c
});

pub static DATABASE_REQUESTS: Lazy<IntCounter> = Lazy::new(|| {
    let c = IntCounter::new(
        "ratehub_database_requests_total",
        "Total POST /database requests received",
    )
    .expect("create counter");
    let _ = REGISTRY.register(Box::new(c.clone()));
    c
});

pub static VALIDATION_REJECTS: Lazy<IntCounter> = Lazy::new(|| {
    let c = IntCounter::new(
        "ratehub_validation_rejects_total",
        "Requests rejected by the validator",
    )
    .expect("create counter");
    let _ = REGISTRY.register(Box::new(c.clone()));
    c
});

/// Render the registry in prometheus text exposition format.
pub fn render() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).ok();
    String::from_utf8_lossy(&buffer).into_owned()
}
