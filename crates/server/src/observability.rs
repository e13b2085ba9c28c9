use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "item_store_requests_total",
        "Item API requests handled, by operation",
        &["operation"]
    )
    .expect("register requests_total")
});

pub static NOT_FOUND_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "item_store_not_found_total",
        "Item API requests answered with 404"
    )
    .expect("register not_found_total")
});

/// Count one request for `operation` (`list`, `get`, `create`, `update`, `delete`).
pub fn record(operation: &str) {
    REQUESTS_TOTAL.with_label_values(&[operation]).inc();
}

pub fn encode_metrics() -> (StatusCode, String) {
    // touch lazies so both families exist before the first request
    Lazy::force(&REQUESTS_TOTAL);
    Lazy::force(&NOT_FOUND_TOTAL);

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_includes_registered_families() {
        record("list");
        NOT_FOUND_TOTAL.inc();
        let (status, body) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("item_store_requests_total{operation=\"list\"}"));
        assert!(body.contains("item_store_not_found_total"));
    }
}
