//! Prometheus metrics for osrs-info.
//!
//! Covers:
//! - HTTP requests against the hiscores and prices APIs
//! - Catalog cache hits, misses and refreshes
//! - Hiscores rows per classification bucket
//!
//! # Panics
//!
//! Metric registration uses `unwrap()`. Registration only fails on duplicate
//! metric names, which is a programming error caught on first use.

use crate::error::{TelemetryError, TelemetryResult};
use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec, register_histogram_vec, CounterVec, Encoder, HistogramVec,
    TextEncoder,
};

/// Total HTTP requests.
/// Labels: endpoint (hiscores/mapping/latest), outcome (ok/error)
pub static HTTP_REQUESTS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "osrs_http_requests_total",
        "Total HTTP requests against the game APIs",
        &["endpoint", "outcome"]
    )
    .unwrap()
});

/// HTTP round-trip latency in milliseconds.
pub static HTTP_LATENCY_MS: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "osrs_http_latency_ms",
        "HTTP round-trip latency in milliseconds",
        &["endpoint"],
        vec![10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0, 10000.0]
    )
    .unwrap()
});

/// Catalog cache accesses.
/// Labels: cache (mapping/latest), result (hit/miss/refresh)
pub static CACHE_ACCESS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "osrs_cache_access_total",
        "Item catalog cache accesses",
        &["cache", "result"]
    )
    .unwrap()
});

/// Hiscores rows classified, by bucket.
pub static CLASSIFIED_ROWS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "osrs_classified_rows_total",
        "Hiscores rows classified per bucket",
        &["bucket"]
    )
    .unwrap()
});

/// Static recording functions.
pub struct Metrics;

impl Metrics {
    /// Record a completed HTTP request.
    pub fn http_request(endpoint: &str, ok: bool, latency_ms: f64) {
        let outcome = if ok { "ok" } else { "error" };
        HTTP_REQUESTS_TOTAL
            .with_label_values(&[endpoint, outcome])
            .inc();
        HTTP_LATENCY_MS
            .with_label_values(&[endpoint])
            .observe(latency_ms);
    }

    /// Record a cache access (`hit`, `miss` or `refresh`).
    pub fn cache_access(cache: &str, result: &str) {
        CACHE_ACCESS_TOTAL
            .with_label_values(&[cache, result])
            .inc();
    }

    /// Record rows classified into a bucket.
    pub fn rows_classified(bucket: &str, count: usize) {
        CLASSIFIED_ROWS_TOTAL
            .with_label_values(&[bucket])
            .inc_by(count as f64);
    }

    /// Render all registered metrics in the Prometheus text format.
    pub fn render() -> TelemetryResult<String> {
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&prometheus::gather(), &mut buffer)
            .map_err(|e| TelemetryError::Metrics(e.to_string()))?;
        String::from_utf8(buffer).map_err(|e| TelemetryError::Metrics(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_request_counts_by_outcome() {
        let before_ok = HTTP_REQUESTS_TOTAL
            .with_label_values(&["test_endpoint", "ok"])
            .get();
        let before_err = HTTP_REQUESTS_TOTAL
            .with_label_values(&["test_endpoint", "error"])
            .get();

        Metrics::http_request("test_endpoint", true, 12.0);
        Metrics::http_request("test_endpoint", false, 40.0);
        Metrics::http_request("test_endpoint", true, 8.0);

        let ok = HTTP_REQUESTS_TOTAL
            .with_label_values(&["test_endpoint", "ok"])
            .get();
        let err = HTTP_REQUESTS_TOTAL
            .with_label_values(&["test_endpoint", "error"])
            .get();
        assert_eq!(ok - before_ok, 2.0);
        assert_eq!(err - before_err, 1.0);
    }

    #[test]
    fn test_render_contains_recorded_metrics() {
        Metrics::cache_access("test_cache", "hit");
        Metrics::rows_classified("test_bucket", 3);

        let text = Metrics::render().unwrap();
        assert!(text.contains("osrs_cache_access_total"));
        assert!(text.contains("osrs_classified_rows_total"));
    }
}
