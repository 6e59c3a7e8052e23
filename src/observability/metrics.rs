//! Metrics collection and exposition.
//!
//! # Metrics
//! - `random_mean_requests_total` (counter): requests by response status
//! - `random_mean_request_duration_seconds` (histogram): handler latency
//! - `random_mean_upstream_calls_total` (counter): upstream calls by outcome
//! - `random_mean_upstream_duration_seconds` (histogram): upstream latency

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handled `/random/mean` request.
pub fn record_request(status: u16, start_time: Instant) {
    metrics::counter!("random_mean_requests_total", "status" => status.to_string()).increment(1);
    metrics::histogram!("random_mean_request_duration_seconds")
        .record(start_time.elapsed().as_secs_f64());
}

/// Record one upstream call; `outcome` is "ok" or an error kind.
pub fn record_upstream_call(outcome: &'static str, start_time: Instant) {
    metrics::counter!("random_mean_upstream_calls_total", "outcome" => outcome).increment(1);
    metrics::histogram!("random_mean_upstream_duration_seconds")
        .record(start_time.elapsed().as_secs_f64());
}
