//! Metrics for request counts and health sampling.
//!
//! Recorded through the `metrics` facade; nothing is exported unless a
//! recorder is installed by the embedding process.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// Health sample latency metric name.
pub const METRIC_HEALTH_SAMPLE_LATENCY: &str = "health_sample_latency_ms";
/// Failed health checks counter metric name.
pub const METRIC_HEALTH_CHECK_FAILURES: &str = "health_check_failures_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_HTTP_REQUESTS,
        "Total number of HTTP requests served, by endpoint"
    );
    describe_histogram!(
        METRIC_HEALTH_SAMPLE_LATENCY,
        "Time spent sampling host metrics in milliseconds"
    );
    describe_counter!(
        METRIC_HEALTH_CHECK_FAILURES,
        "Total number of health checks that reported unhealthy"
    );

    debug!("Metrics initialized");
}

/// Increment the request counter for `endpoint`.
pub fn inc_http_requests(endpoint: &'static str) {
    counter!(METRIC_HTTP_REQUESTS, "endpoint" => endpoint).increment(1);
}

/// Increment the failed health check counter.
pub fn inc_health_check_failures() {
    counter!(METRIC_HEALTH_CHECK_FAILURES).increment(1);
}

/// RAII guard for timing operations.
/// Automatically records latency when dropped.
pub struct LatencyTimer {
    start: Instant,
    metric_name: &'static str,
}

impl LatencyTimer {
    /// Create a new latency timer for the given metric.
    pub fn new(metric_name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            metric_name,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        histogram!(self.metric_name).record(self.elapsed_ms());
    }
}

/// Create a latency timer for host metric sampling.
pub fn timer_health_sample() -> LatencyTimer {
    LatencyTimer::new(METRIC_HEALTH_SAMPLE_LATENCY)
}
