//! Request counters for monitoring.
//!
//! This module provides counters for:
//! - Health endpoint hits
//! - Builder submissions
//! - Rejected submissions
//! - Unmatched routes

use metrics::{counter, describe_counter};
use tracing::debug;

// === Metric Name Constants ===

/// Health requests counter metric name.
pub const METRIC_HEALTH_REQUESTS: &str = "health_requests_total";
/// Builder submissions counter metric name.
pub const METRIC_BUILDER_REQUESTS: &str = "builder_requests_total";
/// Rejected builder submissions counter metric name.
pub const METRIC_VALIDATION_FAILURES: &str = "validation_failures_total";
/// Unmatched route counter metric name.
pub const METRIC_UNMATCHED_ROUTES: &str = "unmatched_routes_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_HEALTH_REQUESTS,
        "Total number of health-check requests served"
    );
    describe_counter!(
        METRIC_BUILDER_REQUESTS,
        "Total number of builder submissions received"
    );
    describe_counter!(
        METRIC_VALIDATION_FAILURES,
        "Total number of builder submissions rejected by validation"
    );
    describe_counter!(
        METRIC_UNMATCHED_ROUTES,
        "Total number of requests that matched no route"
    );

    debug!("Metrics initialized");
}

/// Increment health requests counter.
pub fn inc_health_requests() {
    counter!(METRIC_HEALTH_REQUESTS).increment(1);
}

/// Increment builder submissions counter.
pub fn inc_builder_requests() {
    counter!(METRIC_BUILDER_REQUESTS).increment(1);
}

/// Increment validation failures counter.
pub fn inc_validation_failures() {
    counter!(METRIC_VALIDATION_FAILURES).increment(1);
}

/// Increment unmatched routes counter.
pub fn inc_unmatched_routes() {
    counter!(METRIC_UNMATCHED_ROUTES).increment(1);
}
