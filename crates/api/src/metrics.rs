// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Prometheus metrics module
//!
//! Provides global metrics using the default Prometheus registry via macros and
//! an Axum-compatible metrics handler.

use std::sync::LazyLock;

use axum::{
    http::{StatusCode, header},
    response::Response,
};
use prometheus::{
    Encoder, HistogramVec, IntCounterVec, TextEncoder, register_histogram_vec,
    register_int_counter_vec,
};

/// Total number of API requests received, labeled by endpoint.
pub static REQUESTS: LazyLock<IntCounterVec> = LazyLock::new(|| {
    register_int_counter_vec!(
        "showcase_api_requests_total",
        "Total number of API requests, labeled by endpoint",
        &["endpoint"]
    )
    .expect("Failed to create showcase_api_requests_total counter vec")
});

/// Histogram for Ordiscan provider request durations in seconds.
pub static PROVIDER_REQUEST_DURATION: LazyLock<HistogramVec> = LazyLock::new(|| {
    register_histogram_vec!(
        "showcase_api_provider_request_duration",
        "Ordiscan provider request durations in seconds",
        &["operation", "result"],
        vec![0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]
    )
    .expect("Failed to create provider request duration histogram")
});

/// Showcase slot outcomes, labeled by featured item and terminal state.
pub static SLOT_OUTCOMES: LazyLock<IntCounterVec> = LazyLock::new(|| {
    register_int_counter_vec!(
        "showcase_api_slot_outcomes_total",
        "Total number of showcase slot outcomes, labeled by item and outcome",
        &["item", "outcome"]
    )
    .expect("Failed to create slot outcomes counter vec")
});

/// Increment the requests counter with the endpoint label
///
/// # Arguments
/// * `endpoint` - The logical endpoint name of the request
pub fn inc_requests(endpoint: &str) {
    REQUESTS.with_label_values(&[endpoint]).inc();
}

/// Observe the duration of an Ordiscan provider request
///
/// # Arguments
/// * `operation` - The provider operation name
/// * `result` - The result of the provider request
/// * `duration_secs` - The duration of the request in seconds
pub fn observe_provider_duration(operation: &str, result: &str, duration_secs: f64) {
    PROVIDER_REQUEST_DURATION
        .with_label_values(&[operation, result])
        .observe(duration_secs);
}

/// Record the terminal state a showcase slot settled into
///
/// # Arguments
/// * `item` - The featured item key
/// * `outcome` - The card state the slot rendered as
pub fn record_slot_outcome(item: &str, outcome: &str) {
    SLOT_OUTCOMES.with_label_values(&[item, outcome]).inc();
}

/// Axum handler that exports metrics in Prometheus text format
///
/// # Panics
///
/// This function will panic if:
/// - The metrics encoder fails to encode the metrics data
/// - The UTF-8 conversion of the encoded buffer fails
/// - The HTTP response builder fails to create the response
pub async fn metrics_handler() -> Response<String> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = vec![];
    encoder
        .encode(&metric_families, &mut buffer)
        .expect("Failed to encode metrics");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, encoder.format_type())
        .body(String::from_utf8(buffer).expect("metrics buffer should be valid UTF-8"))
        .expect("Failed to create metrics response")
}
