//! Metrics for gateway calls.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): requests by method and outcome
//! - `gateway_request_duration_seconds` (histogram): latency by method

use std::time::Duration;

/// Outcome label for a finished gateway call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Status,
    Timeout,
    Transport,
    GraphQl,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Status => "status",
            Outcome::Timeout => "timeout",
            Outcome::Transport => "transport",
            Outcome::GraphQl => "graphql",
        }
    }
}

/// Record a completed gateway request.
pub fn record_request(method: &str, outcome: Outcome, elapsed: Duration) {
    metrics::counter!(
        "gateway_requests_total",
        "method" => method.to_string(),
        "outcome" => outcome.as_str()
    )
    .increment(1);
    metrics::histogram!(
        "gateway_request_duration_seconds",
        "method" => method.to_string()
    )
    .record(elapsed.as_secs_f64());
}
