//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! gateway calls produce:
//!     → logging.rs (structured log events, tagged with request_id)
//!     → metrics.rs (request counters and latency histograms)
//! ```
//!
//! # Design Decisions
//! - Structured logging via `tracing`; the host chooses the subscriber
//! - Request ID (UUID v4) flows through every event of one gateway call
//! - Metrics are cheap and become no-ops when no recorder is installed

pub mod logging;
pub mod metrics;
