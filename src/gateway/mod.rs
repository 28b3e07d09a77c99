//! Gateway transport subsystem.
//!
//! # Data Flow
//! ```text
//! GatewayConfig (base URL, GraphQL URL, timeout)
//!     → client.rs (join path, send with timeout, read body)
//!     → types.rs (GatewayResponse on 2xx, GatewayError otherwise)
//!     → graphql.rs ({query, variables} out, {data, errors} in)
//! ```
//!
//! # Design Decisions
//! - One request per call; no retries, no fallback, no session state
//! - Timeouts surface as `GatewayError` like any other failure
//! - Business paths (`/tx/{id}`, `/price/{bytes}`, ...) are built by callers

pub mod client;
pub mod graphql;
pub mod types;

pub use crate::config::schema::GatewayConfig;
pub use client::GatewayTransport;
pub use reqwest::Method;
pub use types::{GatewayError, GatewayResponse, GatewayResult, RequestBody};
