//! Arweave gateway adapter library.
//!
//! Encoding helpers (Base64URL, tags), exact Winston/AR conversion,
//! identifier validation, and a typed REST/GraphQL transport, plus a table
//! of gateway operations built on top of them.

pub mod codec;
pub mod config;
pub mod gateway;
pub mod lifecycle;
pub mod observability;
pub mod operations;
pub mod units;
pub mod validation;

pub use codec::{
    base64_url_to_buffer, buffer_to_base64_url, decode_base64_url, decode_tags,
    encode_base64_url, encode_tags, Tag,
};
pub use config::{AdapterConfig, GatewayConfig};
pub use gateway::{GatewayError, GatewayResponse, GatewayTransport, RequestBody};
pub use operations::{dispatch, Operation, OperationError};
pub use units::{ar_to_winston, winston_to_ar};
pub use validation::{is_valid_address, is_valid_transaction_id};
