//! Wire encoding subsystem.
//!
//! # Data Flow
//! ```text
//! caller text / bytes
//!     → base64url.rs (standard Base64, then '+'→'-', '/'→'_', no padding)
//!     → gateway wire format (ids, tag payloads, data uploads)
//!
//! transaction tags
//!     → tags.rs (name and value each run through base64url.rs)
//! ```
//!
//! # Design Decisions
//! - Encoding is total; only the decode direction can fail
//! - Decoding is strict: malformed Base64 or non-UTF-8 payloads are errors,
//!   never silently replaced
//! - All functions are pure and safe to call from any thread

pub mod base64url;
pub mod tags;

use thiserror::Error;

pub use base64url::{base64_url_to_buffer, buffer_to_base64_url, decode_base64_url, encode_base64_url};
pub use tags::{decode_tags, encode_tags, Tag};

/// Errors raised when decoding gateway payloads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Input is not valid Base64URL.
    #[error("Invalid Base64URL input: {0}")]
    InvalidBase64(String),

    /// Decoded bytes are not valid UTF-8 text.
    #[error("Decoded payload is not valid UTF-8: {0}")]
    InvalidUtf8(String),
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
