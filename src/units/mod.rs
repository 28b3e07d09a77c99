//! Winston/AR unit conversion.
//!
//! # Responsibilities
//! - Convert integer Winston amounts to 12-digit AR decimal strings
//! - Convert AR decimal strings back to Winston, truncating below one Winston
//!
//! # Design Decisions
//! - Amounts travel as strings and are computed with `BigUint`; no floats
//! - Input is validated before parsing so that `+`, `_` and exponent forms
//!   accepted by numeric parsers are rejected here

pub mod conversion;

use thiserror::Error;

pub use conversion::{ar_to_winston, parse_winston, winston_to_ar, AR_DECIMALS, WINSTON_PER_AR};

/// Errors that can occur while converting amounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// No digits were supplied.
    #[error("Amount is empty")]
    Empty,

    /// Amounts are unsigned.
    #[error("Amount must not be negative: {0}")]
    Negative(String),

    /// Input contains something other than decimal digits (and one `.` for AR).
    #[error("Amount is not a valid decimal number: {0}")]
    NotNumeric(String),
}

/// Result type for conversions.
pub type ConversionResult<T> = Result<T, ConversionError>;
