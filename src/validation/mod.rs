//! Identifier validation.
//!
//! # Responsibilities
//! - Check transaction ids and wallet addresses before they are placed in a
//!   request path
//!
//! # Design Decisions
//! - Validators are total predicates: they return `false`, never an error
//! - Callers decide how a rejected identifier is reported

pub mod identifiers;

pub use identifiers::{is_valid_address, is_valid_optional_id, is_valid_transaction_id, ID_LENGTH};
