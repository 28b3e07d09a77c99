//! Gateway operations built on the transport.
//!
//! # Data Flow
//! ```text
//! Operation (typed params, tagged by name)
//!     → dispatcher.rs (match variant → handler)
//!     → validation (ids / addresses checked before any request)
//!     → handler builds path or GraphQL document
//!     → GatewayTransport
//!     → response shaped into JSON (tags decoded, Winston paired with AR)
//! ```
//!
//! # Design Decisions
//! - Every operation takes an explicit parameter struct, never a loose map
//! - Handlers share one signature: `(&GatewayTransport, Params) -> OperationResult<Value>`
//! - Batch operations run sequentially and keep input order

pub mod dispatcher;
pub mod network;
pub mod pricing;
pub mod query;
pub mod transactions;
pub mod wallets;

use thiserror::Error;

use crate::codec::CodecError;
use crate::gateway::GatewayError;
use crate::units::ConversionError;
use crate::validation::{is_valid_address, is_valid_transaction_id};

pub use dispatcher::{dispatch, Operation};

/// Errors surfaced by operation handlers.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("Invalid transaction ID: '{0}'")]
    InvalidTransactionId(String),

    #[error("Invalid wallet address: '{0}'")]
    InvalidAddress(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Result type for operations.
pub type OperationResult<T> = Result<T, OperationError>;

pub(crate) fn require_transaction_id(id: &str) -> OperationResult<()> {
    if is_valid_transaction_id(id) {
        Ok(())
    } else {
        Err(OperationError::InvalidTransactionId(id.to_string()))
    }
}

pub(crate) fn require_address(address: &str) -> OperationResult<()> {
    if is_valid_address(address) {
        Ok(())
    } else {
        Err(OperationError::InvalidAddress(address.to_string()))
    }
}
