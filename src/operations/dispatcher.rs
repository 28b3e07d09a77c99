//! Operation table.
//!
//! Each variant carries its typed parameters; `dispatch` is the only place
//! that maps an operation to its handler.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::codec::{decode_tags, encode_tags, Tag};
use crate::gateway::GatewayTransport;
use crate::operations::network::{self, BlockHeightParams};
use crate::operations::pricing::{self, ArParams, BatchPriceParams, PriceParams, WinstonParams};
use crate::operations::query::{self, QueryTransactionsParams};
use crate::operations::transactions::{
    self, SubmitTransactionParams, TransactionDataParams, TransactionParams,
};
use crate::operations::wallets::{self, AddressParams};
use crate::operations::OperationResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagsParams {
    pub tags: Vec<Tag>,
}

/// Every operation the adapter can perform.
///
/// Serialized as `{"operation": "<name>", "params": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", content = "params", rename_all = "snake_case")]
pub enum Operation {
    GetTransaction(TransactionParams),
    GetTransactionStatus(TransactionParams),
    GetTransactionData(TransactionDataParams),
    SubmitTransaction(SubmitTransactionParams),
    GetBalance(AddressParams),
    GetLastTransaction(AddressParams),
    GetPrice(PriceParams),
    GetPrices(BatchPriceParams),
    GetNetworkInfo,
    GetCurrentBlock,
    GetBlockByHeight(BlockHeightParams),
    QueryTransactions(QueryTransactionsParams),
    ConvertWinstonToAr(WinstonParams),
    ConvertArToWinston(ArParams),
    EncodeTags(TagsParams),
    DecodeTags(TagsParams),
}

impl Operation {
    /// Stable operation name used in logs and serialized commands.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::GetTransaction(_) => "get_transaction",
            Operation::GetTransactionStatus(_) => "get_transaction_status",
            Operation::GetTransactionData(_) => "get_transaction_data",
            Operation::SubmitTransaction(_) => "submit_transaction",
            Operation::GetBalance(_) => "get_balance",
            Operation::GetLastTransaction(_) => "get_last_transaction",
            Operation::GetPrice(_) => "get_price",
            Operation::GetPrices(_) => "get_prices",
            Operation::GetNetworkInfo => "get_network_info",
            Operation::GetCurrentBlock => "get_current_block",
            Operation::GetBlockByHeight(_) => "get_block_by_height",
            Operation::QueryTransactions(_) => "query_transactions",
            Operation::ConvertWinstonToAr(_) => "convert_winston_to_ar",
            Operation::ConvertArToWinston(_) => "convert_ar_to_winston",
            Operation::EncodeTags(_) => "encode_tags",
            Operation::DecodeTags(_) => "decode_tags",
        }
    }

    /// Whether the operation issues a gateway request.
    pub fn is_remote(&self) -> bool {
        !matches!(
            self,
            Operation::ConvertWinstonToAr(_)
                | Operation::ConvertArToWinston(_)
                | Operation::EncodeTags(_)
                | Operation::DecodeTags(_)
        )
    }
}

/// Run one operation to completion.
pub async fn dispatch(transport: &GatewayTransport, operation: Operation) -> OperationResult<Value> {
    let name = operation.name();
    tracing::debug!(operation = name, "Dispatching operation");

    let result = match operation {
        Operation::GetTransaction(p) => transactions::get_transaction(transport, p).await,
        Operation::GetTransactionStatus(p) => transactions::get_transaction_status(transport, p).await,
        Operation::GetTransactionData(p) => transactions::get_transaction_data(transport, p).await,
        Operation::SubmitTransaction(p) => transactions::submit_transaction(transport, p).await,
        Operation::GetBalance(p) => wallets::get_balance(transport, p).await,
        Operation::GetLastTransaction(p) => wallets::get_last_transaction(transport, p).await,
        Operation::GetPrice(p) => pricing::get_price(transport, p).await,
        Operation::GetPrices(p) => pricing::get_prices(transport, p).await,
        Operation::GetNetworkInfo => network::get_network_info(transport).await,
        Operation::GetCurrentBlock => network::get_current_block(transport).await,
        Operation::GetBlockByHeight(p) => network::get_block_by_height(transport, p).await,
        Operation::QueryTransactions(p) => query::query_transactions(transport, p).await,
        Operation::ConvertWinstonToAr(p) => pricing::convert_winston_to_ar(p),
        Operation::ConvertArToWinston(p) => pricing::convert_ar_to_winston(p),
        Operation::EncodeTags(p) => Ok(json!({ "tags": encode_tags(&p.tags) })),
        Operation::DecodeTags(p) => decode_tags(&p.tags)
            .map(|tags| json!({ "tags": tags }))
            .map_err(Into::into),
    };

    if let Err(e) = &result {
        tracing::debug!(operation = name, error = %e, "Operation failed");
    }
    result
}
