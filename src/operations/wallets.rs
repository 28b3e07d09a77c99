//! Wallet lookups.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::gateway::GatewayTransport;
use crate::operations::{require_address, OperationResult};
use crate::units::winston_to_ar;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressParams {
    pub address: String,
}

/// Balance of a wallet in Winston and AR.
pub async fn get_balance(transport: &GatewayTransport, params: AddressParams) -> OperationResult<Value> {
    require_address(&params.address)?;

    let winston = transport
        .get_text(&format!("/wallet/{}/balance", params.address))
        .await?;
    let ar = winston_to_ar(&winston)?;

    Ok(json!({
        "address": params.address,
        "winston": winston,
        "ar": ar,
    }))
}

/// Id of the last transaction sent from a wallet (empty for unused wallets).
pub async fn get_last_transaction(
    transport: &GatewayTransport,
    params: AddressParams,
) -> OperationResult<Value> {
    require_address(&params.address)?;

    let last_tx = transport
        .get_text(&format!("/wallet/{}/last_tx", params.address))
        .await?;

    Ok(json!({
        "address": params.address,
        "last_tx": last_tx,
    }))
}
