//! Network and block lookups.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::gateway::GatewayTransport;
use crate::operations::OperationResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeightParams {
    pub height: u64,
}

pub async fn get_network_info(transport: &GatewayTransport) -> OperationResult<Value> {
    Ok(transport.get_json("/info").await?)
}

pub async fn get_current_block(transport: &GatewayTransport) -> OperationResult<Value> {
    Ok(transport.get_json("/block/current").await?)
}

pub async fn get_block_by_height(
    transport: &GatewayTransport,
    params: BlockHeightParams,
) -> OperationResult<Value> {
    Ok(transport
        .get_json(&format!("/block/height/{}", params.height))
        .await?)
}
