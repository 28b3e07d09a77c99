//! Transaction lookups and submission.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::codec::{buffer_to_base64_url, decode_tags, Tag};
use crate::gateway::{GatewayError, GatewayTransport, Method, RequestBody};
use crate::operations::{require_transaction_id, OperationError, OperationResult};

/// Gateways answer 202 while a transaction is still pending.
const STATUS_PENDING: u16 = 202;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionParams {
    pub id: String,
}

/// How transaction data is returned to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataEncoding {
    /// UTF-8 text; fails for binary payloads.
    #[default]
    Text,
    /// Base64URL, safe for any payload.
    Base64Url,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDataParams {
    pub id: String,
    #[serde(default)]
    pub encoding: DataEncoding,
}

/// A transaction that has already been signed elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitTransactionParams {
    pub transaction: Value,
}

/// Fetch a transaction and decode its tags.
pub async fn get_transaction(
    transport: &GatewayTransport,
    params: TransactionParams,
) -> OperationResult<Value> {
    require_transaction_id(&params.id)?;

    let response = transport
        .request(Method::GET, &format!("/tx/{}", params.id), None, &[])
        .await?;
    if response.status == STATUS_PENDING {
        return Ok(json!({ "id": params.id, "status": "pending" }));
    }

    let mut transaction: Value = response.json()?;
    if let Some(tags) = transaction.get("tags").filter(|t| t.is_array()) {
        let encoded: Vec<Tag> = serde_json::from_value(tags.clone())
            .map_err(|e| GatewayError::Decode(format!("malformed tags: {}", e)))?;
        transaction["tags"] = json!(decode_tags(&encoded)?);
    }
    Ok(transaction)
}

/// Fetch confirmation status of a transaction.
pub async fn get_transaction_status(
    transport: &GatewayTransport,
    params: TransactionParams,
) -> OperationResult<Value> {
    require_transaction_id(&params.id)?;

    let response = transport
        .request(Method::GET, &format!("/tx/{}/status", params.id), None, &[])
        .await?;
    if response.status == STATUS_PENDING {
        return Ok(json!({ "id": params.id, "status": "pending" }));
    }

    let confirmation: Value = response.json()?;
    Ok(json!({
        "id": params.id,
        "status": "confirmed",
        "confirmation": confirmation,
    }))
}

/// Fetch the data payload of a transaction.
pub async fn get_transaction_data(
    transport: &GatewayTransport,
    params: TransactionDataParams,
) -> OperationResult<Value> {
    require_transaction_id(&params.id)?;

    let response = transport
        .request(Method::GET, &format!("/{}", params.id), None, &[])
        .await?;
    let data = match params.encoding {
        DataEncoding::Text => response.text()?,
        DataEncoding::Base64Url => buffer_to_base64_url(&response.body),
    };

    Ok(json!({
        "id": params.id,
        "content_type": response.content_type,
        "size": response.body.len(),
        "encoding": params.encoding,
        "data": data,
    }))
}

/// Post a signed transaction to the gateway.
pub async fn submit_transaction(
    transport: &GatewayTransport,
    params: SubmitTransactionParams,
) -> OperationResult<Value> {
    let id = params
        .transaction
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| OperationError::InvalidParameter("transaction has no 'id' field".into()))?
        .to_string();
    require_transaction_id(&id)?;

    let response = transport
        .request(Method::POST, "/tx", Some(RequestBody::Json(params.transaction)), &[])
        .await?;

    tracing::info!(id = %id, status = response.status, "Transaction submitted");
    Ok(json!({ "id": id, "status": response.status }))
}
