//! Storage pricing and unit conversion.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::gateway::GatewayTransport;
use crate::operations::{require_address, OperationError, OperationResult};
use crate::units::{ar_to_winston, parse_winston, winston_to_ar};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceParams {
    /// Payload size in bytes.
    pub bytes: u64,
    /// Recipient wallet; pricing includes the new-wallet fee when set.
    #[serde(default)]
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchPriceParams {
    pub sizes: Vec<u64>,
    #[serde(default)]
    pub target: Option<String>,
    /// Record a failed lookup and keep going instead of aborting the batch.
    #[serde(default)]
    pub continue_on_failure: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinstonParams {
    pub winston: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArParams {
    pub ar: String,
}

/// Price of storing `bytes` bytes.
pub async fn get_price(transport: &GatewayTransport, params: PriceParams) -> OperationResult<Value> {
    let winston = fetch_price(transport, params.bytes, params.target.as_deref()).await?;
    let ar = winston_to_ar(&winston)?;
    Ok(json!({
        "bytes": params.bytes,
        "winston": winston,
        "ar": ar,
    }))
}

/// Price several sizes one after another, preserving input order.
pub async fn get_prices(
    transport: &GatewayTransport,
    params: BatchPriceParams,
) -> OperationResult<Value> {
    if let Some(target) = params.target.as_deref() {
        require_address(target)?;
    }

    let mut prices = Vec::with_capacity(params.sizes.len());
    let mut total = BigUint::default();
    let mut failed = 0usize;

    for bytes in params.sizes {
        let priced = match fetch_price(transport, bytes, params.target.as_deref()).await {
            Ok(winston) => parse_winston(&winston)
                .map_err(OperationError::from)
                .map(|amount| (winston, amount)),
            Err(e) => Err(e),
        };
        match priced {
            Ok((winston, amount)) => {
                total += amount;
                prices.push(json!({
                    "bytes": bytes,
                    "winston": winston,
                    "ar": winston_to_ar(&winston)?,
                }));
            }
            Err(e) if params.continue_on_failure => {
                tracing::warn!(bytes, error = %e, "Price lookup failed, continuing");
                failed += 1;
                let status = match &e {
                    OperationError::Gateway(gateway) => gateway.status(),
                    _ => None,
                };
                prices.push(json!({
                    "bytes": bytes,
                    "error": e.to_string(),
                    "status": status,
                }));
            }
            Err(e) => return Err(e),
        }
    }

    let total_winston = total.to_string();
    Ok(json!({
        "prices": prices,
        "failed": failed,
        "total_ar": winston_to_ar(&total_winston)?,
        "total_winston": total_winston,
    }))
}

pub fn convert_winston_to_ar(params: WinstonParams) -> OperationResult<Value> {
    let ar = winston_to_ar(&params.winston)?;
    let winston = parse_winston(&params.winston)?.to_string();
    Ok(json!({ "winston": winston, "ar": ar }))
}

pub fn convert_ar_to_winston(params: ArParams) -> OperationResult<Value> {
    let winston = ar_to_winston(&params.ar)?;
    let ar = winston_to_ar(&winston)?;
    Ok(json!({ "winston": winston, "ar": ar }))
}

async fn fetch_price(
    transport: &GatewayTransport,
    bytes: u64,
    target: Option<&str>,
) -> OperationResult<String> {
    let path = match target {
        Some(target) => {
            require_address(target)?;
            format!("/price/{}/{}", bytes, target)
        }
        None => format!("/price/{}", bytes),
    };
    Ok(transport.get_text(&path).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_winston_to_ar() {
        let value = convert_winston_to_ar(WinstonParams {
            winston: "0001500000000000".into(),
        })
        .unwrap();
        assert_eq!(value["winston"], "1500000000000");
        assert_eq!(value["ar"], "1.500000000000");
    }

    #[test]
    fn test_convert_ar_to_winston() {
        let value = convert_ar_to_winston(ArParams { ar: "0.25".into() }).unwrap();
        assert_eq!(value["winston"], "250000000000");
        assert_eq!(value["ar"], "0.250000000000");
    }

    #[test]
    fn test_convert_rejects_negative() {
        let err = convert_ar_to_winston(ArParams { ar: "-1".into() }).unwrap_err();
        assert!(matches!(err, OperationError::Conversion(_)));
    }
}
