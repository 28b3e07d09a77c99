//! GraphQL request and response envelopes.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::gateway::types::{GatewayError, GatewayResponse, GatewayResult};

/// Outbound `{query, variables}` envelope.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: Value,
}

/// Inbound `{data?, errors?}` envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlErrorEntry {
    #[serde(default)]
    pub message: String,
}

/// Unwrap the `data` field of a GraphQL response.
///
/// Reported errors win over the HTTP status, since gateways answer failed
/// queries with 400 plus an envelope.
pub fn extract_data<T: DeserializeOwned>(response: &GatewayResponse) -> GatewayResult<T> {
    let envelope: GraphQlResponse = match serde_json::from_slice(&response.body) {
        Ok(envelope) => envelope,
        Err(e) if response.is_success() => {
            return Err(GatewayError::Decode(format!("malformed GraphQL envelope: {}", e)));
        }
        Err(_) => return Err(status_error(response)),
    };

    if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
        let message = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(GatewayError::GraphQl {
            status: response.status,
            message,
        });
    }

    if !response.is_success() {
        return Err(status_error(response));
    }

    let data = envelope
        .data
        .ok_or_else(|| GatewayError::Decode("GraphQL response contained no data".to_string()))?;
    serde_json::from_value(data)
        .map_err(|e| GatewayError::Decode(format!("unexpected GraphQL data shape: {}", e)))
}

/// Build the `Status` error for a non-2xx response, keeping the body verbatim.
pub(crate) fn status_error(response: &GatewayResponse) -> GatewayError {
    let body = String::from_utf8_lossy(&response.body).trim().to_string();
    let message = if body.is_empty() {
        reqwest::StatusCode::from_u16(response.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", response.status))
    } else {
        body
    };
    GatewayError::Status {
        status: response.status,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> GatewayResponse {
        GatewayResponse {
            status,
            content_type: Some("application/json".into()),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_extracts_data() {
        let data: Value = extract_data(&response(200, r#"{"data":{"block":{"height":5}}}"#)).unwrap();
        assert_eq!(data["block"]["height"], 5);
    }

    #[test]
    fn test_joins_error_messages() {
        let err = extract_data::<Value>(&response(
            400,
            r#"{"errors":[{"message":"first"},{"message":"second"}]}"#,
        ))
        .unwrap_err();
        assert_eq!(
            err,
            GatewayError::GraphQl {
                status: 400,
                message: "first, second".into()
            }
        );
    }

    #[test]
    fn test_empty_errors_array_is_success() {
        let data: Value = extract_data(&response(200, r#"{"data":{"ok":true},"errors":[]}"#)).unwrap();
        assert_eq!(data["ok"], true);
    }

    #[test]
    fn test_missing_data() {
        let err = extract_data::<Value>(&response(200, r#"{"data":null}"#)).unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }

    #[test]
    fn test_non_json_error_status() {
        let err = extract_data::<Value>(&response(502, "bad gateway upstream")).unwrap_err();
        assert_eq!(
            err,
            GatewayError::Status {
                status: 502,
                message: "bad gateway upstream".into()
            }
        );
    }

    #[test]
    fn test_empty_body_uses_reason() {
        let err = status_error(&response(404, ""));
        assert_eq!(err.message(), "Not Found");
    }
}
