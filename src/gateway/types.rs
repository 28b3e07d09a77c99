//! Gateway request/response values and error definitions.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur while talking to a gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Base URL, GraphQL URL, or a joined request URL did not parse.
    #[error("Invalid gateway URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Connection could not be established or the exchange broke off.
    #[error("Gateway request failed: {0}")]
    Transport(String),

    /// No complete response within the configured timeout.
    #[error("Gateway request timed out after {0} ms")]
    Timeout(u64),

    /// Gateway answered with a non-2xx status.
    #[error("Gateway returned {status}: {message}")]
    Status { status: u16, message: String },

    /// GraphQL envelope carried a non-empty `errors` array.
    #[error("GraphQL request failed: {message}")]
    GraphQl { status: u16, message: String },

    /// Response body could not be read as the expected shape.
    #[error("Invalid gateway response: {0}")]
    Decode(String),
}

impl GatewayError {
    /// HTTP status of the failed exchange, where one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Status { status, .. } | GatewayError::GraphQl { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// The gateway's own message, or the error description.
    pub fn message(&self) -> String {
        match self {
            GatewayError::Status { message, .. } | GatewayError::GraphQl { message, .. } => {
                message.clone()
            }
            other => other.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Body of an outbound REST request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Serialized as JSON.
    Json(serde_json::Value),
    /// Sent verbatim as `application/octet-stream`.
    Bytes(Vec<u8>),
}

/// Raw result of a single REST call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl GatewayResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as UTF-8 text.
    pub fn text(&self) -> GatewayResult<String> {
        String::from_utf8(self.body.clone())
            .map_err(|e| GatewayError::Decode(format!("body is not UTF-8: {}", e)))
    }

    /// Body deserialized from JSON.
    pub fn json<T: DeserializeOwned>(&self) -> GatewayResult<T> {
        serde_json::from_slice(&self.body)
            .map_err(|e| GatewayError::Decode(format!("body is not the expected JSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GatewayError::Status {
            status: 404,
            message: "Not Found".into(),
        };
        assert_eq!(err.to_string(), "Gateway returned 404: Not Found");
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());

        let err = GatewayError::Timeout(250);
        assert_eq!(err.to_string(), "Gateway request timed out after 250 ms");
        assert_eq!(err.status(), None);
        assert_eq!(err.message(), "Gateway request timed out after 250 ms");
    }

    #[test]
    fn test_response_helpers() {
        let response = GatewayResponse {
            status: 200,
            content_type: Some("application/json".into()),
            body: br#"{"height": 12}"#.to_vec(),
        };
        assert!(response.is_success());
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["height"], 12);

        let bad = GatewayResponse {
            status: 200,
            content_type: None,
            body: vec![0xff, 0xfe],
        };
        assert!(matches!(bad.text(), Err(GatewayError::Decode(_))));
        assert!(matches!(bad.json::<serde_json::Value>(), Err(GatewayError::Decode(_))));
    }
}
