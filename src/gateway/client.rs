//! Gateway HTTP transport.
//!
//! # Responsibilities
//! - Join the configured base URL with caller-supplied paths
//! - Issue one REST or GraphQL request per call, bounded by `timeout_ms`
//! - Map every failure into `GatewayError`
//!
//! No retries, no payload interpretation: callers decide what a failure means.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::{Duration, Instant};
use url::Url;
use uuid::Uuid;

use crate::config::schema::GatewayConfig;
use crate::gateway::graphql::{self, GraphQlRequest};
use crate::gateway::types::{GatewayError, GatewayResponse, GatewayResult, RequestBody};
use crate::observability::metrics::{self, Outcome};

/// Typed transport over a single gateway.
#[derive(Clone)]
pub struct GatewayTransport {
    client: Client,
    config: GatewayConfig,
    /// Base URL without trailing slash.
    base_url: String,
    graphql_url: Url,
    timeout: Duration,
    record_metrics: bool,
}

impl GatewayTransport {
    /// Create a transport with a default HTTP client.
    pub fn new(config: GatewayConfig) -> GatewayResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| GatewayError::Transport(error_chain(&e)))?;
        Self::with_client(config, client)
    }

    /// Create a transport over a host-supplied HTTP client.
    pub fn with_client(config: GatewayConfig, client: Client) -> GatewayResult<Self> {
        let base = parse_url(&config.base_url)?;
        let graphql_url = parse_url(&config.graphql_endpoint())?;
        let base_url = base.as_str().trim_end_matches('/').to_string();
        let timeout = Duration::from_millis(config.timeout_ms);

        tracing::debug!(
            base_url = %base_url,
            graphql_url = %graphql_url,
            timeout_ms = config.timeout_ms,
            "Gateway transport initialized"
        );

        Ok(Self {
            client,
            config,
            base_url,
            graphql_url,
            timeout,
            record_metrics: true,
        })
    }

    /// Enable or disable metric recording for this transport.
    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.record_metrics = enabled;
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Issue one REST call to `base_url + path`.
    ///
    /// Non-2xx statuses fail with `GatewayError::Status` carrying the
    /// gateway's body verbatim.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
        query: &[(&str, &str)],
    ) -> GatewayResult<GatewayResponse> {
        let url = self.endpoint(path)?;
        let mut builder = self.client.request(method.clone(), url.clone());
        if !query.is_empty() {
            builder = builder.query(query);
        }
        builder = match body {
            Some(RequestBody::Json(value)) => builder.json(&value),
            Some(RequestBody::Bytes(bytes)) => builder
                .header(CONTENT_TYPE, "application/octet-stream")
                .body(bytes),
            None => builder,
        };

        let started = Instant::now();
        let result = self
            .execute(&method, &url, builder)
            .await
            .and_then(|response| {
                if response.is_success() {
                    Ok(response)
                } else {
                    Err(graphql::status_error(&response))
                }
            });
        self.finish(&method, started, &url, result)
    }

    /// POST `{query, variables}` to the GraphQL endpoint and return `data`.
    pub async fn graphql_request<T: DeserializeOwned>(
        &self,
        document: &str,
        variables: Option<Value>,
    ) -> GatewayResult<T> {
        let payload = GraphQlRequest {
            query: document,
            variables: variables.unwrap_or_else(|| Value::Object(Default::default())),
        };
        let builder = self.client.post(self.graphql_url.clone()).json(&payload);

        let started = Instant::now();
        let result = self
            .execute(&Method::POST, &self.graphql_url, builder)
            .await
            .and_then(|response| graphql::extract_data(&response));
        self.finish(&Method::POST, started, &self.graphql_url, result)
    }

    /// GET `path` and deserialize the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> GatewayResult<T> {
        self.request(Method::GET, path, None, &[]).await?.json()
    }

    /// GET `path` and return the body as trimmed text.
    pub async fn get_text(&self, path: &str) -> GatewayResult<String> {
        let text = self.request(Method::GET, path, None, &[]).await?.text()?;
        Ok(text.trim().to_string())
    }

    fn endpoint(&self, path: &str) -> GatewayResult<Url> {
        let joined = if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        };
        parse_url(&joined)
    }

    async fn execute(
        &self,
        method: &Method,
        url: &Url,
        builder: RequestBuilder,
    ) -> GatewayResult<GatewayResponse> {
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, %method, %url, "Sending gateway request");

        let response = builder
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await.map_err(|e| self.map_error(e))?;

        tracing::debug!(%request_id, status, bytes = body.len(), "Gateway responded");

        Ok(GatewayResponse {
            status,
            content_type,
            body: body.to_vec(),
        })
    }

    fn finish<T>(
        &self,
        method: &Method,
        started: Instant,
        url: &Url,
        result: GatewayResult<T>,
    ) -> GatewayResult<T> {
        let elapsed = started.elapsed();
        let outcome = match &result {
            Ok(_) => Outcome::Success,
            Err(e) => {
                tracing::warn!(
                    %method,
                    %url,
                    status = ?e.status(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "Gateway request failed"
                );
                outcome_of(e)
            }
        };
        if self.record_metrics {
            metrics::record_request(method.as_str(), outcome, elapsed);
        }
        result
    }

    fn map_error(&self, error: reqwest::Error) -> GatewayError {
        if error.is_timeout() {
            GatewayError::Timeout(self.config.timeout_ms)
        } else {
            GatewayError::Transport(error_chain(&error))
        }
    }
}

impl std::fmt::Debug for GatewayTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayTransport")
            .field("base_url", &self.base_url)
            .field("graphql_url", &self.graphql_url.as_str())
            .field("timeout_ms", &self.config.timeout_ms)
            .finish()
    }
}

fn parse_url(raw: &str) -> GatewayResult<Url> {
    Url::parse(raw).map_err(|e| GatewayError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

fn outcome_of(error: &GatewayError) -> Outcome {
    match error {
        GatewayError::Timeout(_) => Outcome::Timeout,
        GatewayError::Status { .. } => Outcome::Status,
        GatewayError::GraphQl { .. } => Outcome::GraphQl,
        _ => Outcome::Transport,
    }
}

/// Render an error with its sources, e.g. "error sending request: connection refused".
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
