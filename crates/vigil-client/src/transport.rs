//! HTTP transport layer
//!
//! A transport executes one request and reports either a raw response
//! (status plus decoded JSON body) or a normalized [`ApiError`]. Status
//! interpretation is the client's job; the transport only normalizes
//! the failures it can see - unreachable host, non-JSON body.

use async_trait::async_trait;
use serde_json::Value;

use vigil_core::ApiError;

/// HTTP method for a resource request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// One request handed to a transport
#[derive(Clone, Debug)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    /// JSON body, sent for POST/PUT
    pub body: Option<Value>,
}

/// Raw transport response: status plus the undecoded JSON body
#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Value,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A pluggable request executor.
///
/// The transport is stateless and safely reusable across concurrent
/// calls; request state lives at each call site.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, ApiError>;
}

/// Concrete transport on a shared reqwest client
#[derive(Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        HttpTransport::default()
    }

    /// Build from an existing client (custom timeouts, proxies)
    pub fn with_client(client: reqwest::Client) -> Self {
        HttpTransport { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Put => self.client.put(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!("transport failure for {} {}: {e}", request.method.as_str(), request.url);
            ApiError::transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::transport(format!("invalid response body: {e}")))?;

        Ok(TransportResponse { status, body })
    }
}
