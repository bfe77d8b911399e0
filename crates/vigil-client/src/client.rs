//! Typed resource client
//!
//! One shared entry point for JSON resource calls. A failure status
//! means the body is the error envelope - it is decoded as
//! [`ApiError`] and never as success data. Everything the transport or
//! the decoder rejects is normalized before it reaches the caller, so
//! callers only ever see the envelope.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use vigil_core::{ApiError, ApiResult};

use crate::{Method, Transport, TransportRequest};

/// Shared, stateless client for JSON resource calls.
///
/// Explicitly constructed and injectable: tests substitute a scripted
/// transport, production wires [`crate::HttpTransport`].
pub struct ResourceClient<T: Transport> {
    transport: T,
    base_url: String,
}

impl<T: Transport> ResourceClient<T> {
    /// Build against a base path every request is resolved under
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        ResourceClient {
            transport,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.request(Method::Get, path, None).await
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<R> {
        let body = encode_body(body)?;
        self.request(Method::Post, path, Some(body)).await
    }

    pub async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<R> {
        let body = encode_body(body)?;
        self.request(Method::Put, path, Some(body)).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.request(Method::Delete, path, None).await
    }

    async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> ApiResult<R> {
        let request = TransportRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            body,
        };
        let response = self.transport.execute(request).await?;

        if !response.is_success() {
            // The failure body is the envelope, never success data.
            return Err(match serde_json::from_value::<ApiError>(response.body) {
                Ok(error) => error,
                Err(e) => ApiError::transport(format!("undecodable failure body: {e}")),
            });
        }

        serde_json::from_value(response.body)
            .map_err(|e| ApiError::transport(format!("undecodable success body: {e}")))
    }
}

fn encode_body<B: Serialize>(body: &B) -> ApiResult<Value> {
    serde_json::to_value(body).map_err(|e| ApiError::transport(format!("unencodable body: {e}")))
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde::Deserialize;
    use serde_json::json;

    use crate::TransportResponse;

    use super::*;

    /// Scripted transport: pops one canned outcome per request and
    /// records what it was asked to execute. Clones share the script.
    #[derive(Clone, Default)]
    struct ScriptedTransport {
        inner: std::sync::Arc<ScriptInner>,
    }

    #[derive(Default)]
    struct ScriptInner {
        outcomes: Mutex<VecDeque<Result<TransportResponse, ApiError>>>,
        requests: Mutex<Vec<TransportRequest>>,
    }

    impl ScriptedTransport {
        fn push(&self, outcome: Result<TransportResponse, ApiError>) {
            self.inner.outcomes.lock().push_back(outcome);
        }

        fn respond(&self, status: u16, body: Value) {
            self.push(Ok(TransportResponse { status, body }));
        }

        fn last_request(&self) -> TransportRequest {
            self.inner
                .requests
                .lock()
                .last()
                .cloned()
                .expect("no request recorded")
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, ApiError> {
            self.inner.requests.lock().push(request);
            self.inner
                .outcomes
                .lock()
                .pop_front()
                .expect("no scripted outcome left")
        }
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Greeting {
        success: bool,
        message: String,
    }

    #[tokio::test]
    async fn test_success_body_decodes_as_data() {
        let transport = ScriptedTransport::default();
        transport.respond(200, json!({"success": true, "message": "hi"}));
        let client = ResourceClient::new(transport.clone(), "http://api.test/api/");

        let greeting: Greeting = client.get("/hello").await.unwrap();

        assert!(greeting.success);
        assert_eq!(greeting.message, "hi");
        let request = transport.last_request();
        assert_eq!(request.url, "http://api.test/api/hello");
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.body, None);
    }

    #[tokio::test]
    async fn test_failure_status_decodes_envelope() {
        let transport = ScriptedTransport::default();
        transport.respond(500, json!({"success": false, "error": "boom", "code": 500}));
        let client = ResourceClient::new(transport.clone(), "http://api.test");

        let error = client.get::<Greeting>("/hello").await.unwrap_err();

        assert_eq!(error, ApiError::new("boom", Some(500)));
    }

    #[tokio::test]
    async fn test_failure_status_without_code_keeps_none() {
        let transport = ScriptedTransport::default();
        transport.respond(500, json!({"success": false, "error": "boom"}));
        let client = ResourceClient::new(transport.clone(), "http://api.test");

        let error = client.get::<Greeting>("/hello").await.unwrap_err();

        assert_eq!(error.code, None);
    }

    #[tokio::test]
    async fn test_undecodable_failure_body_normalizes_to_500() {
        let transport = ScriptedTransport::default();
        transport.respond(502, json!("bad gateway"));
        let client = ResourceClient::new(transport.clone(), "http://api.test");

        let error = client.get::<Greeting>("/hello").await.unwrap_err();

        assert_eq!(error.code, Some(500));
        assert!(error.error.contains("undecodable failure body"));
    }

    #[tokio::test]
    async fn test_undecodable_success_body_normalizes_to_500() {
        let transport = ScriptedTransport::default();
        transport.respond(200, json!({"unexpected": "shape"}));
        let client = ResourceClient::new(transport.clone(), "http://api.test");

        let error = client.get::<Greeting>("/hello").await.unwrap_err();

        assert_eq!(error.code, Some(500));
    }

    #[tokio::test]
    async fn test_transport_error_passes_through() {
        let transport = ScriptedTransport::default();
        transport.push(Err(ApiError::transport("connection refused")));
        let client = ResourceClient::new(transport.clone(), "http://api.test");

        let error = client.get::<Greeting>("/hello").await.unwrap_err();

        assert_eq!(error, ApiError::transport("connection refused"));
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let transport = ScriptedTransport::default();
        transport.respond(200, json!({"success": true, "message": "echoed"}));
        let client = ResourceClient::new(transport.clone(), "http://api.test");

        let _: Greeting = client
            .post("/hello", &json!({"name": "vigil"}))
            .await
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.body, Some(json!({"name": "vigil"})));
    }
}
