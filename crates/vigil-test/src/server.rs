//! Example echo endpoint
//!
//! The external collaborator the client is exercised against:
//! `GET /api/hello` greets, `POST /api/hello` echoes the request body
//! under `data`, and `/api/fail` answers 500 with the failure envelope.
//! Every body, success or failure, carries `success` - the wire
//! contract the client's envelope handling is built on.

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// `GET /api/hello` response body
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HelloResponse {
    pub success: bool,
    pub message: String,
    /// ISO-8601 timestamp
    pub timestamp: String,
}

/// `POST /api/hello` response body; `data` echoes the request body
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EchoResponse {
    pub success: bool,
    pub message: String,
    pub data: Value,
    pub timestamp: String,
}

/// Build the example app
pub fn hello_app() -> Router {
    Router::new()
        .route("/api/hello", get(hello).post(echo))
        .route("/api/fail", get(fail))
}

/// Serve the app on an ephemeral local port; returns the base URL
pub async fn spawn_hello_server() -> std::io::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, hello_app()).await.ok();
    });
    Ok(format!("http://{addr}"))
}

async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        success: true,
        message: "Hello from the example endpoint".to_string(),
        timestamp: now_iso(),
    })
}

async fn echo(Json(body): Json<Value>) -> Json<EchoResponse> {
    Json(EchoResponse {
        success: true,
        message: "Echo".to_string(),
        data: body,
        timestamp: now_iso(),
    })
}

async fn fail() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"success": false, "error": "simulated failure"})),
    )
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use vigil_client::{HttpTransport, Lifecycle, ResourceClient};
    use vigil_core::{ApiError, TRANSPORT_ERROR_CODE};

    use super::*;

    #[tokio::test]
    async fn test_hello_round_trip() {
        let base = spawn_hello_server().await.unwrap();
        let client = ResourceClient::new(HttpTransport::new(), format!("{base}/api"));

        let response: HelloResponse = client.get("/hello").await.unwrap();

        assert!(response.success);
        assert!(!response.message.is_empty());
        // ISO-8601 with explicit UTC marker.
        assert!(response.timestamp.ends_with('Z'));
    }

    #[tokio::test]
    async fn test_echo_returns_deep_equal_body() {
        let base = spawn_hello_server().await.unwrap();
        let client = ResourceClient::new(HttpTransport::new(), format!("{base}/api"));
        let body = json!({
            "name": "vigil",
            "nested": {"values": [1, 2, 3], "flag": true},
        });

        let response: EchoResponse = client.post("/hello", &body).await.unwrap();

        assert!(response.success);
        assert_eq!(response.data, body);
    }

    #[tokio::test]
    async fn test_failure_route_yields_envelope() {
        let base = spawn_hello_server().await.unwrap();
        let client = ResourceClient::new(HttpTransport::new(), format!("{base}/api"));

        let error = client.get::<HelloResponse>("/fail").await.unwrap_err();

        assert!(!error.success);
        assert_eq!(error.error, "simulated failure");
    }

    #[tokio::test]
    async fn test_unreachable_host_normalizes_to_500() {
        // Nothing listens on port 1.
        let client = ResourceClient::new(HttpTransport::new(), "http://127.0.0.1:1/api");

        let error = client.get::<HelloResponse>("/hello").await.unwrap_err();

        assert!(!error.success);
        assert_eq!(error.code, Some(TRANSPORT_ERROR_CODE));
    }

    #[tokio::test]
    async fn test_lifecycle_failure_end_to_end() {
        let client = ResourceClient::new(HttpTransport::new(), "http://127.0.0.1:1/api");
        let lifecycle: Lifecycle<HelloResponse> = Lifecycle::new();

        let result = lifecycle.run(client.get("/hello")).await;

        // The call expression and the held state carry the same
        // normalized error.
        let raised = result.unwrap_err();
        let state = lifecycle.snapshot();
        assert_eq!(state.error.as_ref(), Some(&raised));
        assert_eq!(state.data, None);
        assert!(!state.loading);
        assert_eq!(raised.code, Some(TRANSPORT_ERROR_CODE));
    }

    #[test]
    fn test_envelope_shapes_serialize_with_success_flag() {
        let hello = HelloResponse {
            success: true,
            message: "hi".into(),
            timestamp: now_iso(),
        };
        let value = serde_json::to_value(&hello).unwrap();
        assert_eq!(value["success"], Value::Bool(true));

        let error = serde_json::to_value(ApiError::new("boom", None)).unwrap();
        assert_eq!(error["success"], Value::Bool(false));
    }
}
