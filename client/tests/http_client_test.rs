//! Integration tests against an in-process stub of the tools server.
//!
//! The stub records every `/jsonrpc` body it receives and answers with a
//! canned response, so the tests can assert both the wire envelope the
//! client sends and the way it interprets what comes back.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use kagent_chatbot_client::{ChatbotClient, ClientError, ToolOutcome};

#[derive(Clone)]
struct StubState {
    requests: Arc<Mutex<Vec<Value>>>,
    rpc_status: StatusCode,
    rpc_response: Value,
    health_status: StatusCode,
}

struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl StubServer {
    async fn spawn(rpc_status: StatusCode, rpc_response: Value, health_status: StatusCode) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            requests: Arc::clone(&requests),
            rpc_status,
            rpc_response,
            health_status,
        };

        let app = Router::new()
            .route("/jsonrpc", post(jsonrpc_handler))
            .route("/health", get(health_handler))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, requests }
    }

    async fn with_response(rpc_response: Value) -> Self {
        Self::spawn(StatusCode::OK, rpc_response, StatusCode::OK).await
    }

    fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn recorded(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

async fn jsonrpc_handler(
    State(state): State<StubState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.requests.lock().unwrap().push(body);
    (state.rpc_status, Json(state.rpc_response.clone()))
}

async fn health_handler(State(state): State<StubState>) -> StatusCode {
    state.health_status
}

fn text_response(text: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": 1,
        "result": {"content": [{"type": "text", "text": text}]}
    })
}

/// Bind a listener and drop it to get a port with nothing listening.
async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[tokio::test]
async fn posts_the_tools_call_envelope() {
    let stub = StubServer::with_response(text_response("ok")).await;
    let client = ChatbotClient::new(&stub.base_url()).unwrap();

    let arguments = json!({
        "query": "What's happening with our services?",
        "timeRange": "3h",
        "limit": 3,
    });
    client
        .call_tool("chatbot_query", arguments.clone())
        .await
        .unwrap();

    let recorded = stub.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0]["jsonrpc"], "2.0");
    assert_eq!(recorded[0]["id"], 1);
    assert_eq!(recorded[0]["method"], "tools/call");
    assert_eq!(recorded[0]["params"]["name"], "chatbot_query");
    assert_eq!(recorded[0]["params"]["arguments"], arguments);
}

#[tokio::test]
async fn empty_arguments_object_is_preserved() {
    let stub = StubServer::with_response(text_response("ok")).await;
    let client = ChatbotClient::new(&stub.base_url()).unwrap();

    client.call_tool("chatbot_query", json!({})).await.unwrap();

    assert_eq!(stub.recorded()[0]["params"]["arguments"], json!({}));
}

#[tokio::test]
async fn extracts_the_first_content_text() {
    let stub = StubServer::with_response(text_response("X")).await;
    let client = ChatbotClient::new(&stub.base_url()).unwrap();

    let outcome = client.call_tool("chatbot_query", json!({})).await.unwrap();
    assert_eq!(outcome, ToolOutcome::Text("X".to_string()));
}

#[tokio::test]
async fn surfaces_a_string_error_payload() {
    let stub = StubServer::with_response(json!({"jsonrpc": "2.0", "id": 1, "error": "boom"})).await;
    let client = ChatbotClient::new(&stub.base_url()).unwrap();

    let outcome = client.call_tool("chatbot_query", json!({})).await.unwrap();
    assert_eq!(outcome, ToolOutcome::Error(json!("boom")));
}

#[tokio::test]
async fn surfaces_a_structured_error_payload() {
    let error = json!({"code": -32601, "message": "Method not found"});
    let stub = StubServer::with_response(json!({"jsonrpc": "2.0", "id": 1, "error": error})).await;
    let client = ChatbotClient::new(&stub.base_url()).unwrap();

    let outcome = client.call_tool("nonexistent_tool", json!({})).await.unwrap();
    assert_eq!(outcome, ToolOutcome::Error(error));
}

#[tokio::test]
async fn non_success_status_is_a_status_error() {
    let stub = StubServer::spawn(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"error": "ignored"}),
        StatusCode::OK,
    )
    .await;
    let client = ChatbotClient::new(&stub.base_url()).unwrap();

    let err = client.call_tool("chatbot_query", json!({})).await.unwrap_err();
    assert!(matches!(err, ClientError::Status(500)));
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    let client = ChatbotClient::new(&unreachable_url().await).unwrap();

    let err = client.call_tool("chatbot_query", json!({})).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
    assert!(err.is_connection_error());
}

#[tokio::test]
async fn result_without_content_is_malformed() {
    let stub =
        StubServer::with_response(json!({"jsonrpc": "2.0", "id": 1, "result": {"content": []}}))
            .await;
    let client = ChatbotClient::new(&stub.base_url()).unwrap();

    let err = client.call_tool("chatbot_query", json!({})).await.unwrap_err();
    assert!(matches!(err, ClientError::MalformedResponse(_)));
}

#[tokio::test]
async fn content_without_text_is_malformed() {
    let stub = StubServer::with_response(
        json!({"jsonrpc": "2.0", "id": 1, "result": {"content": [{"type": "text"}]}}),
    )
    .await;
    let client = ChatbotClient::new(&stub.base_url()).unwrap();

    let err = client.call_tool("chatbot_query", json!({})).await.unwrap_err();
    assert!(matches!(err, ClientError::MalformedResponse(_)));
}

#[tokio::test]
async fn body_with_neither_result_nor_error_is_malformed() {
    let stub = StubServer::with_response(json!({"jsonrpc": "2.0", "id": 1})).await;
    let client = ChatbotClient::new(&stub.base_url()).unwrap();

    let err = client.call_tool("chatbot_query", json!({})).await.unwrap_err();
    assert!(matches!(err, ClientError::MalformedResponse(_)));
}

#[tokio::test]
async fn health_is_true_only_on_200() {
    let healthy = StubServer::with_response(json!({})).await;
    let client = ChatbotClient::new(&healthy.base_url()).unwrap();
    assert!(client.health().await.unwrap());

    let unhealthy = StubServer::spawn(
        StatusCode::OK,
        json!({}),
        StatusCode::SERVICE_UNAVAILABLE,
    )
    .await;
    let client = ChatbotClient::new(&unhealthy.base_url()).unwrap();
    assert!(!client.health().await.unwrap());
}

#[tokio::test]
async fn health_against_a_dead_server_is_a_transport_error() {
    let client = ChatbotClient::new(&unreachable_url().await).unwrap();
    assert!(client.health().await.unwrap_err().is_connection_error());
}

#[test]
fn rejects_an_unparseable_base_url() {
    let err = ChatbotClient::new("not a url").unwrap_err();
    assert!(matches!(err, ClientError::InvalidUrl(_)));
}
