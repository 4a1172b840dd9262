use std::time::Duration;

use serde_json::Value;

use crate::error::ClientError;
use crate::protocol::{JsonRpcRequest, ToolResult};

/// Client for the KAgent chatbot tools server.
///
/// Holds a single reqwest client so that sequential calls within one demo
/// run reuse the underlying connection. Calls are strictly one at a time;
/// the demos' console output ordering depends on it.
#[derive(Debug)]
pub struct ChatbotClient {
    base_url: String,
    http: reqwest::Client,
}

/// Application-level outcome of one `tools/call` round trip.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    /// `result.content[0].text` from a success envelope.
    Text(String),
    /// Verbatim `error` payload from the response envelope. Left as a raw
    /// value: the server sometimes sends a bare string, sometimes a
    /// structured object.
    Error(Value),
}

impl ChatbotClient {
    /// Where the tools server listens when run with default flags.
    pub const DEFAULT_URL: &str = "http://localhost:8084";

    /// Client with no request timeout (transport defaults apply).
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::build(base_url, None)
    }

    /// Client with a per-request timeout. The smoke-test binaries use 30s.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        Self::build(base_url, Some(timeout))
    }

    fn build(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        reqwest::Url::parse(base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;

        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Invoke a tool by name with a JSON arguments object.
    ///
    /// Transport faults and non-2xx statuses are [`ClientError`]s; an
    /// `error` field in the JSON-RPC envelope is a normal [`ToolOutcome`].
    /// A body with neither a usable `result` nor an `error` is rejected as
    /// [`ClientError::MalformedResponse`] rather than panicking on field
    /// access.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<ToolOutcome, ClientError> {
        let request = JsonRpcRequest::tool_call(name, arguments);
        tracing::debug!(tool = name, "sending tools/call request");

        let resp = self
            .http
            .post(format!("{}/jsonrpc", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body: Value = resp.json().await?;
        if let Some(error) = body.get("error") {
            tracing::debug!(tool = name, "tool call returned an error payload");
            return Ok(ToolOutcome::Error(error.clone()));
        }

        let Some(result) = body.get("result") else {
            return Err(ClientError::MalformedResponse(
                "neither result nor error present",
            ));
        };
        let result: ToolResult = serde_json::from_value(result.clone())
            .map_err(|_| ClientError::MalformedResponse("result is not a tool-call payload"))?;
        let text = result
            .content
            .into_iter()
            .next()
            .and_then(|c| c.text)
            .ok_or(ClientError::MalformedResponse(
                "result.content[0].text missing",
            ))?;

        Ok(ToolOutcome::Text(text))
    }

    /// Probe `GET /health`. `Ok(true)` only on HTTP 200; any other status
    /// is a live-but-unhealthy `Ok(false)`, transport faults are errors.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status() == reqwest::StatusCode::OK)
    }
}
