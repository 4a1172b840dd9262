use std::io::Write;

use kagent_chatbot_client::{ChatbotClient, ClientError, ToolOutcome, truncate};
use serde_json::json;

use super::render_rpc_error;

const PREVIEW_CHARS: usize = 200;

/// One-shot smoke test: a single `chatbot_query` round trip, response
/// preview cut to 200 characters. Every failure mode prints a one-line
/// diagnostic and returns normally.
pub async fn run(client: &ChatbotClient, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Testing KAgent chatbot agent...")?;

    let outcome = client
        .call_tool(
            "chatbot_query",
            json!({
                "query": "What's happening with our services?",
                "timeRange": "3h",
                "limit": 3,
            }),
        )
        .await;

    match outcome {
        Ok(ToolOutcome::Text(text)) => {
            writeln!(out, "Chatbot query test passed")?;
            writeln!(out, "Response: {}", truncate(&text, PREVIEW_CHARS))?;
        }
        Ok(ToolOutcome::Error(error)) => {
            writeln!(out, "Chatbot query failed: {}", render_rpc_error(&error))?;
        }
        Err(ClientError::Status(status)) => {
            writeln!(out, "HTTP error: {status}")?;
        }
        Err(err @ ClientError::MalformedResponse(_)) => {
            writeln!(out, "Unexpected response: {err}")?;
        }
        Err(err) => {
            writeln!(out, "Connection error: {err}")?;
            writeln!(
                out,
                "Make sure the tools server is running on {}",
                client.base_url()
            )?;
        }
    }

    Ok(())
}
