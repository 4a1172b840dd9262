use std::io::Write;

use kagent_chatbot_client::{ChatbotClient, ClientError, ToolOutcome, truncate};
use serde_json::json;

use super::render_rpc_error;

const PREVIEW_CHARS: usize = 500;

/// Timestamp markers the enriched alert summaries are expected to carry.
const TIMESTAMP_MARKERS: [&str; 3] = ["Created:", "Updated:", "Collected:"];

/// Query the chatbot for recent alerts and check that the response text
/// carries the enriched timestamp fields. Returns whether the round trip
/// itself succeeded; a missing marker only prints a warning.
pub async fn run(client: &ChatbotClient, out: &mut impl Write) -> std::io::Result<bool> {
    writeln!(out, "Testing enhanced timestamp handling...")?;
    writeln!(out, "Sending request to tools server...")?;

    let outcome = client
        .call_tool(
            "chatbot_query",
            json!({
                "query": "show me latest alerts with detailed timestamps",
                "timeRange": "3h",
                "limit": 3,
            }),
        )
        .await;

    let text = match outcome {
        Ok(ToolOutcome::Text(text)) => text,
        Ok(ToolOutcome::Error(error)) => {
            writeln!(
                out,
                "Enhanced timestamp query failed: {}",
                render_rpc_error(&error)
            )?;
            return Ok(false);
        }
        Err(ClientError::Status(status)) => {
            writeln!(out, "HTTP error: {status}")?;
            return Ok(false);
        }
        Err(err @ ClientError::MalformedResponse(_)) => {
            writeln!(out, "Unexpected response: {err}")?;
            return Ok(false);
        }
        Err(err) => {
            writeln!(out, "Connection error: {err}")?;
            writeln!(
                out,
                "Make sure the tools server is reachable on {}",
                client.base_url()
            )?;
            return Ok(false);
        }
    };

    writeln!(out, "Enhanced timestamp query succeeded")?;
    writeln!(out, "Response preview: {}", truncate(&text, PREVIEW_CHARS))?;

    if TIMESTAMP_MARKERS.iter().any(|marker| text.contains(marker)) {
        writeln!(out, "Enhanced timestamp fields are present in the response")?;
    } else {
        writeln!(
            out,
            "Warning: enhanced timestamp fields not found in the response"
        )?;
    }

    Ok(true)
}

/// Closing summary printed by the binary after the scenario.
pub fn print_summary(out: &mut impl Write, success: bool) -> std::io::Result<()> {
    writeln!(out)?;
    if success {
        writeln!(out, "Enhanced timestamp handling is working. Responses now include:")?;
        writeln!(
            out,
            "- multiple timestamp fields (createdAt, updatedAt, collectedAt, analyzedAt)"
        )?;
        writeln!(out, "- per-alert metadata counters (eventCount, podCount, logLineCount)")?;
        writeln!(out, "- tags for categorization")?;
        writeln!(out, "- better filtering and sorting of alert summaries")?;
    } else {
        writeln!(out, "Enhanced timestamp test failed. Check the tools server configuration.")?;
    }
    Ok(())
}
