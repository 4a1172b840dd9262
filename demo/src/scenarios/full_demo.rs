use std::io::Write;

use kagent_chatbot_client::{ChatbotClient, ClientError, ToolOutcome, truncate};
use serde_json::json;

use super::render_rpc_error;

const SECTION_RULE_WIDTH: usize = 50;
const INTENT_PREVIEW_CHARS: usize = 200;

/// Example queries for the chatbot section: (query, timeRange, limit).
const QUERY_EXAMPLES: [(&str, &str, u32); 3] = [
    ("What's happening with our services?", "3h", 5),
    ("Tell me about pod crashes", "1d", 10),
    ("What critical alerts do we have?", "6h", 3),
];

/// Canned queries for the intent-recognition walkthrough.
const INTENT_QUERIES: [&str; 7] = [
    "Show me issues in the last 3 hours",
    "What critical alerts do we have?",
    "Any pod crashes recently?",
    "Tell me about service issues",
    "What resource problems are there?",
    "Show me trends in the past week",
    "Generate a fix for the crashing pod",
];

/// Run the complete walkthrough: liveness probe, chatbot queries,
/// remediation generation, intent recognition. The probe gates everything
/// that follows; a dead or unhealthy server means no tool calls at all.
pub async fn run(client: &ChatbotClient, out: &mut impl Write) -> std::io::Result<()> {
    match client.health().await {
        Ok(true) => writeln!(out, "Connected to tools server")?,
        Ok(false) => {
            writeln!(out, "Failed to connect to tools server")?;
            return Ok(());
        }
        Err(_) => {
            writeln!(out, "Cannot connect to tools server. Is it running?")?;
            return Ok(());
        }
    }

    chatbot_query_section(client, out).await?;
    remediation_section(client, out).await?;
    intent_recognition_section(client, out).await?;

    writeln!(out)?;
    writeln!(out, "Demo completed.")?;
    writeln!(out)?;
    writeln!(out, "Key capabilities demonstrated:")?;
    writeln!(out, "- natural language query processing")?;
    writeln!(out, "- intent recognition and filtering")?;
    writeln!(out, "- alert retrieval from the data store")?;
    writeln!(out, "- LLM-backed response generation")?;
    writeln!(out, "- remediation script generation")?;

    Ok(())
}

fn section_header(out: &mut impl Write, title: &str) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(SECTION_RULE_WIDTH))
}

async fn chatbot_query_section(
    client: &ChatbotClient,
    out: &mut impl Write,
) -> std::io::Result<()> {
    section_header(out, "KAgent chatbot queries")?;

    for (i, (query, time_range, limit)) in QUERY_EXAMPLES.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "{}. Query: '{query}'", i + 1)?;

        let outcome = client
            .call_tool(
                "chatbot_query",
                json!({"query": query, "timeRange": time_range, "limit": limit}),
            )
            .await;
        write_outcome(out, outcome, None)?;
    }

    Ok(())
}

async fn remediation_section(client: &ChatbotClient, out: &mut impl Write) -> std::io::Result<()> {
    section_header(out, "Remediation script generation")?;

    writeln!(out)?;
    writeln!(out, "Generating remediation script for alert...")?;

    let outcome = client
        .call_tool(
            "get_remediation",
            json!({
                "alertId": "test-crashing-pod-default-1722943743",
                "service": "test-crashing-pod",
                "namespace": "default",
            }),
        )
        .await;

    match outcome {
        Ok(ToolOutcome::Text(script)) => {
            writeln!(out, "Remediation script:")?;
            writeln!(out, "{script}")?;
        }
        other => write_outcome(out, other, None)?,
    }

    Ok(())
}

async fn intent_recognition_section(
    client: &ChatbotClient,
    out: &mut impl Write,
) -> std::io::Result<()> {
    section_header(out, "Intent recognition")?;

    for query in INTENT_QUERIES {
        writeln!(out)?;
        writeln!(out, "Query: '{query}'")?;

        let outcome = client
            .call_tool(
                "chatbot_query",
                json!({"query": query, "timeRange": "3h", "limit": 3}),
            )
            .await;
        write_outcome(out, outcome, Some(INTENT_PREVIEW_CHARS))?;
    }

    Ok(())
}

/// Print one tool-call outcome. Failures never abort the walkthrough; the
/// next section's calls still run.
fn write_outcome(
    out: &mut impl Write,
    outcome: Result<ToolOutcome, ClientError>,
    preview_chars: Option<usize>,
) -> std::io::Result<()> {
    match outcome {
        Ok(ToolOutcome::Text(text)) => match preview_chars {
            Some(max) => writeln!(out, "Response: {}", truncate(&text, max)),
            None => writeln!(out, "Response: {text}"),
        },
        Ok(ToolOutcome::Error(error)) => writeln!(out, "Error: {}", render_rpc_error(&error)),
        Err(err) => writeln!(out, "Error: {err}"),
    }
}
