//! Client for the KAgent chatbot tools server.
//!
//! The tools server exposes MCP-style tools over JSON-RPC 2.0 at
//! `POST /jsonrpc`, plus a plain `GET /health` liveness endpoint. This
//! crate wraps both behind [`ChatbotClient`] for the demo binaries in the
//! `kagent-chatbot-demos` crate.

pub mod client;
pub mod error;
pub mod protocol;
pub mod text;

pub use client::{ChatbotClient, ToolOutcome};
pub use error::ClientError;
pub use text::truncate;
