use thiserror::Error;

/// Errors surfaced by [`crate::ChatbotClient`].
///
/// A JSON-RPC `error` payload is not represented here: the server answering
/// with an error envelope is a normal, printable outcome for the demos and
/// is carried in [`crate::ToolOutcome::Error`] instead.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned HTTP {0}")]
    Status(u16),

    #[error("malformed tools server response: {0}")]
    MalformedResponse(&'static str),

    #[error("invalid base URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// True for faults whose usual cause is that the tools server is not
    /// running at all (refused connection or request timeout).
    pub fn is_connection_error(&self) -> bool {
        matches!(self, ClientError::Transport(e) if e.is_connect() || e.is_timeout())
    }
}
