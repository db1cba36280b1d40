//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur while executing an exchange tool.
///
/// Both variants end up as MCP error results; from the caller's perspective
/// an unreachable exchange and a rejecting exchange fail the same way.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The exchange answered with a non-success status.
    #[error("HTTP error! status: {status} - {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The request never produced a response (connection, DNS, decode).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_message_contains_status_and_body() {
        let err = ToolError::UpstreamStatus {
            status: 422,
            body: "{\"message\":\"insufficient balance\"}".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("422"));
        assert!(message.contains("insufficient balance"));
    }
}
