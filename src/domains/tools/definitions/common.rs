//! Common utilities shared across the exchange tools.

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result carrying the exchange response body verbatim.
pub fn success_result(body: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(body)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("expected text content"),
        }
    }

    #[test]
    fn test_success_result_keeps_body() {
        let result = success_result("not even json".to_string());
        assert_eq!(result.is_error, Some(false));
        assert_eq!(text_of(&result), "not even json");
    }

    #[test]
    fn test_error_result_flags_error() {
        let result = error_result("HTTP error! status: 500 - boom");
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("500"));
    }
}
