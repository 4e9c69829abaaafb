//! Response creation utilities for MCP operations

use crate::error::Result;
use rmcp::model::*;

/// Prefix added to the text of every error response
pub const ERROR_PREFIX: &str = "Error: ";

/// Create a success response for MCP tool calls
pub fn create_success_response(message: String) -> CallToolResult {
    CallToolResult {
        content: vec![Annotated::new(
            RawContent::Text(RawTextContent { text: message }),
            None,
        )],
        is_error: Some(false),
    }
}

/// Create an error response for MCP tool calls
pub fn create_error_response(message: String) -> CallToolResult {
    CallToolResult {
        content: vec![Annotated::new(
            RawContent::Text(RawTextContent {
                text: format!("{ERROR_PREFIX}{message}"),
            }),
            None,
        )],
        is_error: Some(true),
    }
}

/// Convert the outcome of a dispatched call into a tool result
pub fn into_call_result(outcome: Result<String>) -> CallToolResult {
    match outcome {
        Ok(text) => create_success_response(text),
        Err(e) => create_error_response(e.to_string()),
    }
}

/// Text of the single content block of a result
pub fn response_text(result: &CallToolResult) -> Option<&str> {
    match result.content.first().map(|content| &content.raw) {
        Some(RawContent::Text(text)) => Some(text.text.as_str()),
        _ => None,
    }
}
