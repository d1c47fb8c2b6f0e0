//! Structured errors raised by the tool layer itself.
//!
//! Archive failures arrive as `rewind_core::Error` and convert on their own;
//! these cover problems with the tool call before or after it reaches the
//! archive.

use rmcp::model::{ErrorCode, ErrorData as McpError};

#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Invalid input parameters (e.g., empty URL).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// Tool output could not be encoded.
    #[error("SERIALIZE_FAILED: {0}")]
    Serialize(String),
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        let (code, message) = match &err {
            ToolError::InvalidInput(msg) => (-32602, msg.clone()),
            ToolError::Serialize(msg) => (-32603, msg.clone()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error_codes() {
        let invalid: McpError = ToolError::InvalidInput("url cannot be empty".into()).into();
        assert_eq!(invalid.code.0, -32602);

        let serialize: McpError = ToolError::Serialize("boom".into()).into();
        assert_eq!(serialize.code.0, -32603);
    }
}
