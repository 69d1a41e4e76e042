//! Tool-specific error types.

use thiserror::Error;

/// Errors raised before or while a tool answers.
///
/// Zero matches is never an error; lookups report it as a text result.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool is registered under this name.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments failed to deserialize or broke a precondition.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A result could not be encoded as JSON.
    #[error("Failed to encode result: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl ToolError {
    /// Create an "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create an "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
