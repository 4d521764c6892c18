//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur while dispatching or preparing a tool call.
///
/// None of these escape a [`ToolHandler`](super::ToolHandler): handlers turn
/// them into a JSON error payload with [`error_payload`](super::error_payload).
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// The raw context could not be parsed into an invocation.
    #[error("Invalid JSON context provided: {0}")]
    InvalidContext(String),

    /// A required argument was absent from the invocation.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid context" error.
    pub fn invalid_context(msg: impl Into<String>) -> Self {
        Self::InvalidContext(msg.into())
    }

    /// Create a new "missing argument" error.
    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument(name.into())
    }
}
