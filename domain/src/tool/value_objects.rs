//! Tool domain value objects: immutable result and error types
//!
//! A tool invocation either succeeds with a JSON value or fails with a
//! [`ToolError`]. Failures are ordinary data: the conversation loop shows
//! them to the model instead of aborting the turn.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error reported by a tool invocation.
///
/// | Code | Description |
/// |------|-------------|
/// | `NOT_FOUND` | Unknown tool |
/// | `INVALID_ARGUMENT` | Missing or wrongly typed arguments |
/// | `EXECUTION_FAILED` | The tool ran and failed (remote 4xx/5xx, I/O) |
/// | `TIMEOUT` | The tool did not answer in time |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g., "NOT_FOUND", "TIMEOUT")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(tool_name: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", format!("Tool not found: {}", tool_name.into()))
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new("INVALID_ARGUMENT", message)
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new("EXECUTION_FAILED", message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new("TIMEOUT", message)
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ToolError {}

/// Result of a tool invocation: `{ok: true, value}` or `{ok: false, error}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Name of the tool that was invoked
    pub tool_name: String,
    /// Whether the invocation succeeded
    pub ok: bool,
    /// Returned value (for successful invocations)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Error information (for failed invocations)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
    /// Metadata about the invocation
    #[serde(default)]
    pub metadata: ToolResultMetadata,
}

/// Structured metadata about a tool invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResultMetadata {
    /// Duration of the invocation in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl ToolResult {
    /// Create a successful result
    pub fn success(tool_name: impl Into<String>, value: Value) -> Self {
        Self {
            tool_name: tool_name.into(),
            ok: true,
            value: Some(value),
            error: None,
            metadata: ToolResultMetadata::default(),
        }
    }

    /// Create a failed result
    pub fn failure(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            ok: false,
            value: None,
            error: Some(error),
            metadata: ToolResultMetadata::default(),
        }
    }

    /// Add duration metadata
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.metadata.duration_ms = Some(duration_ms);
        self
    }

    pub fn is_success(&self) -> bool {
        self.ok
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }

    /// Render the result as the text shown to the model.
    ///
    /// A success is the compact JSON serialization of the value. A failure
    /// becomes `Error calling <tool>: <error>`. Only serializing a success
    /// value can fail.
    pub fn to_tool_output(&self) -> Result<String, serde_json::Error> {
        if self.ok {
            serde_json::to_string(self.value.as_ref().unwrap_or(&Value::Null))
        } else {
            let reason = self
                .error
                .as_ref()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "Unknown error".to_string());
            Ok(format!("Error calling {}: {}", self.tool_name, reason))
        }
    }
}
