//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed tool directive: {0}")]
    MalformedDirective(String),

    #[error("Invalid tool name '{0}': expected '<provider>.<tool>'")]
    InvalidToolName(String),
}

impl DomainError {
    /// Check if this error only means "the model did not ask for a tool"
    pub fn is_malformed_directive(&self) -> bool {
        matches!(self, DomainError::MalformedDirective(_))
    }
}
