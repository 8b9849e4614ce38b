//! LLM Gateway port
//!
//! Defines the interface for communicating with a text-only language model.

use async_trait::async_trait;
use relay_domain::Message;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Model returned an empty response")]
    EmptyResponse,

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// Calls are stateless: every request carries the full context in
/// `messages`, starting with the system message. Implementations (adapters)
/// live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Identifier of the model behind this gateway (for logs)
    fn model_name(&self) -> &str;

    /// Send an ordered list of messages and return the assistant's reply text
    async fn complete(&self, messages: &[Message]) -> Result<String, GatewayError>;
}
