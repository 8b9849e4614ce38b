//! Application layer for tool-relay
//!
//! This crate contains the turn use case, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExecutionParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoTurnProgress, TurnProgressNotifier},
    tool_catalog::{CatalogError, ToolCatalogPort},
};
pub use use_cases::run_turn::{RunTurnUseCase, TurnError};
