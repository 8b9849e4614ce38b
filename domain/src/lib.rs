//! Domain layer for tool-relay
//!
//! This crate contains the core types and pure logic of the tool-augmented
//! conversation loop. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Conversation
//!
//! A session keeps an append-only [`ConversationHistory`] of role-tagged
//! [`Message`]s. The system message is rebuilt every turn and never stored.
//!
//! ## Tool Directive
//!
//! The model has no native function-calling channel. It asks for a tool by
//! replying with a JSON object `{"tool_name": ..., "arguments": {...}}`,
//! which [`interpret`] extracts into a [`ToolCall`].
//!
//! ## Turn
//!
//! One user-input-to-answer cycle, moving through the [`TurnPhase`]s and
//! producing a [`TurnOutcome`].

pub mod core;
pub mod prompt;
pub mod session;
pub mod tool;
pub mod turn;
pub mod util;

// Re-export commonly used types
pub use core::error::DomainError;
pub use prompt::PromptComposer;
pub use session::{
    entities::{Message, Role},
    history::ConversationHistory,
};
pub use tool::{
    entities::{ToolCall, ToolDescriptor},
    parsing::interpret,
    value_objects::{ToolError, ToolResult, ToolResultMetadata},
};
pub use turn::{TurnOutcome, TurnPhase};
