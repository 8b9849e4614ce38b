//! Conversation session domain.
//!
//! - [`entities::Message`]: a single role-tagged message
//! - [`history::ConversationHistory`]: the append-only transcript of a session

pub mod entities;
pub mod history;
