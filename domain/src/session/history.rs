//! Conversation history: the append-only transcript of a session.
//!
//! The history never contains the per-turn system message or the synthetic
//! "Tool output" message used for the follow-up query. It is never
//! truncated or rewritten.
//!
//! Mutation requires `&mut self`, so whoever owns the history (the turn
//! use case) is its only writer.

use super::entities::Message;

/// Ordered transcript of role-tagged messages (Entity)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationHistory {
    messages: Vec<Message>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single message
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Append all messages staged during a turn in one step.
    ///
    /// Turns stage their messages locally and call this only once they have
    /// completed, so a failed or abandoned turn never leaves a partial record.
    pub fn commit(&mut self, staged: impl IntoIterator<Item = Message>) {
        self.messages.extend(staged);
    }

    /// Owned copy of the transcript
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Build the message list for a model query: the system message first,
    /// then the stored transcript, then the turn-local `tail`.
    pub fn query_with(&self, system: Message, tail: &[Message]) -> Vec<Message> {
        let mut messages = Vec::with_capacity(self.messages.len() + tail.len() + 1);
        messages.push(system);
        messages.extend(self.messages.iter().cloned());
        messages.extend(tail.iter().cloned());
        messages
    }
}
