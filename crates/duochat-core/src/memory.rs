//! Conversational memory attached to a session.
//!
//! A buffer of completed user/assistant exchanges, built up only after a
//! reply has been received. The session holds it as an `Option`: switching
//! models unsets it so it is rebuilt against the new backend, without
//! touching the visible turn history.

use crate::types::ChatMessage;

/// Append-only buffer of completed exchanges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationMemory {
    messages: Vec<ChatMessage>,
}

impl ConversationMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed exchange: the user input and the assistant reply.
    pub fn add_exchange(&mut self, input: impl Into<String>, reply: impl Into<String>) {
        self.messages.push(ChatMessage::user(input));
        self.messages.push(ChatMessage::assistant(reply));
    }

    /// The buffered messages in insertion order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of completed exchanges.
    pub fn exchange_count(&self) -> usize {
        self.messages.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
