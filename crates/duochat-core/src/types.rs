use serde::{Deserialize, Serialize};

// ============================================================================
// Conversation Types - Turns as held in a session
// ============================================================================

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Fixed label used when rendering a turn into a flat prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Assistant => "Assistant",
        }
    }

    /// Role name expected by the chat-completions wire format.
    pub fn api_name(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One message in a conversation. Immutable once created; insertion order
/// is conversation order. Strict user/assistant alternation is not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    /// Create a user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    /// Create an assistant turn.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

// ============================================================================
// Wire Types - OpenAI-compatible chat-completions messages
// ============================================================================

/// A role-tagged message as sent to (and received from) the remote endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }

    /// Convert a stored turn into its wire form.
    pub fn from_turn(turn: &Turn) -> Self {
        Self {
            role: turn.role.api_name().to_string(),
            content: turn.text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::User.label(), "User");
        assert_eq!(Role::Assistant.label(), "Assistant");
        assert_eq!(Role::User.api_name(), "user");
        assert_eq!(Role::Assistant.api_name(), "assistant");
    }

    #[test]
    fn test_turn_constructors() {
        let turn = Turn::user("hello");
        assert_eq!(turn.role, Role::User);
        assert_eq!(turn.text, "hello");

        let turn = Turn::assistant("hi there");
        assert_eq!(turn.role, Role::Assistant);
        assert_eq!(turn.text, "hi there");
    }

    #[test]
    fn test_chat_message_from_turn() {
        let msg = ChatMessage::from_turn(&Turn::assistant("ok"));
        assert_eq!(msg.role, "assistant");
        assert_eq!(msg.content, "ok");
    }

    #[test]
    fn test_chat_message_serializes_flat() {
        let msg = ChatMessage::user("ping");
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"ping"}"#);
    }
}
