//! Conversation message types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageRole {
    /// Message from the user.
    User,
    /// Message from the AI guide.
    Assistant,
}

/// A single message in the conversation log.
///
/// Messages are created on send/receive and never mutated afterwards.
/// Citations are only ever attached to assistant messages; `is_error` marks
/// the placeholder appended when the remote call fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message identifier (UUID format).
    pub id: String,
    /// The role of the message sender.
    pub role: MessageRole,
    /// The content of the message.
    pub text: String,
    /// Supporting source URLs returned with an answer.
    #[serde(default)]
    pub citations: Vec<String>,
    /// True for the placeholder shown when the remote call failed.
    #[serde(default)]
    pub is_error: bool,
    /// Timestamp when the message was created (ISO 8601 format).
    pub timestamp: String,
}

impl ChatMessage {
    fn new(role: MessageRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            citations: Vec::new(),
            is_error: false,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Creates a user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(MessageRole::User, text)
    }

    /// Creates an assistant message carrying answer text and citations.
    pub fn assistant(text: impl Into<String>, citations: Vec<String>) -> Self {
        Self {
            citations,
            ..Self::new(MessageRole::Assistant, text)
        }
    }

    /// Creates the error placeholder shown when the remote call failed.
    pub fn assistant_error(text: impl Into<String>) -> Self {
        Self {
            is_error: true,
            ..Self::new(MessageRole::Assistant, text)
        }
    }
}
