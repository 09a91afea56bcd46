//! Session-scoped conversation log.

use super::message::{ChatMessage, MessageRole};

/// Greeting seeded into every new conversation.
pub const WELCOME_TEXT: &str = "Namaste! I am your guide to the Bhagavad Gita. How can I help \
you today? You can ask me about duty, friendship, focus, or any specific chapter.";

/// One role-tagged unit of conversation in the ordered history sent to the
/// remote answer service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: MessageRole,
    pub text: String,
}

/// Ordered, append-only sequence of messages for the current session.
///
/// Insertion order is significant: it defines the turn order sent upstream.
/// The log is independent of how messages are displayed; the rendering layer
/// only ever reads it.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    messages: Vec<ChatMessage>,
}

impl ConversationLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a log seeded with the welcome greeting.
    pub fn with_welcome() -> Self {
        let mut log = Self::new();
        log.push(ChatMessage::assistant(WELCOME_TEXT, Vec::new()));
        log
    }

    /// Appends a message to the log.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Returns all messages in insertion order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Returns the most recently appended message, if any.
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Builds the turn list sent to the remote answer service.
    ///
    /// Error placeholders are skipped: they are local UI artifacts, not part
    /// of the conversation the remote service should see.
    pub fn api_turns(&self) -> Vec<Turn> {
        self.messages
            .iter()
            .filter(|message| !message.is_error)
            .map(|message| Turn {
                role: message.role,
                text: message.text.clone(),
            })
            .collect()
    }
}
