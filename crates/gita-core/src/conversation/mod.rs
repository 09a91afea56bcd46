//! Conversation domain types.
//!
//! Messages and the session-scoped conversation log. The log is append-only
//! for the lifetime of a session and is discarded when the process exits.

mod log;
mod message;

pub use log::{ConversationLog, Turn, WELCOME_TEXT};
pub use message::{ChatMessage, MessageRole};
