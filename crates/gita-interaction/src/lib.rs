//! Outbound answer-service client and conversation control.
//!
//! This crate owns the one external collaborator of the application: the
//! "generate answer" call to the Gemini API, reached through the
//! [`AnswerService`] trait so the controller can be driven against a scripted
//! implementation in tests.

pub mod chat_controller;
pub mod error;
pub mod gemini_api_agent;

pub use chat_controller::{
    ChatController, ChatEvent, ChatState, PendingRequest, SendRejected, CONNECTION_APOLOGY,
};
pub use error::InteractionError;
pub use gemini_api_agent::GeminiApiAgent;

use async_trait::async_trait;
use gita_core::conversation::Turn;

/// An answer returned by the remote service, possibly grounded in web search
/// results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundedAnswer {
    /// The answer text; never empty (a fixed fallback substitutes for an
    /// empty remote reply).
    pub text: String,
    /// Supporting source URLs, unique, in first-seen order.
    pub citations: Vec<String>,
}

/// The one function-shaped interface to the external answer provider.
#[async_trait]
pub trait AnswerService: Send + Sync {
    /// Generates an answer for `question` given the prior conversation.
    ///
    /// Callers guarantee `question` is non-empty after trimming; `prior_turns`
    /// must not contain the in-flight question itself. Transport and protocol
    /// failures propagate as typed errors and are never converted into answer
    /// text here.
    async fn ask(
        &self,
        question: &str,
        prior_turns: &[Turn],
    ) -> Result<GroundedAnswer, InteractionError>;
}
