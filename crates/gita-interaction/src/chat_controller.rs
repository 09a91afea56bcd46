//! Conversation controller.
//!
//! Owns the session's conversation log and input buffer, and enforces the
//! single-outstanding-request rule: a send while a call is in flight is a
//! no-op. Completion is delivered back through [`ChatController::complete_success`]
//! or [`ChatController::complete_failure`] rather than an implicit callback
//! chain, so the front-end can run the call on a background task.

use crate::error::InteractionError;
use crate::GroundedAnswer;
use gita_core::conversation::{ChatMessage, ConversationLog, Turn};
use tokio::sync::mpsc::UnboundedSender;

/// Shown (with the error flag set) when the remote call fails.
pub const CONNECTION_APOLOGY: &str = "I'm having trouble connecting to the source right now. \
Please check your internet or try again later.";

/// Whether a call to the answer service is currently outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    AwaitingResponse,
}

/// Signals emitted towards the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatEvent {
    /// A message was appended; the view should scroll to show it.
    ScrollToLatest,
}

/// Why a send action was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendRejected {
    /// The input buffer was empty after trimming.
    EmptyInput,
    /// A previous call is still outstanding; the input buffer is untouched.
    RequestInFlight,
}

/// A send accepted by [`ChatController::begin_send`].
///
/// `prior_turns` was snapshotted before the user message was appended, so it
/// never contains the in-flight question.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub question: String,
    pub prior_turns: Vec<Turn>,
}

/// Drives the send/receive cycle for one conversation.
pub struct ChatController {
    log: ConversationLog,
    input: String,
    state: ChatState,
    events: Option<UnboundedSender<ChatEvent>>,
}

impl Default for ChatController {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatController {
    /// Creates a controller with a welcome-seeded conversation.
    pub fn new() -> Self {
        Self {
            log: ConversationLog::with_welcome(),
            input: String::new(),
            state: ChatState::Idle,
            events: None,
        }
    }

    /// Attaches a channel on which view signals are emitted.
    pub fn with_event_sender(mut self, sender: UnboundedSender<ChatEvent>) -> Self {
        self.events = Some(sender);
        self
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn is_awaiting(&self) -> bool {
        self.state == ChatState::AwaitingResponse
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the pending input buffer.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Starts a send of the current input buffer.
    ///
    /// On success the user message is appended, the buffer is cleared and the
    /// controller moves to `AwaitingResponse`; the caller runs the returned
    /// request against an [`crate::AnswerService`] and reports back via
    /// `complete_success` / `complete_failure`. Rejected sends change
    /// nothing.
    pub fn begin_send(&mut self) -> Result<PendingRequest, SendRejected> {
        if self.is_awaiting() {
            tracing::debug!("[ChatController] Send ignored, request already in flight");
            return Err(SendRejected::RequestInFlight);
        }

        let question = self.input.trim().to_string();
        if question.is_empty() {
            return Err(SendRejected::EmptyInput);
        }

        // Snapshot before appending so the history never carries the
        // unanswered question twice.
        let prior_turns = self.log.api_turns();

        self.append(ChatMessage::user(question.clone()));
        self.input.clear();
        self.state = ChatState::AwaitingResponse;

        tracing::info!(
            "[ChatController] Question sent ({} chars, {} prior turns)",
            question.len(),
            prior_turns.len()
        );

        Ok(PendingRequest {
            question,
            prior_turns,
        })
    }

    /// Records a successful answer and returns to `Idle`.
    pub fn complete_success(&mut self, answer: GroundedAnswer) {
        if !self.is_awaiting() {
            tracing::warn!("[ChatController] Completion received while idle, ignoring");
            return;
        }
        self.append(ChatMessage::assistant(answer.text, answer.citations));
        self.state = ChatState::Idle;
    }

    /// Records a failed call as the apology placeholder and returns to
    /// `Idle`, so further sends are possible immediately.
    pub fn complete_failure(&mut self, err: &InteractionError) {
        if !self.is_awaiting() {
            tracing::warn!("[ChatController] Failure received while idle, ignoring");
            return;
        }
        tracing::error!("[ChatController] Answer call failed: {err}");
        self.append(ChatMessage::assistant_error(CONNECTION_APOLOGY));
        self.state = ChatState::Idle;
    }

    fn append(&mut self, message: ChatMessage) {
        self.log.push(message);
        if let Some(events) = &self.events {
            let _ = events.send(ChatEvent::ScrollToLatest);
        }
    }
}
