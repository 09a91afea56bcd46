use async_trait::async_trait;
use gita_core::conversation::{MessageRole, Turn, WELCOME_TEXT};
use gita_interaction::{
    AnswerService, ChatController, ChatEvent, ChatState, GroundedAnswer, InteractionError,
    SendRejected, CONNECTION_APOLOGY,
};
use std::sync::Mutex;

/// Scripted answer service: pops pre-loaded results in order.
struct ScriptedService {
    results: Mutex<Vec<Result<GroundedAnswer, InteractionError>>>,
}

impl ScriptedService {
    fn new(results: Vec<Result<GroundedAnswer, InteractionError>>) -> Self {
        Self {
            results: Mutex::new(results),
        }
    }

    fn answering(text: &str, citations: Vec<&str>) -> Self {
        Self::new(vec![Ok(GroundedAnswer {
            text: text.to_string(),
            citations: citations.into_iter().map(String::from).collect(),
        })])
    }

    fn failing(err: InteractionError) -> Self {
        Self::new(vec![Err(err)])
    }
}

#[async_trait]
impl AnswerService for ScriptedService {
    async fn ask(
        &self,
        _question: &str,
        _prior_turns: &[Turn],
    ) -> Result<GroundedAnswer, InteractionError> {
        self.results
            .lock()
            .unwrap()
            .remove(0)
    }
}

/// Runs one full send cycle against the service.
async fn send(controller: &mut ChatController, service: &dyn AnswerService, input: &str) {
    controller.set_input(input);
    let pending = controller.begin_send().expect("send should be accepted");
    match service.ask(&pending.question, &pending.prior_turns).await {
        Ok(answer) => controller.complete_success(answer),
        Err(err) => controller.complete_failure(&err),
    }
}

#[tokio::test]
async fn test_send_grows_log_by_exactly_two() {
    let service = ScriptedService::answering(
        "Krishna teaches that duty should be done without attachment.",
        vec!["https://www.holy-bhagavad-gita.org/chapter/2"],
    );
    let mut controller = ChatController::new();
    let before = controller.log().len();

    send(
        &mut controller,
        &service,
        "What does Krishna say about duty?",
    )
    .await;

    assert_eq!(controller.log().len(), before + 2);
    let messages = controller.log().messages();
    let user = &messages[before];
    let assistant = &messages[before + 1];
    assert_eq!(user.role, MessageRole::User);
    assert_eq!(user.text, "What does Krishna say about duty?");
    assert_eq!(assistant.role, MessageRole::Assistant);
    assert!(!assistant.is_error);
    assert_eq!(
        assistant.citations,
        vec!["https://www.holy-bhagavad-gita.org/chapter/2".to_string()]
    );
    assert_eq!(controller.state(), ChatState::Idle);
}

#[tokio::test]
async fn test_prior_turns_exclude_in_flight_question() {
    let mut controller = ChatController::new();
    controller.set_input("What is karma yoga?");
    let pending = controller.begin_send().unwrap();

    // Snapshot was taken before the user message was appended: only the
    // welcome greeting is in it.
    assert_eq!(pending.prior_turns.len(), 1);
    assert_eq!(pending.prior_turns[0].text, WELCOME_TEXT);
    assert!(pending
        .prior_turns
        .iter()
        .all(|turn| turn.text != pending.question));
}

#[tokio::test]
async fn test_send_while_awaiting_is_noop() {
    let mut controller = ChatController::new();
    controller.set_input("first question");
    controller.begin_send().unwrap();
    let len_while_pending = controller.log().len();

    controller.set_input("second question");
    let rejected = controller.begin_send().unwrap_err();

    assert_eq!(rejected, SendRejected::RequestInFlight);
    assert_eq!(controller.log().len(), len_while_pending);
    // Pending input is not cleared by the ignored send.
    assert_eq!(controller.input(), "second question");
    assert_eq!(controller.state(), ChatState::AwaitingResponse);
}

#[tokio::test]
async fn test_empty_input_is_rejected_before_service() {
    let mut controller = ChatController::new();
    let before = controller.log().len();

    controller.set_input("   \t ");
    let rejected = controller.begin_send().unwrap_err();

    assert_eq!(rejected, SendRejected::EmptyInput);
    assert_eq!(controller.log().len(), before);
    assert_eq!(controller.state(), ChatState::Idle);
}

#[tokio::test]
async fn test_transport_failure_appends_apology_and_recovers() {
    let service = ScriptedService::failing(InteractionError::Transport(
        "connection refused".to_string(),
    ));
    let mut controller = ChatController::new();
    let before = controller.log().len();

    send(&mut controller, &service, "What is dhyana?").await;

    assert_eq!(controller.log().len(), before + 2);
    let last = controller.log().last().unwrap();
    assert!(last.is_error);
    assert_eq!(last.text, CONNECTION_APOLOGY);
    assert_eq!(controller.state(), ChatState::Idle);

    // Further sends work immediately after a failure.
    let follow_up = ScriptedService::answering("All is well.", vec![]);
    send(&mut controller, &follow_up, "And now?").await;
    assert_eq!(controller.log().len(), before + 4);
    assert!(!controller.log().last().unwrap().is_error);
}

#[tokio::test]
async fn test_error_placeholder_excluded_from_next_history() {
    let failing = ScriptedService::failing(InteractionError::Api {
        status: 503,
        message: "UNAVAILABLE".to_string(),
    });
    let mut controller = ChatController::new();
    send(&mut controller, &failing, "first").await;

    controller.set_input("second");
    let pending = controller.begin_send().unwrap();
    // Welcome + first question survive; the apology placeholder does not.
    assert_eq!(pending.prior_turns.len(), 2);
    assert!(pending
        .prior_turns
        .iter()
        .all(|turn| turn.text != CONNECTION_APOLOGY));
}

#[tokio::test]
async fn test_every_append_signals_scroll() {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let mut controller = ChatController::new().with_event_sender(tx);
    let service = ScriptedService::answering("answer", vec![]);

    send(&mut controller, &service, "question").await;

    // One event for the user message, one for the assistant message.
    assert_eq!(rx.try_recv(), Ok(ChatEvent::ScrollToLatest));
    assert_eq!(rx.try_recv(), Ok(ChatEvent::ScrollToLatest));
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_input_cleared_only_on_accepted_send() {
    let mut controller = ChatController::new();
    controller.set_input("  What is sattva?  ");
    let pending = controller.begin_send().unwrap();

    assert_eq!(pending.question, "What is sattva?");
    assert_eq!(controller.input(), "");
}
