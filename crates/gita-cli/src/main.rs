use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tokio::sync::mpsc;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

use gita_core::secret::GeminiConfig;
use gita_core::view::{View, ViewState};
use gita_interaction::{
    AnswerService, ChatController, ChatEvent, GeminiApiAgent, GroundedAnswer, InteractionError,
};

mod render;

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/chapters".to_string(),
                "/chapter".to_string(),
                "/chat".to_string(),
                "/resources".to_string(),
                "/privacy".to_string(),
                "/back".to_string(),
                "/help".to_string(),
            ],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Renders the current view to stdout.
fn show_view(state: &ViewState, controller: &ChatController) {
    let rendered = match state.current() {
        View::Catalog => render::render_catalog(),
        View::ChapterDetail => render::render_chapter(state),
        View::Conversation => render::render_conversation(controller.log()),
        View::Resources => render::render_resources(),
        View::PrivacyPolicy => render::render_privacy(),
    };
    print!("{rendered}");
}

/// The main entry point for the Gita Guide REPL.
///
/// Sets up:
/// 1. The Gemini answer agent (startup fails fast without an API key)
/// 2. mpsc channels for answer results and view signals
/// 3. A rustyline REPL with command completion for the five views
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // ===== Backend Initialization =====
    // A missing API key must surface here, not on the first question.
    let config = GeminiConfig::load()?;
    tracing::info!("[gita] Starting with model {}", config.model());
    let agent = Arc::new(GeminiApiAgent::from_config(&config));

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<ChatEvent>();
    let controller = Arc::new(Mutex::new(
        ChatController::new().with_event_sender(event_tx),
    ));

    // Print whatever was appended whenever the controller signals it.
    let printer_controller = Arc::clone(&controller);
    let printer = tokio::spawn(async move {
        while let Some(ChatEvent::ScrollToLatest) = event_rx.recv().await {
            let controller = printer_controller.lock().await;
            if let Some(rendered) = controller.log().last().and_then(render::render_appended) {
                print!("{rendered}");
            }
        }
    });

    // Channel carrying answer-call results back from spawned requests.
    let (response_tx, mut response_rx) =
        mpsc::unbounded_channel::<std::result::Result<GroundedAnswer, InteractionError>>();

    let handler_controller = Arc::clone(&controller);
    let response_handler = tokio::spawn(async move {
        while let Some(result) = response_rx.recv().await {
            let mut controller = handler_controller.lock().await;
            match result {
                Ok(answer) => controller.complete_success(answer),
                Err(err) => {
                    if err.is_auth() {
                        eprintln!(
                            "{}",
                            "Authentication failed - check your GEMINI_API_KEY.".red()
                        );
                    }
                    controller.complete_failure(&err);
                }
            }
        }
    });

    // ===== REPL Setup =====
    let helper = CliHelper::new();
    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(helper));

    let mut view_state = ViewState::new();
    {
        let controller = controller.lock().await;
        show_view(&view_state, &controller);
    }
    println!(
        "{}",
        "Type /help for commands, or 'quit' to exit.".bright_black()
    );

    // ===== Main REPL Loop =====
    loop {
        let prompt = match view_state.current() {
            View::Conversation => "ask> ",
            _ => "gita> ",
        };
        let readline = rl.readline(prompt);

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if trimmed.starts_with('/') {
                    handle_command(trimmed, &mut view_state, &controller).await;
                    continue;
                }

                if view_state.current() != View::Conversation {
                    println!(
                        "{}",
                        "Type /chat to ask a question, or /help for commands.".bright_black()
                    );
                    continue;
                }

                // ===== Send flow =====
                let pending = {
                    let mut controller = controller.lock().await;
                    controller.set_input(trimmed);
                    controller.begin_send()
                };

                match pending {
                    Ok(pending) => {
                        let agent = Arc::clone(&agent);
                        let tx = response_tx.clone();
                        tokio::spawn(async move {
                            tracing::debug!(
                                "[gita] Dispatching question ({} prior turns)",
                                pending.prior_turns.len()
                            );
                            let result =
                                agent.ask(&pending.question, &pending.prior_turns).await;
                            if let Err(err) = &result {
                                tracing::error!("[gita] Answer request failed: {err}");
                            }
                            let _ = tx.send(result);
                        });
                    }
                    Err(gita_interaction::SendRejected::RequestInFlight) => {
                        println!(
                            "{}",
                            "Still waiting for the previous answer...".bright_black()
                        );
                    }
                    Err(gita_interaction::SendRejected::EmptyInput) => {}
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    // Drop channels to signal shutdown
    drop(response_tx);
    drop(controller);

    let _ = response_handler.await;
    printer.abort();

    Ok(())
}

/// Dispatches a navigation command and renders the resulting view.
async fn handle_command(
    command: &str,
    view_state: &mut ViewState,
    controller: &Arc<Mutex<ChatController>>,
) {
    let mut parts = command.splitn(2, ' ');
    let name = parts.next().unwrap_or_default();
    let arg = parts.next().map(str::trim);

    match name {
        "/chapters" | "/back" => view_state.show_catalog(),
        "/chapter" => match arg.and_then(|value| value.parse::<u8>().ok()) {
            Some(id) => view_state.show_chapter(id),
            None => {
                println!("{}", "Usage: /chapter <1-18>".bright_black());
                return;
            }
        },
        "/chat" => view_state.show_conversation(),
        "/resources" => view_state.show_resources(),
        "/privacy" => view_state.show_privacy(),
        "/help" => {
            println!(
                "{}",
                "Commands: /chapters, /chapter <n>, /chat, /resources, /privacy, /back, quit"
                    .bright_black()
            );
            return;
        }
        _ => {
            println!("{}", "Unknown command".bright_black());
            return;
        }
    }

    let controller = controller.lock().await;
    show_view(view_state, &controller);
}
