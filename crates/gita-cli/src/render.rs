//! Terminal rendering for the five views.
//!
//! Rendering only reads state; it never mutates the conversation log or the
//! view state.

use colored::Colorize;
use gita_core::catalog::{self, GITA_PDF_URL};
use gita_core::conversation::{ChatMessage, ConversationLog, MessageRole};
use gita_core::view::ViewState;

/// The chapter list, one line per chapter.
pub fn render_catalog() -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "=== Gita Guide ===".bright_magenta().bold()));
    out.push_str(&format!(
        "{}\n\n",
        "Wisdom for the modern student".bright_black()
    ));
    for chapter in catalog::all() {
        out.push_str(&format!(
            "{} {} {}\n",
            format!("{:>2}.", chapter.id).bright_black(),
            chapter.sanskrit_name.bright_blue().bold(),
            format!("({})", chapter.english_name).bright_black(),
        ));
    }
    out.push_str(&format!(
        "\n{}\n",
        "Type /chapter <n> for details, /chat to ask a question.".bright_black()
    ));
    out
}

/// The detail view for the selected chapter.
///
/// An unknown or missing selection renders as an empty string.
pub fn render_chapter(state: &ViewState) -> String {
    let Some(chapter) = state.selected_record() else {
        return String::new();
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        format!("Chapter {}", chapter.id).yellow().bold()
    ));
    out.push_str(&format!("{}\n", chapter.sanskrit_name.bright_blue().bold()));
    out.push_str(&format!("{}\n", chapter.transliteration.bright_blue()));
    out.push_str(&format!("{}\n\n", chapter.english_name.bold()));
    out.push_str(&format!("{}\n\n", chapter.summary));
    out.push_str(&format!(
        "{} {}\n",
        "Read the full chapter explanation:".bright_black(),
        chapter.external_url.underline()
    ));
    out
}

/// One chat message, colored by role.
pub fn render_message(message: &ChatMessage) -> String {
    let mut out = String::new();
    match message.role {
        MessageRole::User => {
            out.push_str(&format!("{}\n", format!("> {}", message.text).green()));
        }
        MessageRole::Assistant => {
            for line in message.text.lines() {
                if message.is_error {
                    out.push_str(&format!("{}\n", line.red()));
                } else {
                    out.push_str(&format!("{}\n", line.bright_blue()));
                }
            }
            if !message.citations.is_empty() {
                out.push_str(&format!("{}\n", "Sources:".bright_black()));
                for (index, citation) in message.citations.iter().enumerate() {
                    out.push_str(&format!(
                        "{}\n",
                        format!("  [{}] {}", index + 1, citation).bright_black()
                    ));
                }
            }
        }
    }
    out
}

/// Rendering for a message freshly appended while chatting.
///
/// The user's own question is already visible on the prompt line they just
/// typed, so only assistant appends produce output.
pub fn render_appended(message: &ChatMessage) -> Option<String> {
    match message.role {
        MessageRole::User => None,
        MessageRole::Assistant => Some(render_message(message)),
    }
}

/// The whole conversation so far.
pub fn render_conversation(log: &ConversationLog) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n{}\n\n",
        "=== Ask Krishna ===".bright_magenta().bold(),
        "AI guide based on the Gita. Type your question, or /back to leave.".bright_black()
    ));
    for message in log.messages() {
        out.push_str(&render_message(message));
        out.push('\n');
    }
    out
}

/// The study resources view: the bundled PDF plus every chapter link.
pub fn render_resources() -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        "=== Study Resources ===".bright_magenta().bold()
    ));
    out.push_str(&format!(
        "{} {}\n\n",
        "Complete Gita PDF:".bold(),
        GITA_PDF_URL.underline()
    ));
    out.push_str(&format!("{}\n", "Chapter-wise explanations:".bold()));
    for chapter in catalog::all() {
        out.push_str(&format!(
            "{} {} {}\n",
            format!("{:>2}.", chapter.id).bright_black(),
            chapter.sanskrit_name,
            chapter.external_url.bright_black().underline()
        ));
    }
    out
}

/// The fixed privacy policy text.
pub fn render_privacy() -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        "=== Privacy Policy ===".bright_magenta().bold()
    ));
    out.push_str(
        "Gita Guide is designed for students to explore the Bhagavad Gita.\n\
         \n\
         Data collection: we do not collect, store, or share any personal\n\
         identifiable information from any users.\n\
         \n\
         AI and third-party services: this app uses Google Gemini to answer\n\
         questions about the Gita. The text of your question is sent to\n\
         Google's servers for processing. No personal data is attached to the\n\
         request, and your chat history is not stored anywhere after the\n\
         session ends.\n",
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gita_core::conversation::ConversationLog;
    use gita_core::view::ViewState;

    #[test]
    fn test_render_catalog_lists_all_chapters() {
        let out = render_catalog();
        assert!(out.contains("Arjuna Vishada Yoga"));
        assert!(out.contains("Moksha Sanyasa Yoga"));
    }

    #[test]
    fn test_render_chapter_shows_selected_content() {
        let mut state = ViewState::new();
        state.show_chapter(7);
        let out = render_chapter(&state);
        assert!(out.contains("Jnana Vijnana Yoga"));
        assert!(out.contains("https://www.holy-bhagavad-gita.org/chapter/7"));
    }

    #[test]
    fn test_render_chapter_unknown_id_is_empty() {
        let mut state = ViewState::new();
        state.show_chapter(42);
        assert!(render_chapter(&state).is_empty());
    }

    #[test]
    fn test_render_chapter_is_idempotent_for_same_id() {
        let mut state = ViewState::new();
        state.show_chapter(7);
        let first = render_chapter(&state);
        state.show_catalog();
        state.show_chapter(7);
        let second = render_chapter(&state);
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_message_includes_citations() {
        let message = gita_core::conversation::ChatMessage::assistant(
            "See chapter two.",
            vec!["https://www.holy-bhagavad-gita.org/chapter/2".to_string()],
        );
        let out = render_message(&message);
        assert!(out.contains("See chapter two."));
        assert!(out.contains("Sources:"));
        assert!(out.contains("https://www.holy-bhagavad-gita.org/chapter/2"));
    }

    #[test]
    fn test_render_appended_skips_user_echo() {
        // The question is already on the prompt line; appending it must not
        // print it a second time.
        let message = gita_core::conversation::ChatMessage::user("What is dharma?");
        assert!(render_appended(&message).is_none());
    }

    #[test]
    fn test_render_appended_prints_assistant_messages() {
        let message = gita_core::conversation::ChatMessage::assistant(
            "Dharma is one's duty.",
            vec![],
        );
        let out = render_appended(&message).expect("assistant appends render");
        assert!(out.contains("Dharma is one's duty."));

        let error = gita_core::conversation::ChatMessage::assistant_error("Connection trouble.");
        let out = render_appended(&error).expect("error placeholders render");
        assert!(out.contains("Connection trouble."));
    }

    #[test]
    fn test_render_conversation_includes_welcome() {
        let log = ConversationLog::with_welcome();
        let out = render_conversation(&log);
        assert!(out.contains("Namaste!"));
    }

    #[test]
    fn test_render_resources_lists_pdf_and_links() {
        let out = render_resources();
        assert!(out.contains(GITA_PDF_URL));
        assert!(out.contains("https://www.holy-bhagavad-gita.org/chapter/18"));
    }
}
