//! GeminiApiAgent - Direct REST API implementation for Gemini.
//!
//! Calls the `generateContent` endpoint with the study-guide persona as the
//! system instruction and Google Search grounding enabled, so answers can
//! carry citation URLs.

use crate::error::InteractionError;
use crate::{AnswerService, GroundedAnswer};
use async_trait::async_trait;
use gita_core::conversation::{MessageRole, Turn};
use gita_core::secret::GeminiConfig;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Substituted when the remote reply contains no usable answer text.
/// Distinct from the connection apology: this is a successful call that
/// simply produced nothing.
pub const NO_ANSWER_FALLBACK: &str = "I apologize, I couldn't find an answer to that at the \
moment. Please try asking differently.";

/// Persona preamble sent as the system instruction on every request.
const SYSTEM_INSTRUCTION: &str = "\
You are a wise, friendly, and approachable guide for middle school and high school students \
learning about the Srimad Bhagavad Gita.

Your goal is to answer their questions based on the teachings of the Gita.
- Keep your language simple, soothing, and easy to understand for teenagers.
- Use analogies relevant to modern school life where appropriate, but maintain the dignity of \
the scripture.
- Always refer to the source material (Gita chapters/verses) when possible.
- Be succinct. Do not give overly long lectures.
- If a question is not about the Gita or moral/ethical dilemmas, politely guide them back to \
the topic of the Gita.
- You have access to Google Search to find specific verse numbers or citations if you need to \
double-check.";

const TEMPERATURE: f64 = 0.7;

/// Client for the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiApiAgent {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiApiAgent {
    /// Creates a new agent with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Creates an agent from loaded secret configuration.
    pub fn from_config(config: &GeminiConfig) -> Self {
        Self::new(config.api_key.clone(), config.model())
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn build_request(&self, question: &str, prior_turns: &[Turn]) -> GenerateContentRequest {
        let mut contents: Vec<Content> = prior_turns.iter().map(Content::from_turn).collect();
        contents.push(Content {
            role: "user".to_string(),
            parts: vec![Part {
                text: question.to_string(),
            }],
        });

        GenerateContentRequest {
            contents,
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            tools: vec![Tool {
                google_search: GoogleSearch {},
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
            },
        }
    }

    async fn send_request(
        &self,
        body: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, InteractionError> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
            api_key = self.api_key
        );

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| InteractionError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        response
            .json()
            .await
            .map_err(|err| InteractionError::MalformedResponse(err.to_string()))
    }
}

#[async_trait]
impl AnswerService for GeminiApiAgent {
    async fn ask(
        &self,
        question: &str,
        prior_turns: &[Turn],
    ) -> Result<GroundedAnswer, InteractionError> {
        tracing::debug!(
            "[GeminiApiAgent] Sending question ({} chars, {} prior turns)",
            question.len(),
            prior_turns.len()
        );

        let request = self.build_request(question, prior_turns);
        let response = self.send_request(&request).await?;

        let answer = GroundedAnswer {
            text: extract_answer(&response),
            citations: extract_citations(&response),
        };
        tracing::debug!(
            "[GeminiApiAgent] Received {} chars, {} citations",
            answer.text.len(),
            answer.citations.len()
        );
        Ok(answer)
    }
}

/// Maps a conversation role to the wire protocol's role tag.
fn role_tag(role: MessageRole) -> &'static str {
    match role {
        MessageRole::User => "user",
        MessageRole::Assistant => "model",
    }
}

// ===== Request wire format =====

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: SystemInstruction,
    tools: Vec<Tool>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

impl Content {
    fn from_turn(turn: &Turn) -> Self {
        Self {
            role: role_tag(turn.role).to_string(),
            parts: vec![Part {
                text: turn.text.clone(),
            }],
        }
    }
}

#[derive(Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct Tool {
    #[serde(rename = "googleSearch")]
    google_search: GoogleSearch,
}

#[derive(Serialize)]
struct GoogleSearch {}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
}

// ===== Response wire format =====

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<ContentResponse>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize)]
struct GroundingChunk {
    web: Option<WebSource>,
}

#[derive(Deserialize)]
struct WebSource {
    uri: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Concatenates the text parts of the first candidate, substituting the
/// fixed fallback when the reply carries no usable text.
fn extract_answer(response: &GenerateContentResponse) -> String {
    let text = response
        .candidates
        .as_deref()
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|part| part.text.as_deref())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        NO_ANSWER_FALLBACK.to_string()
    } else {
        text
    }
}

/// Collects grounding source URLs, de-duplicated in first-seen order.
fn extract_citations(response: &GenerateContentResponse) -> Vec<String> {
    let mut citations: Vec<String> = Vec::new();

    let chunks = response
        .candidates
        .as_deref()
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.grounding_metadata.as_ref())
        .map(|metadata| metadata.grounding_chunks.as_slice())
        .unwrap_or_default();

    for chunk in chunks {
        let Some(uri) = chunk.web.as_ref().and_then(|web| web.uri.as_deref()) else {
            continue;
        };
        if uri.is_empty() {
            continue;
        }
        if !citations.iter().any(|known| known == uri) {
            citations.push(uri.to_string());
        }
    }

    citations
}

fn map_http_error(status: StatusCode, body: String) -> InteractionError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    InteractionError::Api {
        status: status.as_u16(),
        message,
    }
}
