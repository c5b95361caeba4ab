//! Typed HTTP client for an Ollama-style generation endpoint.
//!
//! # Responsibility
//! - Build natural-language prompts embedding note text.
//! - POST `{model, prompt, stream:false}` to `/api/generate` and read the
//!   `response` field of the JSON body.
//!
//! # Invariants
//! - One request per operation; no streaming, no auth, no retry.
//! - Request deadline is the only timeout handling.

use super::{extract_flashcards, FlashcardDraft, InferenceClient, InferenceResult};
use async_trait::async_trait;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "qwen2.5:0.5b";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Inference client backed by a local Ollama server.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    /// Creates a client against `base_url` with the default model.
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            // Builder only fails on TLS/resolver misconfiguration, neither of
            // which is reachable from these options.
            .unwrap_or_default();
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Overrides the generation model (e.g. `qwen2.5:0.5b`, `llama3.2:1b`).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    async fn generate(&self, prompt: &str) -> InferenceResult<String> {
        let started_at = Instant::now();
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .http
            .post(format!("{}/api/generate", self.base_url))
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateResponse>()
            .await?;

        info!(
            "event=generate module=inference status=ok model={} duration_ms={} response_chars={}",
            self.model,
            started_at.elapsed().as_millis(),
            response.response.chars().count()
        );
        Ok(response.response)
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl InferenceClient for OllamaClient {
    async fn summarize(&self, note_content: &str) -> InferenceResult<String> {
        self.generate(&summarize_prompt(note_content)).await
    }

    async fn answer_question(
        &self,
        note_content: &str,
        question: &str,
    ) -> InferenceResult<String> {
        self.generate(&answer_prompt(note_content, question)).await
    }

    async fn generate_flashcards(
        &self,
        note_content: &str,
    ) -> InferenceResult<Vec<FlashcardDraft>> {
        let raw = self.generate(&flashcards_prompt(note_content)).await?;
        let drafts = extract_flashcards(&raw);
        debug!(
            "event=flashcard_extract module=inference status=ok drafts={}",
            drafts.len()
        );
        Ok(drafts)
    }
}

fn summarize_prompt(note_content: &str) -> String {
    format!(
        "Summarize the following study notes in a clear, concise manner.\n\
         Focus on key concepts and main points.\n\n\
         Notes:\n{note_content}"
    )
}

fn answer_prompt(note_content: &str, question: &str) -> String {
    format!(
        "Based on the following study notes, answer the question.\n\
         Be concise and accurate. If the answer is not in the notes, say so.\n\n\
         Notes:\n{note_content}\n\n\
         Question: {question}"
    )
}

fn flashcards_prompt(note_content: &str) -> String {
    format!(
        "Based on the following study notes, generate 5 flashcards in JSON format.\n\
         Each flashcard should have a \"question\" and an \"answer\" field.\n\
         Return only valid JSON array, no other text.\n\n\
         Notes:\n{note_content}\n\n\
         Response format:\n\
         [{{\"question\": \"...\", \"answer\": \"...\"}}, ...]"
    )
}

#[cfg(test)]
mod tests {
    use super::{answer_prompt, flashcards_prompt, summarize_prompt, OllamaClient};

    #[test]
    fn prompts_embed_the_inputs() {
        assert!(summarize_prompt("mitosis phases").contains("mitosis phases"));
        let qa = answer_prompt("cell notes", "what is a cell?");
        assert!(qa.contains("cell notes"));
        assert!(qa.contains("Question: what is a cell?"));
        let cards = flashcards_prompt("dna notes");
        assert!(cards.contains("dna notes"));
        assert!(cards.contains("\"question\""));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = OllamaClient::new("http://localhost:11434/");
        assert_eq!(client.base_url, "http://localhost:11434");
    }
}
