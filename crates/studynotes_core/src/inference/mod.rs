//! Inference client boundary.
//!
//! # Responsibility
//! - Define the contract for turning note text into model output.
//! - Own the lenient flashcard-extraction policy applied to raw output.
//!
//! # Invariants
//! - Flashcard extraction is best-effort: any malformed output degrades to
//!   an empty list, never an error.
//! - Transport failures surface as a single generic error variant; there is
//!   no retry and no circuit breaking.

use async_trait::async_trait;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod ollama;

pub use ollama::OllamaClient;

/// Transient question/answer pair produced from model output.
///
/// Materialized into a persisted flashcard only on explicit save.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlashcardDraft {
    pub question: String,
    pub answer: String,
}

pub type InferenceResult<T> = Result<T, InferenceError>;

/// Failure reaching or decoding the remote generation endpoint.
#[derive(Debug)]
pub enum InferenceError {
    /// Transport-level failure (connect, timeout, non-2xx, bad body).
    Http(reqwest::Error),
    /// The endpoint is unreachable or refused service for a reason that is
    /// already described in plain text (used by alternate client impls).
    Unavailable(String),
}

impl Display for InferenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(err) => write!(f, "inference request failed: {err}"),
            Self::Unavailable(message) => write!(f, "{message}"),
        }
    }
}

impl Error for InferenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<reqwest::Error> for InferenceError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

/// Boundary object that turns natural-language prompts into model output.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Summarizes note content into free text.
    async fn summarize(&self, note_content: &str) -> InferenceResult<String>;
    /// Answers a question against note content.
    async fn answer_question(&self, note_content: &str, question: &str)
        -> InferenceResult<String>;
    /// Produces a bounded list of question/answer pairs from note content.
    async fn generate_flashcards(&self, note_content: &str)
        -> InferenceResult<Vec<FlashcardDraft>>;
}

/// Extracts flashcard pairs from raw model output.
///
/// The text generator has no guaranteed output schema, so this scans for the
/// first `[` and the last `]` and parses the inclusive substring as a JSON
/// array of `{question, answer}` objects. Missing brackets or any parse
/// failure yield an empty list; partial results are never returned.
pub fn extract_flashcards(raw: &str) -> Vec<FlashcardDraft> {
    let Some(start) = raw.find('[') else {
        return Vec::new();
    };
    let Some(end) = raw.rfind(']') else {
        return Vec::new();
    };
    if end < start {
        return Vec::new();
    }

    serde_json::from_str::<Vec<FlashcardDraft>>(&raw[start..=end]).unwrap_or_default()
}
