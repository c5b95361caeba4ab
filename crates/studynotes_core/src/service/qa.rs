//! Question-answering screen state holder.
//!
//! # Responsibility
//! - Hold the ephemeral chat transcript and drive ask/answer turns.
//!
//! # Invariants
//! - Chat messages are session-only; they are never persisted.
//! - `ask` is a no-op without a selected note or a non-empty question.
//! - The user message is appended (and the input cleared) before the remote
//!   call starts, and stays in the transcript on failure.

use crate::inference::InferenceClient;
use crate::model::note::{Note, NoteId};
use crate::model::now_millis;
use crate::repo::note_repo::NoteRepository;
use crate::repo::RepoResult;
use log::warn;
use tokio::sync::watch;

const ERR_NOTE_NOT_FOUND: &str = "Note not found";

/// Session-only chat turn; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub content: String,
    /// `true` for the user's turn, `false` for the assistant's.
    pub is_user: bool,
    /// Epoch milliseconds when the turn was produced.
    pub timestamp: i64,
}

impl ChatMessage {
    fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_user: true,
            timestamp: now_millis(),
        }
    }

    fn assistant(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_user: false,
            timestamp: now_millis(),
        }
    }
}

/// Immutable snapshot of the Q&A screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QaState {
    pub messages: Vec<ChatMessage>,
    pub selected_note: Option<NoteId>,
    pub question: String,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// State holder for the Q&A screen.
pub struct QaService<N: NoteRepository, I: InferenceClient> {
    repo: N,
    inference: I,
    state: watch::Sender<QaState>,
}

impl<N: NoteRepository, I: InferenceClient> QaService<N, I> {
    pub fn new(repo: N, inference: I) -> Self {
        Self {
            repo,
            inference,
            state: watch::channel(QaState::default()).0,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<QaState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> QaState {
        self.state.borrow().clone()
    }

    /// Notes available for selection, most recently updated first.
    pub fn list_notes(&self) -> RepoResult<Vec<Note>> {
        self.repo.list_notes()
    }

    pub fn select_note(&self, note_id: NoteId) {
        self.state.send_replace(QaState {
            selected_note: Some(note_id),
            ..self.snapshot()
        });
    }

    pub fn set_question(&self, question: impl Into<String>) {
        self.state.send_replace(QaState {
            question: question.into(),
            ..self.snapshot()
        });
    }

    /// Sends the entered question against the selected note.
    pub async fn ask(&self) {
        let state = self.snapshot();
        let Some(note_id) = state.selected_note else {
            return;
        };
        let question = state.question.trim().to_string();
        if question.is_empty() {
            return;
        }

        let mut messages = state.messages.clone();
        messages.push(ChatMessage::user(question.clone()));
        self.state.send_replace(QaState {
            messages,
            question: String::new(),
            is_loading: true,
            error: None,
            ..state
        });

        let note = match self.repo.get_note(note_id) {
            Ok(Some(note)) => note,
            Ok(None) => {
                self.finish_ask(None, Some(ERR_NOTE_NOT_FOUND.to_string()));
                return;
            }
            Err(err) => {
                warn!("event=qa_ask module=service status=error error={err}");
                self.finish_ask(None, Some(err.to_string()));
                return;
            }
        };

        match self.inference.answer_question(&note.content, &question).await {
            Ok(answer) => self.finish_ask(Some(answer), None),
            Err(err) => {
                warn!("event=qa_ask module=service status=error error={err}");
                self.finish_ask(None, Some(err.to_string()));
            }
        }
    }

    fn finish_ask(&self, answer: Option<String>, error: Option<String>) {
        let state = self.snapshot();
        let mut messages = state.messages.clone();
        if let Some(answer) = answer {
            messages.push(ChatMessage::assistant(answer));
        }
        self.state.send_replace(QaState {
            messages,
            is_loading: false,
            error,
            ..state
        });
    }

    /// Empties the transcript; selection and input are kept.
    pub fn clear_chat(&self) {
        self.state.send_replace(QaState {
            messages: Vec::new(),
            ..self.snapshot()
        });
    }
}
