//! Summarize screen state holder.
//!
//! # Responsibility
//! - Drive the "enter text, summarize, save as note" flow.
//! - Validate input before touching the remote endpoint.
//!
//! # Invariants
//! - `summarize` on empty trimmed text performs zero remote calls.
//! - A failed remote call leaves the in-progress `note_text` untouched.
//! - A blank title is derived from content at save time.

use crate::inference::InferenceClient;
use crate::model::note::{derive_title, Note, NoteId};
use crate::repo::note_repo::NoteRepository;
use log::{info, warn};
use tokio::sync::watch;

const ERR_EMPTY_SUMMARIZE: &str = "Please enter some text to summarize";
const ERR_EMPTY_SAVE: &str = "Cannot save empty note";

/// Immutable snapshot of the summarize screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummarizeState {
    pub title: String,
    pub note_text: String,
    pub summary: String,
    pub is_loading: bool,
    pub is_saved: bool,
    pub error: Option<String>,
}

/// State holder for the summarize screen.
pub struct SummarizeService<N: NoteRepository, I: InferenceClient> {
    repo: N,
    inference: I,
    state: watch::Sender<SummarizeState>,
}

impl<N: NoteRepository, I: InferenceClient> SummarizeService<N, I> {
    pub fn new(repo: N, inference: I) -> Self {
        Self {
            repo,
            inference,
            state: watch::channel(SummarizeState::default()).0,
        }
    }

    /// Observes state snapshots; the receiver always holds the latest one.
    pub fn subscribe(&self) -> watch::Receiver<SummarizeState> {
        self.state.subscribe()
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> SummarizeState {
        self.state.borrow().clone()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        let next = SummarizeState {
            title: title.into(),
            error: None,
            ..self.snapshot()
        };
        self.state.send_replace(next);
    }

    pub fn set_note_text(&self, text: impl Into<String>) {
        let next = SummarizeState {
            note_text: text.into(),
            error: None,
            ..self.snapshot()
        };
        self.state.send_replace(next);
    }

    /// Summarizes the entered text through the inference client.
    pub async fn summarize(&self) {
        let note_text = self.snapshot().note_text.trim().to_string();
        if note_text.is_empty() {
            let next = SummarizeState {
                error: Some(ERR_EMPTY_SUMMARIZE.to_string()),
                ..self.snapshot()
            };
            self.state.send_replace(next);
            return;
        }

        self.state.send_replace(SummarizeState {
            is_loading: true,
            error: None,
            ..self.snapshot()
        });

        match self.inference.summarize(&note_text).await {
            Ok(summary) => {
                self.state.send_replace(SummarizeState {
                    summary,
                    is_loading: false,
                    ..self.snapshot()
                });
            }
            Err(err) => {
                warn!("event=summarize module=service status=error error={err}");
                self.state.send_replace(SummarizeState {
                    is_loading: false,
                    error: Some(err.to_string()),
                    ..self.snapshot()
                });
            }
        }
    }

    /// Persists the entered text (and summary, when present) as a note.
    ///
    /// Returns the new note id on success, `None` when validation or
    /// persistence failed; failures are surfaced through the state snapshot.
    pub async fn save_note(&self) -> Option<NoteId> {
        let state = self.snapshot();
        let content = state.note_text.trim().to_string();
        if content.is_empty() {
            self.state.send_replace(SummarizeState {
                error: Some(ERR_EMPTY_SAVE.to_string()),
                ..state
            });
            return None;
        }

        let title = derive_title(&state.title, &content);
        let note = Note::new(title, content).with_summary(state.summary.clone());

        match self.repo.insert_note(&note) {
            Ok(id) => {
                info!("event=note_save module=service status=ok note_id={id}");
                self.state.send_replace(SummarizeState {
                    is_saved: true,
                    ..state
                });
                Some(id)
            }
            Err(err) => {
                warn!("event=note_save module=service status=error error={err}");
                self.state.send_replace(SummarizeState {
                    error: Some(format!("Failed to save note: {err}")),
                    ..state
                });
                None
            }
        }
    }

    /// Resets the screen to its initial state.
    pub fn clear(&self) {
        self.state.send_replace(SummarizeState::default());
    }
}
