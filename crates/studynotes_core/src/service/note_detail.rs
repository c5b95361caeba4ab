//! Note detail (editor) screen state holder.
//!
//! # Responsibility
//! - Load one note into an editable snapshot and save edits back.
//!
//! # Invariants
//! - Saving with both fields blank is a no-op.
//! - Saving an existing note refreshes `updated_at`; creating a new note
//!   assigns both timestamps.

use crate::model::note::{Note, NoteId, UNSAVED_ID};
use crate::model::now_millis;
use crate::repo::note_repo::NoteRepository;
use log::warn;
use tokio::sync::watch;

/// Immutable snapshot of the note editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDetailState {
    /// Loaded note, `None` when composing a new one.
    pub note: Option<Note>,
    pub is_loading: bool,
    pub is_saving: bool,
    pub title: String,
    pub content: String,
    pub error: Option<String>,
}

impl Default for NoteDetailState {
    fn default() -> Self {
        Self {
            note: None,
            is_loading: true,
            is_saving: false,
            title: String::new(),
            content: String::new(),
            error: None,
        }
    }
}

/// State holder for the note detail screen.
pub struct NoteDetailService<N: NoteRepository> {
    repo: N,
    state: watch::Sender<NoteDetailState>,
}

impl<N: NoteRepository> NoteDetailService<N> {
    pub fn new(repo: N) -> Self {
        Self {
            repo,
            state: watch::channel(NoteDetailState::default()).0,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<NoteDetailState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> NoteDetailState {
        self.state.borrow().clone()
    }

    /// Loads the note into the editor; `None` or the unsaved sentinel open a
    /// blank editor for a new note.
    pub fn load(&self, note_id: Option<NoteId>) {
        let Some(note_id) = note_id.filter(|id| *id != UNSAVED_ID) else {
            self.state.send_replace(NoteDetailState {
                is_loading: false,
                ..NoteDetailState::default()
            });
            return;
        };

        match self.repo.get_note(note_id) {
            Ok(note) => {
                let (title, content) = note
                    .as_ref()
                    .map(|n| (n.title.clone(), n.content.clone()))
                    .unwrap_or_default();
                self.state.send_replace(NoteDetailState {
                    note,
                    is_loading: false,
                    title,
                    content,
                    ..NoteDetailState::default()
                });
            }
            Err(err) => {
                warn!("event=note_load module=service status=error note_id={note_id} error={err}");
                self.state.send_replace(NoteDetailState {
                    is_loading: false,
                    error: Some(err.to_string()),
                    ..NoteDetailState::default()
                });
            }
        }
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.state.send_replace(NoteDetailState {
            title: title.into(),
            ..self.snapshot()
        });
    }

    pub fn set_content(&self, content: impl Into<String>) {
        self.state.send_replace(NoteDetailState {
            content: content.into(),
            ..self.snapshot()
        });
    }

    /// Saves the edited fields; returns the note id, or `None` when both
    /// fields were blank or persistence failed.
    pub async fn save(&self) -> Option<NoteId> {
        let state = self.snapshot();
        if state.title.trim().is_empty() && state.content.trim().is_empty() {
            return None;
        }

        self.state.send_replace(NoteDetailState {
            is_saving: true,
            ..state.clone()
        });

        let result = match &state.note {
            Some(existing) => {
                let edited = Note {
                    title: state.title.clone(),
                    content: state.content.clone(),
                    updated_at: now_millis(),
                    ..existing.clone()
                };
                self.repo.update_note(&edited).map(|()| edited.id)
            }
            None => self
                .repo
                .insert_note(&Note::new(state.title.clone(), state.content.clone())),
        };

        match result {
            Ok(id) => {
                self.state.send_replace(NoteDetailState {
                    is_saving: false,
                    ..self.snapshot()
                });
                Some(id)
            }
            Err(err) => {
                warn!("event=note_save module=service status=error error={err}");
                self.state.send_replace(NoteDetailState {
                    is_saving: false,
                    error: Some(err.to_string()),
                    ..self.snapshot()
                });
                None
            }
        }
    }
}
