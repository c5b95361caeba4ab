//! Notes list screen state holder.
//!
//! # Responsibility
//! - Expose the note list (or search results) as an observable snapshot.
//!
//! # Invariants
//! - The published list is always recency-ordered by the repository.
//! - An empty search query shows the full list.
//! - Repository failures are logged and leave the last snapshot in place.

use crate::model::note::{Note, NoteId};
use crate::repo::note_repo::NoteRepository;
use log::warn;
use tokio::sync::watch;

/// State holder for the notes list screen.
pub struct NotesListService<N: NoteRepository> {
    repo: N,
    query: watch::Sender<String>,
    notes: watch::Sender<Vec<Note>>,
}

impl<N: NoteRepository> NotesListService<N> {
    pub fn new(repo: N) -> Self {
        let service = Self {
            repo,
            query: watch::channel(String::new()).0,
            notes: watch::channel(Vec::new()).0,
        };
        service.refresh();
        service
    }

    /// Observes the visible note list; the receiver holds the latest value.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Note>> {
        self.notes.subscribe()
    }

    pub fn notes_snapshot(&self) -> Vec<Note> {
        self.notes.borrow().clone()
    }

    pub fn search_query(&self) -> String {
        self.query.borrow().clone()
    }

    /// Updates the search query and republishes the matching notes.
    pub fn set_search_query(&self, query: impl Into<String>) {
        self.query.send_replace(query.into());
        self.refresh();
    }

    /// Deletes a note (its flashcards cascade) and republishes the list.
    pub fn delete_note(&self, id: NoteId) {
        if let Err(err) = self.repo.delete_note(id) {
            warn!("event=note_delete module=service status=error note_id={id} error={err}");
            return;
        }
        self.refresh();
    }

    /// Re-reads the list from storage using the current query.
    pub fn refresh(&self) {
        let query = self.search_query();
        let result = if query.is_empty() {
            self.repo.list_notes()
        } else {
            self.repo.search_notes(&query)
        };

        match result {
            Ok(notes) => {
                self.notes.send_replace(notes);
            }
            Err(err) => {
                warn!("event=note_list module=service status=error error={err}");
            }
        }
    }
}
