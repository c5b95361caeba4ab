//! Core domain logic for StudyNotes.
//! This crate is the single source of truth for business invariants:
//! persistence, inference, and per-screen state orchestration live here;
//! the host UI layer only renders snapshots and forwards user actions.

pub mod db;
pub mod inference;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbError, DbResult, SCHEMA_VERSION};
pub use inference::{
    extract_flashcards, FlashcardDraft, InferenceClient, InferenceError, InferenceResult,
    OllamaClient,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::flashcard::{Flashcard, FlashcardId};
pub use model::note::{derive_title, Note, NoteId, UNSAVED_ID};
pub use repo::flashcard_repo::{FlashcardRepository, SqliteFlashcardRepository};
pub use repo::note_repo::{NoteRepository, SqliteNoteRepository};
pub use repo::{share_connection, RepoError, RepoResult, SharedConnection};
pub use service::{
    ChatMessage, FlashcardsService, FlashcardsState, NoteDetailService, NoteDetailState,
    NotesListService, QaService, QaState, SummarizeService, SummarizeState,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
