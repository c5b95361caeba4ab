//! Flashcard domain model.
//!
//! # Invariants
//! - A flashcard's `note_id` must reference an existing note at insert time;
//!   storage enforces this with a cascading foreign key.

use super::now_millis;
use crate::model::note::NoteId;
use serde::{Deserialize, Serialize};

/// Stable identifier for a persisted flashcard (SQLite rowid).
pub type FlashcardId = i64;

/// Persisted question/answer pair derived from a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Storage-assigned id; zero until first insert.
    pub id: FlashcardId,
    /// Owning note; deleted together with it.
    pub note_id: NoteId,
    pub question: String,
    pub answer: String,
    /// Creation timestamp in epoch milliseconds.
    pub created_at: i64,
}

impl Flashcard {
    /// Creates an unsaved flashcard for the given note.
    pub fn new(note_id: NoteId, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: 0,
            note_id,
            question: question.into(),
            answer: answer.into(),
            created_at: now_millis(),
        }
    }
}
