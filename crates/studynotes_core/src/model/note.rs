//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note record.
//! - Derive a display title when the user left the title blank.
//!
//! # Invariants
//! - `id == UNSAVED_ID` means the note has not been persisted yet; storage
//!   assigns the real id on insert.
//! - `updated_at` never moves backwards across edits.

use super::now_millis;
use serde::{Deserialize, Serialize};

/// Stable identifier for a persisted note (SQLite rowid).
pub type NoteId = i64;

/// Sentinel id for notes that have not been inserted yet.
pub const UNSAVED_ID: NoteId = 0;

/// Maximum characters of content used for a derived display title.
const DERIVED_TITLE_MAX_CHARS: usize = 50;

/// Persisted note record, the primary unit of user data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Storage-assigned id; `UNSAVED_ID` until first insert.
    pub id: NoteId,
    /// User-facing title, possibly derived from content at save time.
    pub title: String,
    /// Full note body.
    pub content: String,
    /// Model-generated summary, absent until the user produced one.
    pub summary: Option<String>,
    /// Creation timestamp in epoch milliseconds.
    pub created_at: i64,
    /// Last-edit timestamp in epoch milliseconds.
    pub updated_at: i64,
}

impl Note {
    /// Creates an unsaved note with both timestamps set to now.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = now_millis();
        Self {
            id: UNSAVED_ID,
            title: title.into(),
            content: content.into(),
            summary: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attaches a summary, mapping blank input to `None`.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        let summary = summary.into();
        self.summary = if summary.trim().is_empty() {
            None
        } else {
            Some(summary)
        };
        self
    }

    /// Returns whether this note has been persisted.
    pub fn is_saved(&self) -> bool {
        self.id != UNSAVED_ID
    }
}

/// Derives the effective display title for a save operation.
///
/// Rules:
/// - A non-blank `title` is used as-is.
/// - Otherwise the first 50 characters of `content` are used, with `"..."`
///   appended when content is longer than 50 characters.
pub fn derive_title(title: &str, content: &str) -> String {
    if !title.trim().is_empty() {
        return title.to_string();
    }

    let truncated: String = content.chars().take(DERIVED_TITLE_MAX_CHARS).collect();
    if content.chars().count() > DERIVED_TITLE_MAX_CHARS {
        format!("{truncated}...")
    } else {
        truncated
    }
}
