//! Flashcard repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `flashcards` table.
//!
//! # Invariants
//! - Inserts require an existing owning note (FK enforced).
//! - Lists are sorted by `created_at DESC, id DESC`.

use crate::model::flashcard::{Flashcard, FlashcardId};
use crate::model::note::NoteId;
use crate::repo::{lock, RepoError, RepoResult, SharedConnection};
use rusqlite::{params, Row};

const FLASHCARD_SELECT_SQL: &str = "SELECT
    id,
    note_id,
    question,
    answer,
    created_at
FROM flashcards";

/// Repository interface for flashcard CRUD operations.
pub trait FlashcardRepository: Send + Sync {
    /// Inserts one flashcard and returns the storage-assigned id.
    fn insert_flashcard(&self, flashcard: &Flashcard) -> RepoResult<FlashcardId>;
    /// Inserts a batch of flashcards (one statement each, no batch atomicity).
    fn insert_flashcards(&self, flashcards: &[Flashcard]) -> RepoResult<()>;
    /// Flashcards owned by one note, newest first.
    fn flashcards_for_note(&self, note_id: NoteId) -> RepoResult<Vec<Flashcard>>;
    /// All flashcards, newest first.
    fn list_flashcards(&self) -> RepoResult<Vec<Flashcard>>;
    /// Deletes one flashcard by id.
    fn delete_flashcard(&self, id: FlashcardId) -> RepoResult<()>;
    /// Deletes every flashcard owned by the given note.
    fn delete_flashcards_for_note(&self, note_id: NoteId) -> RepoResult<()>;
}

/// SQLite-backed flashcard repository.
#[derive(Clone)]
pub struct SqliteFlashcardRepository {
    conn: SharedConnection,
}

impl SqliteFlashcardRepository {
    /// Constructs a repository from a bootstrapped shared connection.
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

impl FlashcardRepository for SqliteFlashcardRepository {
    fn insert_flashcard(&self, flashcard: &Flashcard) -> RepoResult<FlashcardId> {
        let conn = lock(&self.conn);
        conn.execute(
            "INSERT INTO flashcards (note_id, question, answer, created_at)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                flashcard.note_id,
                flashcard.question,
                flashcard.answer,
                flashcard.created_at,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn insert_flashcards(&self, flashcards: &[Flashcard]) -> RepoResult<()> {
        for flashcard in flashcards {
            self.insert_flashcard(flashcard)?;
        }
        Ok(())
    }

    fn flashcards_for_note(&self, note_id: NoteId) -> RepoResult<Vec<Flashcard>> {
        let conn = lock(&self.conn);
        let mut stmt = conn.prepare(&format!(
            "{FLASHCARD_SELECT_SQL}
             WHERE note_id = ?1
             ORDER BY created_at DESC, id DESC;"
        ))?;
        let mut rows = stmt.query([note_id])?;
        let mut cards = Vec::new();
        while let Some(row) = rows.next()? {
            cards.push(parse_flashcard_row(row)?);
        }
        Ok(cards)
    }

    fn list_flashcards(&self) -> RepoResult<Vec<Flashcard>> {
        let conn = lock(&self.conn);
        let mut stmt = conn.prepare(&format!(
            "{FLASHCARD_SELECT_SQL} ORDER BY created_at DESC, id DESC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut cards = Vec::new();
        while let Some(row) = rows.next()? {
            cards.push(parse_flashcard_row(row)?);
        }
        Ok(cards)
    }

    fn delete_flashcard(&self, id: FlashcardId) -> RepoResult<()> {
        let changed = lock(&self.conn).execute("DELETE FROM flashcards WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::FlashcardNotFound(id));
        }
        Ok(())
    }

    fn delete_flashcards_for_note(&self, note_id: NoteId) -> RepoResult<()> {
        lock(&self.conn).execute("DELETE FROM flashcards WHERE note_id = ?1;", [note_id])?;
        Ok(())
    }
}

fn parse_flashcard_row(row: &Row<'_>) -> RepoResult<Flashcard> {
    Ok(Flashcard {
        id: row.get("id")?,
        note_id: row.get("note_id")?,
        question: row.get("question")?,
        answer: row.get("answer")?,
        created_at: row.get("created_at")?,
    })
}
