//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and search APIs over the `notes` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Lists and search results are always sorted by `updated_at DESC, id DESC`.
//! - `update_note` never moves `updated_at` backwards.
//! - Search matches title OR content, case-insensitively, with LIKE
//!   wildcards in the query treated as literal characters.

use crate::model::note::{Note, NoteId, UNSAVED_ID};
use crate::repo::{lock, RepoError, RepoResult, SharedConnection};
use rusqlite::{params, Row};

const NOTE_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    summary,
    created_at,
    updated_at
FROM notes";

/// Repository interface for note CRUD and search operations.
pub trait NoteRepository: Send + Sync {
    /// Inserts a note, or replaces an existing row when `note.id` is set.
    /// Returns the storage-assigned id.
    fn insert_note(&self, note: &Note) -> RepoResult<NoteId>;
    /// Replaces all fields of an existing note.
    fn update_note(&self, note: &Note) -> RepoResult<()>;
    /// Point-in-time read of one note by id.
    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>>;
    /// All notes, most recently updated first.
    fn list_notes(&self) -> RepoResult<Vec<Note>>;
    /// Case-insensitive substring search across title and content.
    fn search_notes(&self, query: &str) -> RepoResult<Vec<Note>>;
    /// Deletes one note by id; flashcards cascade with it.
    fn delete_note(&self, id: NoteId) -> RepoResult<()>;
}

/// SQLite-backed note repository.
#[derive(Clone)]
pub struct SqliteNoteRepository {
    conn: SharedConnection,
}

impl SqliteNoteRepository {
    /// Constructs a repository from a bootstrapped shared connection.
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

impl NoteRepository for SqliteNoteRepository {
    fn insert_note(&self, note: &Note) -> RepoResult<NoteId> {
        let conn = lock(&self.conn);
        if note.id == UNSAVED_ID {
            conn.execute(
                "INSERT INTO notes (title, content, summary, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5);",
                params![
                    note.title,
                    note.content,
                    note.summary,
                    note.created_at,
                    note.updated_at,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        } else {
            conn.execute(
                "INSERT OR REPLACE INTO notes (id, title, content, summary, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
                params![
                    note.id,
                    note.title,
                    note.content,
                    note.summary,
                    note.created_at,
                    note.updated_at,
                ],
            )?;
            Ok(note.id)
        }
    }

    fn update_note(&self, note: &Note) -> RepoResult<()> {
        // MAX keeps updated_at monotonically non-decreasing even when the
        // caller's clock lags the stored value.
        let changed = lock(&self.conn).execute(
            "UPDATE notes
             SET
                title = ?1,
                content = ?2,
                summary = ?3,
                updated_at = MAX(?4, updated_at)
             WHERE id = ?5;",
            params![
                note.title,
                note.content,
                note.summary,
                note.updated_at,
                note.id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NoteNotFound(note.id));
        }
        Ok(())
    }

    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>> {
        let conn = lock(&self.conn);
        let mut stmt = conn.prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_note_row(row)?));
        }
        Ok(None)
    }

    fn list_notes(&self) -> RepoResult<Vec<Note>> {
        let conn = lock(&self.conn);
        let mut stmt =
            conn.prepare(&format!("{NOTE_SELECT_SQL} ORDER BY updated_at DESC, id DESC;"))?;
        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }
        Ok(notes)
    }

    fn search_notes(&self, query: &str) -> RepoResult<Vec<Note>> {
        let pattern = format!("%{}%", escape_like(query));
        let conn = lock(&self.conn);
        let mut stmt = conn.prepare(&format!(
            "{NOTE_SELECT_SQL}
             WHERE title LIKE ?1 ESCAPE '\\'
                OR content LIKE ?1 ESCAPE '\\'
             ORDER BY updated_at DESC, id DESC;"
        ))?;
        let mut rows = stmt.query([pattern])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }
        Ok(notes)
    }

    fn delete_note(&self, id: NoteId) -> RepoResult<()> {
        let changed = lock(&self.conn).execute("DELETE FROM notes WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NoteNotFound(id));
        }
        Ok(())
    }
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    Ok(Note {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        summary: row.get("summary")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

/// Escapes LIKE wildcards so user queries match them literally.
fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
