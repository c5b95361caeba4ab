//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define data-access contracts for notes and flashcards.
//! - Isolate SQL details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`*NotFound`) in addition to DB
//!   transport errors.
//! - Every write is a single atomic engine-level statement; there is no
//!   caching and no cross-statement transaction.

use crate::db::DbError;
use crate::model::flashcard::FlashcardId;
use crate::model::note::NoteId;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub mod flashcard_repo;
pub mod note_repo;

/// Connection handle shared between repositories and async services.
///
/// SQLite connections are not `Sync`; the mutex serializes statement
/// execution. Holders must not await while the guard is live.
pub type SharedConnection = Arc<Mutex<Connection>>;

/// Wraps a bootstrapped connection for shared repository use.
pub fn share_connection(conn: Connection) -> SharedConnection {
    Arc::new(Mutex::new(conn))
}

pub(crate) fn lock(conn: &SharedConnection) -> MutexGuard<'_, Connection> {
    // A poisoned lock only means another thread panicked mid-statement;
    // the connection itself is still usable.
    conn.lock().unwrap_or_else(PoisonError::into_inner)
}

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NoteNotFound(NoteId),
    FlashcardNotFound(FlashcardId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::FlashcardNotFound(id) => write!(f, "flashcard not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NoteNotFound(_) | Self::FlashcardNotFound(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
