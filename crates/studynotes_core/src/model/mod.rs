//! Domain model for notes and flashcards.
//!
//! # Responsibility
//! - Define the persisted record shapes used by core business logic.
//! - Own small derivation helpers (timestamps, display titles).
//!
//! # Invariants
//! - Every persisted record is identified by a SQLite rowid (`i64`).
//! - A flashcard never exists without its owning note.

pub mod flashcard;
pub mod note;

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in epoch milliseconds.
///
/// Clamps to zero if the system clock reports a pre-epoch time.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
