//! Per-screen state holders.
//!
//! # Responsibility
//! - Sequence "call inference, then persist result" operations.
//! - Expose observable state snapshots for the host UI.
//!
//! # Invariants
//! - State is an immutable snapshot replaced wholesale on each transition,
//!   published through a `tokio::sync::watch` channel; late subscribers see
//!   only the latest value.
//! - Every failure is converted to a displayable string here; nothing is
//!   fatal and nothing is retried.
//! - Concurrent re-triggering of an operation is not guarded; racing calls
//!   resolve last-write-wins on the shared snapshot.

pub mod flashcards;
pub mod note_detail;
pub mod notes;
pub mod qa;
pub mod summarize;

pub use flashcards::{FlashcardsService, FlashcardsState};
pub use note_detail::{NoteDetailService, NoteDetailState};
pub use notes::NotesListService;
pub use qa::{ChatMessage, QaService, QaState};
pub use summarize::{SummarizeService, SummarizeState};
