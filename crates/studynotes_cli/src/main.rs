//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `studynotes_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use studynotes_core::{
    open_db_in_memory, share_connection, Note, NoteRepository, SqliteNoteRepository,
};

fn main() {
    println!("studynotes_core version={}", studynotes_core::core_version());

    // In-memory round-trip to validate schema bootstrap and the note store
    // without touching the filesystem or the inference endpoint.
    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("db open failed: {err}");
            std::process::exit(1);
        }
    };

    let repo = SqliteNoteRepository::new(share_connection(conn));
    let outcome = repo
        .insert_note(&Note::new("smoke", "smoke note body"))
        .and_then(|id| repo.get_note(id));

    match outcome {
        Ok(Some(note)) => println!("note round-trip ok id={} title={}", note.id, note.title),
        Ok(None) => {
            eprintln!("note round-trip failed: inserted note not found");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("note round-trip failed: {err}");
            std::process::exit(1);
        }
    }
}
