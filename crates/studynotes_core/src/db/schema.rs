//! Schema bootstrap and destructive version handling.
//!
//! # Responsibility
//! - Create the notes/flashcards schema on first open.
//! - Detect schema-version drift via `PRAGMA user_version`.
//!
//! # Invariants
//! - The applied schema version always equals [`SCHEMA_VERSION`] after a
//!   successful `ensure_schema`.
//! - A version mismatch destroys all existing data; there is no
//!   data-preserving migration path.

use crate::db::DbResult;
use log::{info, warn};
use rusqlite::Connection;

/// Schema version expected by this binary.
pub const SCHEMA_VERSION: u32 = 2;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Ensures the connection carries exactly the expected schema.
///
/// - Fresh database (`user_version == 0`, no tables): creates the schema.
/// - Matching version: no-op.
/// - Any other version: drops both tables and recreates them. Local data is
///   treated as expendable on version drift; there is no migration path.
pub fn ensure_schema(conn: &mut Connection) -> DbResult<()> {
    let current = current_user_version(conn)?;
    if current == SCHEMA_VERSION && has_table(conn, "notes")? {
        return Ok(());
    }

    if current != 0 || has_table(conn, "notes")? {
        warn!(
            "event=schema_rebuild module=db status=start found_version={} expected_version={}",
            current, SCHEMA_VERSION
        );
    }

    let tx = conn.transaction()?;
    tx.execute_batch(
        "DROP TABLE IF EXISTS flashcards;
         DROP TABLE IF EXISTS notes;",
    )?;
    tx.execute_batch(SCHEMA_SQL)?;
    tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    tx.commit()?;

    info!(
        "event=schema_ready module=db status=ok version={}",
        SCHEMA_VERSION
    );
    Ok(())
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

fn has_table(conn: &Connection, table: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
