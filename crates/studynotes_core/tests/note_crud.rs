use studynotes_core::db::open_db_in_memory;
use studynotes_core::{
    share_connection, Note, NoteRepository, RepoError, SqliteNoteRepository, UNSAVED_ID,
};

fn note_repo() -> SqliteNoteRepository {
    let conn = open_db_in_memory().unwrap();
    SqliteNoteRepository::new(share_connection(conn))
}

#[test]
fn insert_and_get_round_trips_all_fields() {
    let repo = note_repo();
    let note = Note::new("Biology", "Cells and DNA").with_summary("Cell basics");

    let id = repo.insert_note(&note).unwrap();
    assert_ne!(id, UNSAVED_ID);

    let fetched = repo.get_note(id).unwrap().expect("note should exist");
    assert_eq!(fetched.id, id);
    assert_eq!(fetched.title, "Biology");
    assert_eq!(fetched.content, "Cells and DNA");
    assert_eq!(fetched.summary.as_deref(), Some("Cell basics"));
    assert_eq!(fetched.created_at, note.created_at);
    assert_eq!(fetched.updated_at, note.updated_at);
}

#[test]
fn get_returns_none_for_unknown_id() {
    let repo = note_repo();
    assert!(repo.get_note(999).unwrap().is_none());
}

#[test]
fn list_notes_is_ordered_by_updated_at_descending() {
    let repo = note_repo();

    let mut old = Note::new("Old Note", "old");
    old.updated_at = 1_000;
    let mut new = Note::new("New Note", "new");
    new.updated_at = 2_000;

    repo.insert_note(&old).unwrap();
    repo.insert_note(&new).unwrap();

    let listed = repo.list_notes().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].title, "New Note");
    assert_eq!(listed[1].title, "Old Note");
}

#[test]
fn insert_with_existing_id_replaces_the_row() {
    let repo = note_repo();
    let id = repo.insert_note(&Note::new("Original", "before")).unwrap();

    let mut replacement = Note::new("Replaced", "after");
    replacement.id = id;
    let returned = repo.insert_note(&replacement).unwrap();
    assert_eq!(returned, id);

    let listed = repo.list_notes().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Replaced");
    assert_eq!(listed[0].content, "after");
}

#[test]
fn update_note_replaces_fields() {
    let repo = note_repo();
    let id = repo.insert_note(&Note::new("Original", "Original Content")).unwrap();

    let mut edited = repo.get_note(id).unwrap().unwrap();
    edited.title = "Updated".to_string();
    edited.content = "Updated Content".to_string();
    edited.summary = Some("sum".to_string());
    edited.updated_at += 10;
    repo.update_note(&edited).unwrap();

    let fetched = repo.get_note(id).unwrap().unwrap();
    assert_eq!(fetched.title, "Updated");
    assert_eq!(fetched.content, "Updated Content");
    assert_eq!(fetched.summary.as_deref(), Some("sum"));
    assert_eq!(fetched.updated_at, edited.updated_at);
}

#[test]
fn update_never_moves_updated_at_backwards() {
    let repo = note_repo();
    let mut note = Note::new("Clock", "drift");
    note.updated_at = 5_000;
    let id = repo.insert_note(&note).unwrap();

    let mut stale = repo.get_note(id).unwrap().unwrap();
    stale.content = "stale clock edit".to_string();
    stale.updated_at = 1_000;
    repo.update_note(&stale).unwrap();

    let fetched = repo.get_note(id).unwrap().unwrap();
    assert_eq!(fetched.content, "stale clock edit");
    assert_eq!(fetched.updated_at, 5_000);

    let mut fresh = fetched;
    fresh.updated_at = 6_000;
    repo.update_note(&fresh).unwrap();
    assert_eq!(repo.get_note(id).unwrap().unwrap().updated_at, 6_000);
}

#[test]
fn update_missing_note_reports_not_found() {
    let repo = note_repo();
    let mut ghost = Note::new("Ghost", "gone");
    ghost.id = 42;
    let err = repo.update_note(&ghost).unwrap_err();
    assert!(matches!(err, RepoError::NoteNotFound(42)));
}

#[test]
fn delete_note_removes_the_row() {
    let repo = note_repo();
    let id = repo.insert_note(&Note::new("To Delete", "bye")).unwrap();

    repo.delete_note(id).unwrap();
    assert!(repo.get_note(id).unwrap().is_none());

    let err = repo.delete_note(id).unwrap_err();
    assert!(matches!(err, RepoError::NoteNotFound(_)));
}
