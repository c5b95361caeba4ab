use studynotes_core::db::open_db_in_memory;
use studynotes_core::{
    share_connection, Flashcard, FlashcardRepository, Note, NoteRepository, NotesListService,
    SqliteFlashcardRepository, SqliteNoteRepository,
};

fn service() -> (
    NotesListService<SqliteNoteRepository>,
    SqliteNoteRepository,
    SqliteFlashcardRepository,
) {
    let conn = share_connection(open_db_in_memory().unwrap());
    let notes = SqliteNoteRepository::new(conn.clone());
    let cards = SqliteFlashcardRepository::new(conn);
    (NotesListService::new(notes.clone()), notes, cards)
}

#[test]
fn publishes_existing_notes_on_construction() {
    let conn = share_connection(open_db_in_memory().unwrap());
    let repo = SqliteNoteRepository::new(conn);
    repo.insert_note(&Note::new("Pre-existing", "content")).unwrap();

    let service = NotesListService::new(repo);
    assert_eq!(service.notes_snapshot().len(), 1);
}

#[test]
fn refresh_picks_up_out_of_band_inserts() {
    let (service, repo, _cards) = service();
    assert!(service.notes_snapshot().is_empty());

    repo.insert_note(&Note::new("New", "content")).unwrap();
    service.refresh();

    let receiver = service.subscribe();
    assert_eq!(receiver.borrow().len(), 1);
}

#[test]
fn search_query_filters_the_published_list() {
    let (service, repo, _cards) = service();
    repo.insert_note(&Note::new("Biology Notes", "Cells")).unwrap();
    repo.insert_note(&Note::new("Math Notes", "Algebra")).unwrap();
    repo.insert_note(&Note::new("History", "Empires")).unwrap();

    service.set_search_query("notes");
    assert_eq!(service.notes_snapshot().len(), 2);

    service.set_search_query("");
    assert_eq!(service.notes_snapshot().len(), 3);
}

#[test]
fn delete_note_removes_it_and_its_flashcards() {
    let (service, repo, cards) = service();
    let note_id = repo.insert_note(&Note::new("Doomed", "content")).unwrap();
    cards.insert_flashcard(&Flashcard::new(note_id, "Q", "A")).unwrap();
    service.refresh();
    assert_eq!(service.notes_snapshot().len(), 1);

    service.delete_note(note_id);

    assert!(service.notes_snapshot().is_empty());
    assert!(cards.list_flashcards().unwrap().is_empty());
}

#[test]
fn delete_of_missing_note_keeps_last_snapshot() {
    let (service, repo, _cards) = service();
    repo.insert_note(&Note::new("Stays", "content")).unwrap();
    service.refresh();

    service.delete_note(999);

    assert_eq!(service.notes_snapshot().len(), 1);
}
