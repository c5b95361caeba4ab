use studynotes_core::db::open_db_in_memory;
use studynotes_core::{share_connection, Note, NoteRepository, SqliteNoteRepository};

fn note_repo() -> SqliteNoteRepository {
    let conn = open_db_in_memory().unwrap();
    SqliteNoteRepository::new(share_connection(conn))
}

#[test]
fn search_matches_title_or_content() {
    let repo = note_repo();
    repo.insert_note(&Note::new("Biology Notes", "Cells and DNA")).unwrap();
    repo.insert_note(&Note::new("Math", "Algebra and calculus")).unwrap();
    repo.insert_note(&Note::new("History", "Biology of empires")).unwrap();

    let hits = repo.search_notes("biology").unwrap();
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().any(|n| n.title == "Biology Notes"));
    assert!(hits.iter().any(|n| n.title == "History"));
}

#[test]
fn search_is_case_insensitive() {
    let repo = note_repo();
    repo.insert_note(&Note::new("PHYSICS", "Mechanics")).unwrap();
    repo.insert_note(&Note::new("physics basics", "Forces")).unwrap();
    repo.insert_note(&Note::new("Chemistry", "Overlaps with physics")).unwrap();

    assert_eq!(repo.search_notes("Physics").unwrap().len(), 3);
    assert_eq!(repo.search_notes("PHYSICS").unwrap().len(), 3);
}

#[test]
fn search_results_are_recency_ordered() {
    let repo = note_repo();
    let mut old = Note::new("match old", "x");
    old.updated_at = 1_000;
    let mut new = Note::new("match new", "x");
    new.updated_at = 2_000;
    repo.insert_note(&old).unwrap();
    repo.insert_note(&new).unwrap();

    let hits = repo.search_notes("match").unwrap();
    assert_eq!(hits[0].title, "match new");
    assert_eq!(hits[1].title, "match old");
}

#[test]
fn like_wildcards_in_query_are_literal() {
    let repo = note_repo();
    repo.insert_note(&Note::new("Stats", "coverage is 50% done")).unwrap();
    repo.insert_note(&Note::new("Stats 2", "coverage is 50x done")).unwrap();
    repo.insert_note(&Note::new("snake_case", "naming styles")).unwrap();
    repo.insert_note(&Note::new("snakeXcase", "naming styles")).unwrap();

    let percent = repo.search_notes("50%").unwrap();
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].title, "Stats");

    let underscore = repo.search_notes("snake_").unwrap();
    assert_eq!(underscore.len(), 1);
    assert_eq!(underscore[0].title, "snake_case");
}

#[test]
fn search_with_no_match_returns_empty() {
    let repo = note_repo();
    repo.insert_note(&Note::new("Only", "note")).unwrap();
    assert!(repo.search_notes("absent").unwrap().is_empty());
}
