//! Flashcards screen state holder.
//!
//! # Responsibility
//! - Drive "generate flashcards from a note, persist, review" flows.
//! - Expose the persisted flashcard list as an observable snapshot.
//!
//! # Invariants
//! - Generation against a deleted note surfaces `"Note not found"` without
//!   touching the inference client.
//! - Malformed model output degrades to zero inserted cards, not an error.
//! - Card navigation clamps to the list bounds and hides the answer.

use crate::inference::InferenceClient;
use crate::model::flashcard::{Flashcard, FlashcardId};
use crate::model::note::NoteId;
use crate::repo::flashcard_repo::FlashcardRepository;
use crate::repo::note_repo::NoteRepository;
use log::{info, warn};
use tokio::sync::watch;

const ERR_NOTE_NOT_FOUND: &str = "Note not found";

/// Immutable snapshot of the flashcards screen (review position + status).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashcardsState {
    pub is_generating: bool,
    pub current_card: usize,
    pub show_answer: bool,
    pub error: Option<String>,
}

/// State holder for the flashcards screen.
pub struct FlashcardsService<F, N, I>
where
    F: FlashcardRepository,
    N: NoteRepository,
    I: InferenceClient,
{
    flashcards: F,
    notes: N,
    inference: I,
    state: watch::Sender<FlashcardsState>,
    cards: watch::Sender<Vec<Flashcard>>,
}

impl<F, N, I> FlashcardsService<F, N, I>
where
    F: FlashcardRepository,
    N: NoteRepository,
    I: InferenceClient,
{
    pub fn new(flashcards: F, notes: N, inference: I) -> Self {
        let service = Self {
            flashcards,
            notes,
            inference,
            state: watch::channel(FlashcardsState::default()).0,
            cards: watch::channel(Vec::new()).0,
        };
        service.refresh_cards();
        service
    }

    pub fn subscribe(&self) -> watch::Receiver<FlashcardsState> {
        self.state.subscribe()
    }

    /// Observes the persisted flashcard list, newest first.
    pub fn subscribe_cards(&self) -> watch::Receiver<Vec<Flashcard>> {
        self.cards.subscribe()
    }

    pub fn snapshot(&self) -> FlashcardsState {
        self.state.borrow().clone()
    }

    pub fn cards_snapshot(&self) -> Vec<Flashcard> {
        self.cards.borrow().clone()
    }

    /// Generates flashcards for one note and persists the results.
    pub async fn generate_for_note(&self, note_id: NoteId) {
        self.state.send_replace(FlashcardsState {
            is_generating: true,
            error: None,
            ..self.snapshot()
        });

        let note = match self.notes.get_note(note_id) {
            Ok(Some(note)) => note,
            Ok(None) => {
                self.finish_generate(Some(ERR_NOTE_NOT_FOUND.to_string()));
                return;
            }
            Err(err) => {
                warn!("event=flashcard_generate module=service status=error error={err}");
                self.finish_generate(Some(err.to_string()));
                return;
            }
        };

        let drafts = match self.inference.generate_flashcards(&note.content).await {
            Ok(drafts) => drafts,
            Err(err) => {
                warn!("event=flashcard_generate module=service status=error error={err}");
                self.finish_generate(Some(err.to_string()));
                return;
            }
        };

        let cards: Vec<Flashcard> = drafts
            .into_iter()
            .map(|draft| Flashcard::new(note_id, draft.question, draft.answer))
            .collect();

        if let Err(err) = self.flashcards.insert_flashcards(&cards) {
            warn!("event=flashcard_generate module=service status=error error={err}");
            self.finish_generate(Some(err.to_string()));
            return;
        }

        info!(
            "event=flashcard_generate module=service status=ok note_id={} cards={}",
            note_id,
            cards.len()
        );
        self.finish_generate(None);
        self.refresh_cards();
    }

    fn finish_generate(&self, error: Option<String>) {
        self.state.send_replace(FlashcardsState {
            is_generating: false,
            error,
            ..self.snapshot()
        });
    }

    /// Advances to the next card, hiding the answer.
    pub fn next_card(&self) {
        let state = self.snapshot();
        let total = self.cards.borrow().len();
        if state.current_card + 1 < total {
            self.state.send_replace(FlashcardsState {
                current_card: state.current_card + 1,
                show_answer: false,
                ..state
            });
        }
    }

    /// Steps back to the previous card, hiding the answer.
    pub fn previous_card(&self) {
        let state = self.snapshot();
        if state.current_card > 0 {
            self.state.send_replace(FlashcardsState {
                current_card: state.current_card - 1,
                show_answer: false,
                ..state
            });
        }
    }

    pub fn toggle_answer(&self) {
        let state = self.snapshot();
        self.state.send_replace(FlashcardsState {
            show_answer: !state.show_answer,
            ..state
        });
    }

    /// Returns the review position to the first card.
    pub fn reset_cards(&self) {
        self.state.send_replace(FlashcardsState {
            current_card: 0,
            show_answer: false,
            ..self.snapshot()
        });
    }

    /// Deletes one flashcard and refreshes the observable list.
    pub fn delete_flashcard(&self, id: FlashcardId) {
        if let Err(err) = self.flashcards.delete_flashcard(id) {
            warn!("event=flashcard_delete module=service status=error error={err}");
            return;
        }
        self.refresh_cards();
    }

    fn refresh_cards(&self) {
        match self.flashcards.list_flashcards() {
            Ok(cards) => {
                self.cards.send_replace(cards);
            }
            Err(err) => {
                warn!("event=flashcard_list module=service status=error error={err}");
            }
        }
    }
}
