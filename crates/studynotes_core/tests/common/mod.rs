//! Shared test doubles for service-level tests.
#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use studynotes_core::{FlashcardDraft, InferenceClient, InferenceError, InferenceResult};

#[derive(Default)]
struct FakeInner {
    summarize_response: Mutex<String>,
    answer_response: Mutex<String>,
    flashcards_response: Mutex<Vec<FlashcardDraft>>,
    error_message: Mutex<String>,
    should_fail: AtomicBool,
    summarize_calls: AtomicUsize,
    flashcards_calls: AtomicUsize,
    answer_calls: AtomicUsize,
    last_summarize_input: Mutex<Option<String>>,
}

/// Scripted in-memory inference client.
///
/// Clones share state, so tests keep one handle for assertions after moving
/// another into the service under test.
#[derive(Clone, Default)]
pub struct FakeInferenceClient {
    inner: Arc<FakeInner>,
}

impl FakeInferenceClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_summarize_response(&self, response: impl Into<String>) {
        *self.inner.summarize_response.lock().unwrap() = response.into();
    }

    pub fn set_answer_response(&self, response: impl Into<String>) {
        *self.inner.answer_response.lock().unwrap() = response.into();
    }

    pub fn set_flashcards_response(&self, drafts: Vec<FlashcardDraft>) {
        *self.inner.flashcards_response.lock().unwrap() = drafts;
    }

    /// Makes every subsequent call fail with the given message.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.inner.error_message.lock().unwrap() = message.into();
        self.inner.should_fail.store(true, Ordering::SeqCst);
    }

    pub fn summarize_calls(&self) -> usize {
        self.inner.summarize_calls.load(Ordering::SeqCst)
    }

    pub fn flashcards_calls(&self) -> usize {
        self.inner.flashcards_calls.load(Ordering::SeqCst)
    }

    pub fn answer_calls(&self) -> usize {
        self.inner.answer_calls.load(Ordering::SeqCst)
    }

    pub fn last_summarize_input(&self) -> Option<String> {
        self.inner.last_summarize_input.lock().unwrap().clone()
    }

    fn check_failure(&self) -> InferenceResult<()> {
        if self.inner.should_fail.load(Ordering::SeqCst) {
            return Err(InferenceError::Unavailable(
                self.inner.error_message.lock().unwrap().clone(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl InferenceClient for FakeInferenceClient {
    async fn summarize(&self, note_content: &str) -> InferenceResult<String> {
        self.inner.summarize_calls.fetch_add(1, Ordering::SeqCst);
        *self.inner.last_summarize_input.lock().unwrap() = Some(note_content.to_string());
        self.check_failure()?;
        Ok(self.inner.summarize_response.lock().unwrap().clone())
    }

    async fn answer_question(
        &self,
        _note_content: &str,
        _question: &str,
    ) -> InferenceResult<String> {
        self.inner.answer_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self.inner.answer_response.lock().unwrap().clone())
    }

    async fn generate_flashcards(
        &self,
        _note_content: &str,
    ) -> InferenceResult<Vec<FlashcardDraft>> {
        self.inner.flashcards_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self.inner.flashcards_response.lock().unwrap().clone())
    }
}
