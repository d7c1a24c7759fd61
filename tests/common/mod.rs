//! Shared fixtures for integration tests.
//!
//! Provides a small English lexicon, document builders, and sink doubles:
//! [`keyword_sieve::MemorySink`] covers the happy path, [`FlakySink`] fails
//! its first submission to exercise failure isolation.

use keyword_sieve::error::SinkError;
use keyword_sieve::{Document, Lexicon, PublishSink, Zone};
use rstest::fixture;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// A lexicon with English allowed, heading/body zone weights, basic
/// punctuation denied, a handful of stopwords, and the "deals" lemma used
/// by the scoring scenarios.
#[fixture]
pub fn lexicon() -> Lexicon {
    keyword_sieve::tracing::init();

    Lexicon::from_parts(
        vec!["en".into()],
        HashMap::from([("h1".into(), 3.0), ("p".into(), 1.0)]),
        vec![",".into(), ".".into(), "!".into(), "?".into(), "\"".into()],
        vec!["the".into(), "a".into(), "of".into(), "and".into(), "is".into()],
        HashMap::from([("deals".into(), "deal".into())]),
        HashMap::new(),
    )
    .expect("fixture lexicon must be valid")
}

/// The worked scoring scenario: a weighted heading plus a body that pushes
/// "deal" to raw relevance 16.0 across 7 surviving tokens.
pub fn deals_document(url: &str) -> Document {
    Document {
        url: url.into(),
        title: Some("Great Deals".into()),
        language: Some("en".into()),
        zones: vec![
            Zone::new(3.0, "Great Deals"),
            Zone::new(1.0, "deal deal deal deal deal"),
        ],
    }
}

/// A document whose every word is rejected during normalization.
pub fn stopword_document(url: &str) -> Document {
    Document {
        url: url.into(),
        title: None,
        language: Some("en".into()),
        zones: vec![Zone::new(1.0, "the of and is a")],
    }
}

/// Sink that refuses the first submission and accepts the rest.
#[derive(Debug, Default)]
pub struct FlakySink {
    failed_once: AtomicBool,
    messages: Mutex<Vec<Vec<u8>>>,
}

impl FlakySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delivered(&self) -> usize {
        self.messages.lock().expect("sink lock poisoned").len()
    }
}

impl PublishSink for FlakySink {
    fn publish(
        &self,
        destination: &str,
        body: &[u8],
    ) -> impl Future<Output = Result<(), SinkError>> + Send {
        let result = if self.failed_once.swap(true, Ordering::SeqCst) {
            self.messages
                .lock()
                .expect("sink lock poisoned")
                .push(body.to_vec());
            Ok(())
        } else {
            Err(SinkError::new(destination, "connection refused"))
        };
        async move { result }
    }
}
