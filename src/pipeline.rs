//! Per-document orchestration.
//!
//! One invocation per fetched document, strictly forward: normalize →
//! score (language-gated) → compress → penalize → publish. No state is
//! shared between documents, so callers may process any number of
//! documents concurrently against the same pipeline.

use crate::error::SinkError;
use crate::lexicon::Lexicon;
use crate::publish::{PublishSink, Publisher, most_relevant};
use crate::score::{self, UrlPenalty};
use crate::types::{Document, DropReason, Outcome, OutputRecord};
use std::sync::Arc;

/// The content-scoring pipeline: an immutable lexicon plus a publisher.
#[derive(Debug)]
pub struct Pipeline<S> {
    lexicon: Arc<Lexicon>,
    publisher: Publisher<S>,
}

impl<S: PublishSink> Pipeline<S> {
    pub fn new(lexicon: Arc<Lexicon>, publisher: Publisher<S>) -> Self {
        Self { lexicon, publisher }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Process one document end to end.
    ///
    /// Dropped documents are an `Ok` outcome the caller can count; the only
    /// `Err` is a sink failure, which is isolated to this document and must
    /// not stop the caller from processing others.
    pub async fn process(&self, document: &Document) -> Result<Outcome, SinkError> {
        if !score::language_allowed(&self.lexicon, document) {
            tracing::debug!(
                url = %document.url,
                language = ?document.language,
                "language not allowed, dropping document"
            );
            return Ok(Outcome::Dropped(DropReason::Language));
        }

        let stats = score::score_document(&self.lexicon, document);
        let mut keywords = score::compress(&stats);

        let penalty = UrlPenalty::from_url(&document.url).total();
        for scored in keywords.values_mut() {
            scored.relevance -= penalty;
        }

        let record = OutputRecord {
            url: document.url.clone(),
            title: document.title.clone(),
            keywords,
        };

        let outcome = self.publisher.publish(&record).await?;

        if let Outcome::Published { .. } = outcome {
            tracing::info!(
                url = %record.url,
                terms = stats.total_words,
                most_relevant = ?most_relevant(&record, 5),
                "published record"
            );
        }

        Ok(outcome)
    }
}
