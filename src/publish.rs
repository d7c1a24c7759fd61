//! Record assembly and the publish seam.
//!
//! The actual transport (a durable message queue in production) lives
//! behind the [`PublishSink`] trait; connection setup, queue declaration,
//! and delivery acknowledgement are the sink's business. From the
//! pipeline's perspective publishing is fire-and-forget: serialize once,
//! submit once, and treat any failure as isolated to that document.
//! Delivery is at-least-once, so downstream consumers must tolerate
//! duplicates.

use crate::error::SinkError;
use crate::types::{DropReason, Outcome, OutputRecord};
use std::future::Future;
use std::sync::Mutex;

/// Destination the downstream indexer consumes from.
pub const DEFAULT_DESTINATION: &str = "scraped_items";

/// Transport seam for surviving records.
///
/// Implementations are expected to be shared across concurrently processed
/// documents, hence `&self` and the `Send + Sync` bounds.
pub trait PublishSink: Send + Sync {
    /// Submit one serialized record to the named destination.
    fn publish(
        &self,
        destination: &str,
        body: &[u8],
    ) -> impl Future<Output = Result<(), SinkError>> + Send;
}

impl<T: PublishSink> PublishSink for &T {
    fn publish(
        &self,
        destination: &str,
        body: &[u8],
    ) -> impl Future<Output = Result<(), SinkError>> + Send {
        (**self).publish(destination, body)
    }
}

impl<T: PublishSink> PublishSink for std::sync::Arc<T> {
    fn publish(
        &self,
        destination: &str,
        body: &[u8],
    ) -> impl Future<Output = Result<(), SinkError>> + Send {
        (**self).publish(destination, body)
    }
}

/// Assembles final records and hands them to the sink.
#[derive(Debug)]
pub struct Publisher<S> {
    sink: S,
    destination: String,
}

impl<S: PublishSink> Publisher<S> {
    /// Publisher targeting [`DEFAULT_DESTINATION`].
    pub fn new(sink: S) -> Self {
        Self::with_destination(sink, DEFAULT_DESTINATION)
    }

    pub fn with_destination(sink: S, destination: impl Into<String>) -> Self {
        Self {
            sink,
            destination: destination.into(),
        }
    }

    /// Serialize one record and submit it.
    ///
    /// A record with no keywords never reaches the sink: it is dropped as a
    /// normal, countable outcome. Sink failures bubble up as [`SinkError`]
    /// for the caller to retry or drop; they must not take other documents
    /// down with them.
    pub async fn publish(&self, record: &OutputRecord) -> Result<Outcome, SinkError> {
        if record.keywords.is_empty() {
            tracing::debug!(url = %record.url, "no keywords survived, dropping record");
            return Ok(Outcome::Dropped(DropReason::NoKeywords));
        }

        let body = serde_json::to_vec(record)
            .map_err(|e| SinkError::new(&self.destination, format!("serialize: {e}")))?;

        self.sink.publish(&self.destination, &body).await?;

        Ok(Outcome::Published {
            keywords: record.keywords.len(),
        })
    }
}

/// Up to `limit` keywords ordered by descending final relevance, for the
/// condensed per-document log line.
pub(crate) fn most_relevant(record: &OutputRecord, limit: usize) -> Vec<&str> {
    let mut ranked: Vec<_> = record.keywords.iter().collect();
    ranked.sort_by(|(_, a), (_, b)| b.relevance.total_cmp(&a.relevance));
    ranked
        .into_iter()
        .take(limit)
        .map(|(word, _)| word.as_str())
        .collect()
}

/// In-memory sink for tests and dry runs: records what would have been
/// published, in order.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All `(destination, body)` pairs submitted so far.
    pub fn messages(&self) -> Vec<(String, Vec<u8>)> {
        self.messages.lock().expect("sink lock poisoned").clone()
    }
}

impl PublishSink for MemorySink {
    fn publish(
        &self,
        destination: &str,
        body: &[u8],
    ) -> impl Future<Output = Result<(), SinkError>> + Send {
        self.messages
            .lock()
            .expect("sink lock poisoned")
            .push((destination.to_string(), body.to_vec()));
        async { Ok(()) }
    }
}
