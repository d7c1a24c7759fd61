//! keyword-sieve: turns a fetched web page into a small set of
//! relevance-scored keywords for downstream search indexing.
//!
//! The fetch engine hands over a [`Document`] with weighted text zones; the
//! [`Pipeline`] normalizes, scores, compresses, and penalizes it, then
//! publishes the surviving keywords through a [`PublishSink`].

pub mod error;
pub mod lexicon;
pub mod pipeline;
pub mod publish;
pub mod score;
pub mod tracing;
pub mod types;

pub use error::{ConfigError, Result, SinkError};
pub use lexicon::Lexicon;
pub use pipeline::Pipeline;
pub use publish::{DEFAULT_DESTINATION, MemorySink, PublishSink, Publisher};
pub use score::{Normalizer, UrlPenalty, compress, score_document};
pub use types::{
    Document, DropReason, KeywordStats, Outcome, OutputRecord, ScoredKeyword, Token, Zone,
};
