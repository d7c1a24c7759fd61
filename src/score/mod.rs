//! The content-scoring core.
//!
//! This module turns a fetched document's weighted text zones into a small
//! set of relevance-scored keywords: normalization into canonical tokens,
//! relevance accumulation (semantic weight times positional decay),
//! compression of raw relevance into a bounded score, and a URL-derived
//! penalty applied uniformly per document.

// Module declarations
pub(crate) mod compress;
pub(crate) mod normalize;
pub(crate) mod penalty;
pub(crate) mod relevance;

// Public re-exports (used via lib.rs)
pub use compress::compress;
pub use normalize::Normalizer;
pub use penalty::UrlPenalty;
pub use relevance::{language_allowed, positional_relevance, score_document};
