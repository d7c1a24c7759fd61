//! Core data model for the scoring pipeline.
//!
//! Everything here lives for exactly one document-processing invocation:
//! a [`Document`] comes in from the fetch engine, a [`KeywordStats`] is
//! accumulated from its zones, and an [`OutputRecord`] leaves through the
//! publish sink. Nothing persists across documents.

use ahash::AHashMap;
use serde::Serialize;
use std::collections::BTreeMap;

/// A semantically weighted region of a document's text (heading vs.
/// paragraph, etc.). The selector-to-weight mapping that produces zones is
/// owned by the fetch engine's configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub weight: f64,
    pub text: String,
}

impl Zone {
    pub fn new(weight: f64, text: impl Into<String>) -> Self {
        Self {
            weight,
            text: text.into(),
        }
    }
}

/// One crawled page, as handed over by the fetch engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Absolute URL the page was fetched from.
    pub url: String,
    pub title: Option<String>,
    /// Language code as reported by the page, if any. An unset language is
    /// given the benefit of the doubt and scored normally.
    pub language: Option<String>,
    /// Ordered text regions with their semantic weights.
    pub zones: Vec<Zone>,
}

/// A cleaned word together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub word: String,
    /// Ordinal position of the raw word within its zone, before cleanup.
    pub index: usize,
    /// Semantic weight of the zone the word appeared in.
    pub weight: f64,
    /// Total raw words in the zone, before cleanup.
    pub word_amount: usize,
}

/// Running count and raw relevance for a single word.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WordStat {
    pub count: u32,
    pub relevance: f64,
}

/// Per-document keyword accumulation state.
///
/// `total_words` counts tokens that survived normalization, summed across
/// zones, so `total_words >= Σ count` always holds per word.
#[derive(Debug, Clone, Default)]
pub struct KeywordStats {
    pub words: AHashMap<String, WordStat>,
    pub total_words: usize,
}

impl KeywordStats {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// A word's final scores as published downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredKeyword {
    /// Compressed relevance minus the document's URL penalty. No floor is
    /// enforced, so heavily penalized documents can go negative.
    pub relevance: f64,
    /// `count / total_words`, always in `(0, 1]` for a published word.
    pub term_frequency: f64,
}

/// The message body handed to the publish sink, one per surviving document.
///
/// Keywords are kept in a `BTreeMap` so serialization is deterministic:
/// processing the same document twice produces byte-identical bodies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRecord {
    pub url: String,
    pub title: Option<String>,
    pub keywords: BTreeMap<String, ScoredKeyword>,
}

/// What happened to one document. `Dropped` is a normal, countable result,
/// not an error; only sink failures surface as `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Published { keywords: usize },
    Dropped(DropReason),
}

/// Why a document produced no published record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// The document declared a language outside the allowed set.
    Language,
    /// No keyword survived normalization, the noise threshold, or the gate.
    NoKeywords,
}
