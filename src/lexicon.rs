//! Lexicon loading and lookup.
//!
//! The lexicon bundles the six externally supplied resources that configure
//! normalization and gating: allowed languages, zone weights, the character
//! deny set, stopwords, the lemma map, and the transform map. It is loaded
//! once at startup, validated eagerly, and immutable afterwards, so any
//! number of document-processing invocations can read it concurrently
//! without synchronization.

use crate::error::{ConfigError, Result};
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Immutable normalization and gating configuration.
///
/// Every resource is matched in lowercase; [`crate::score::Normalizer`]
/// folds case before any lookup.
#[derive(Debug, Clone)]
pub struct Lexicon {
    allowed_languages: HashSet<String>,
    zone_weights: HashMap<String, f64>,
    denied_chars: HashSet<char>,
    stopwords: HashSet<String>,
    lemmas: HashMap<String, String>,
    transforms: HashMap<String, String>,
}

impl Lexicon {
    /// Load all six resources from `dir`, failing fast on the first missing
    /// file, shape mismatch, or invalid value.
    pub fn load(dir: &Path) -> Result<Self> {
        let languages: Vec<String> = read_resource(dir, "languages.json")?;
        let zone_weights: HashMap<String, f64> = read_resource(dir, "zones.json")?;
        let chars: Vec<String> = read_resource(dir, "chars.json")?;
        let stopwords: Vec<String> = read_resource(dir, "stopwords.json")?;
        let lemmas: HashMap<String, String> = read_resource(dir, "lemmas.json")?;
        let transforms: HashMap<String, String> = read_resource(dir, "transforms.json")?;

        let lexicon = Self::from_parts(languages, zone_weights, chars, stopwords, lemmas, transforms)
            .with_context(|| format!("invalid lexicon in {}", dir.display()))?;

        tracing::info!(
            languages = lexicon.allowed_languages.len(),
            zones = lexicon.zone_weights.len(),
            denied_chars = lexicon.denied_chars.len(),
            stopwords = lexicon.stopwords.len(),
            lemmas = lexicon.lemmas.len(),
            transforms = lexicon.transforms.len(),
            "loaded lexicon from {}",
            dir.display()
        );

        Ok(lexicon)
    }

    /// Build a lexicon from already-materialized parts, applying the same
    /// validation as [`Lexicon::load`]. Useful for tests and for callers
    /// that embed their resources.
    pub fn from_parts(
        languages: Vec<String>,
        zone_weights: HashMap<String, f64>,
        chars: Vec<String>,
        stopwords: Vec<String>,
        lemmas: HashMap<String, String>,
        transforms: HashMap<String, String>,
    ) -> std::result::Result<Self, ConfigError> {
        for (selector, weight) in &zone_weights {
            if !weight.is_finite() || *weight <= 0.0 {
                return Err(ConfigError::Invalid {
                    name: "zones.json",
                    reason: format!("zone '{selector}' has non-positive weight {weight}"),
                });
            }
        }

        let mut denied_chars = HashSet::with_capacity(chars.len());
        for entry in &chars {
            let mut it = entry.chars();
            match (it.next(), it.next()) {
                (Some(c), None) => {
                    denied_chars.insert(c);
                }
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "chars.json",
                        reason: format!("entry '{entry}' is not a single character"),
                    });
                }
            }
        }

        Ok(Self {
            allowed_languages: languages.into_iter().collect(),
            zone_weights,
            denied_chars,
            stopwords: stopwords.into_iter().collect(),
            lemmas,
            transforms,
        })
    }

    /// Whether a document declaring `language` may be scored.
    pub fn allows_language(&self, language: &str) -> bool {
        self.allowed_languages.contains(language)
    }

    /// Semantic weight configured for a zone selector, if any.
    pub fn zone_weight(&self, selector: &str) -> Option<f64> {
        self.zone_weights.get(selector).copied()
    }

    pub fn is_denied_char(&self, c: char) -> bool {
        self.denied_chars.contains(&c)
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Canonical form for an inflected word, if one is configured.
    pub fn lemma(&self, word: &str) -> Option<&str> {
        self.lemmas.get(word).map(String::as_str)
    }

    /// Canonical synonym or abbreviation substitution, if one is configured.
    pub fn transform(&self, word: &str) -> Option<&str> {
        self.transforms.get(word).map(String::as_str)
    }
}

/// Read one resource file and deserialize it into its expected shape.
fn read_resource<T: DeserializeOwned>(
    dir: &Path,
    name: &'static str,
) -> std::result::Result<T, ConfigError> {
    let path = dir.join(name);
    let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Missing {
        name,
        path,
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Shape { name, source })
}
