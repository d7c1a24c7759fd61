//! Post-scoring compression: noise filtering and bounded relevance.

use crate::types::{KeywordStats, ScoredKeyword};
use std::collections::BTreeMap;

/// Raw relevance a word must exceed to survive. The threshold itself is
/// excluded: a word at exactly 4.0 is still noise.
const NOISE_THRESHOLD: f64 = 4.0;

/// Base of the compressing logarithm.
const COMPRESSION_BASE: f64 = 100.0;

/// Offset added after the logarithm.
const COMPRESSION_OFFSET: f64 = 0.7;

/// Ceiling on compressed relevance, reached at raw relevance
/// `100^1.1 ≈ 158.5`. Exactly 1.8; the historical 1.8001 variant was a
/// float-comparison workaround with no observable effect.
const COMPRESSION_CEILING: f64 = 1.8;

/// Map raw per-word relevance into a bounded score and attach term
/// frequency.
///
/// Words at or below the noise threshold are dropped. Survivors get
/// `log₁₀₀(relevance) + 0.7`, clamped to [`COMPRESSION_CEILING`], and
/// `term_frequency = count / total_words`. The result is ordered so the
/// published record serializes deterministically.
pub fn compress(stats: &KeywordStats) -> BTreeMap<String, ScoredKeyword> {
    if stats.total_words == 0 {
        return BTreeMap::new();
    }
    let total_words = stats.total_words as f64;

    stats
        .words
        .iter()
        .filter(|(_, stat)| stat.relevance > NOISE_THRESHOLD)
        .map(|(word, stat)| {
            let compressed =
                (stat.relevance.log(COMPRESSION_BASE) + COMPRESSION_OFFSET).min(COMPRESSION_CEILING);
            let scored = ScoredKeyword {
                relevance: compressed,
                term_frequency: f64::from(stat.count) / total_words,
            };
            (word.clone(), scored)
        })
        .collect()
}
