//! Relevance accumulation and the language gate.
//!
//! Scoring is an explicit fold over the document's normalized token stream:
//! each accepted token bumps its word's count and adds the zone weight times
//! a positional decay factor to its raw relevance.

use super::normalize::Normalizer;
use crate::lexicon::Lexicon;
use crate::types::{Document, KeywordStats, Token};

/// Number of leading zone positions that score the full factor.
const DECAY_ONSET: usize = 10;

/// Positional decay factor in `(1, 2]`.
///
/// The first [`DECAY_ONSET`] words of a zone score the maximum 2.0; beyond
/// that the factor decays toward 1.0 as the index grows relative to the
/// zone's length. Callers must not pass `word_amount == 0`.
pub fn positional_relevance(index: usize, word_amount: usize) -> f64 {
    let overshoot = index.saturating_sub(DECAY_ONSET) as f64;
    (1.0 - overshoot / word_amount as f64) + 1.0
}

/// Whether the document is eligible for scoring at all.
///
/// A document declaring a language outside the allowed set is scored as if
/// it had no tokens; an unset language is given the benefit of the doubt.
pub fn language_allowed(lexicon: &Lexicon, document: &Document) -> bool {
    match &document.language {
        Some(language) => lexicon.allows_language(language),
        None => true,
    }
}

/// Fold one document's zones into per-word counts and raw relevance.
///
/// Zones with empty or whitespace-only text are skipped; the rest of the
/// document still scores. A language-gated document yields empty stats.
pub fn score_document(lexicon: &Lexicon, document: &Document) -> KeywordStats {
    if !language_allowed(lexicon, document) {
        return KeywordStats::default();
    }

    let normalizer = Normalizer::new(lexicon);

    document
        .zones
        .iter()
        .filter(|zone| !zone.text.trim().is_empty())
        .flat_map(|zone| normalizer.normalize_zone(zone))
        .fold(KeywordStats::default(), |mut stats, token| {
            accumulate(&mut stats, &token);
            stats
        })
}

/// Apply one accepted token to the running stats.
fn accumulate(stats: &mut KeywordStats, token: &Token) {
    // An empty zone cannot produce tokens, but guard the ratio anyway.
    if token.word_amount == 0 {
        return;
    }

    let total_relevance = token.weight * positional_relevance(token.index, token.word_amount);

    let entry = stats.words.entry(token.word.clone()).or_default();
    entry.count += 1;
    entry.relevance += total_relevance;
    stats.total_words += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Zone;
    use assert2::check;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lexicon() -> Lexicon {
        Lexicon::from_parts(
            vec!["en".into()],
            HashMap::from([("h1".into(), 3.0), ("p".into(), 1.0)]),
            vec![",".into(), ".".into()],
            vec!["the".into()],
            HashMap::from([("deals".into(), "deal".into())]),
            HashMap::new(),
        )
        .unwrap()
    }

    #[rstest]
    #[case(0, 10)]
    #[case(5, 10)]
    #[case(9, 10)]
    #[case(0, 1000)]
    #[case(9, 1000)]
    fn first_ten_positions_score_full(#[case] index: usize, #[case] word_amount: usize) {
        check!(positional_relevance(index, word_amount) == 2.0);
    }

    #[test]
    fn decays_toward_one_for_late_positions() {
        let last = positional_relevance(9_999, 10_000);
        check!(last > 1.0);
        check!(last < 1.01);

        // Monotonically non-increasing past the onset.
        let early = positional_relevance(20, 100);
        let late = positional_relevance(80, 100);
        check!(early > late);
    }

    #[test]
    fn empty_zone_contributes_nothing() {
        let mut stats = KeywordStats::default();
        accumulate(
            &mut stats,
            &Token {
                word: "orphan".into(),
                index: 0,
                weight: 1.0,
                word_amount: 0,
            },
        );
        check!(stats.is_empty());
        check!(stats.total_words == 0);
    }

    #[test]
    fn folds_counts_and_relevance_across_zones() {
        // Heading "Great Deals" (weight 3.0, 2 words) and a 5-word body of
        // "deal" (weight 1.0): "deal" accumulates 3.0*2.0 + 5 * 1.0*2.0 = 16.0.
        let lexicon = lexicon();
        let document = Document {
            url: "https://example.com".into(),
            title: None,
            language: Some("en".into()),
            zones: vec![
                Zone::new(3.0, "Great Deals"),
                Zone::new(1.0, "deal deal deal deal deal"),
            ],
        };

        let stats = score_document(&lexicon, &document);
        let deal = stats.words["deal"];

        check!(deal.count == 6);
        check!((deal.relevance - 16.0).abs() < 1e-9);
        check!(stats.words["great"].count == 1);
        check!(stats.total_words == 7);
    }

    #[test]
    fn disallowed_language_scores_as_empty() {
        let lexicon = lexicon();
        let document = Document {
            url: "https://example.com".into(),
            title: None,
            language: Some("fr".into()),
            zones: vec![Zone::new(1.0, "plenty of words here")],
        };

        let stats = score_document(&lexicon, &document);
        check!(stats.is_empty());
        check!(stats.total_words == 0);
    }

    #[test]
    fn unset_language_scores_normally() {
        let lexicon = lexicon();
        let document = Document {
            url: "https://example.com".into(),
            title: None,
            language: None,
            zones: vec![Zone::new(1.0, "plenty of words here")],
        };

        check!(!score_document(&lexicon, &document).is_empty());
    }

    #[test]
    fn blank_zones_are_skipped_not_fatal() {
        let lexicon = lexicon();
        let document = Document {
            url: "https://example.com".into(),
            title: None,
            language: None,
            zones: vec![
                Zone::new(3.0, "   "),
                Zone::new(1.0, "surviving words"),
            ],
        };

        let stats = score_document(&lexicon, &document);
        check!(stats.total_words == 2);
    }
}
