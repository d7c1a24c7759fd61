//! Zone text normalization into canonical tokens.

use crate::lexicon::Lexicon;
use crate::types::{Token, Zone};

/// Minimum length a cleaned word must keep to become a token. Anything
/// shorter carries no signal for keyword ranking.
const MIN_WORD_LENGTH: usize = 2;

/// Possessive suffix stripped before character filtering. Only the literal
/// two-character form: a character-class strip over-reaches on words that
/// merely end in the same letters ("boss" must stay "boss").
const POSSESSIVE_SUFFIX: &str = "'s";

/// Cleans raw zone text into canonical tokens against an immutable lexicon.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Normalizer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Split a zone on whitespace and normalize each word in order.
    ///
    /// Yields zero or one token per raw word. Tokens keep the ordinal index
    /// of the raw word they came from, and carry the zone's weight and
    /// pre-cleanup word count for positional scoring.
    pub fn normalize_zone(&self, zone: &Zone) -> Vec<Token> {
        let raw: Vec<&str> = zone.text.split_whitespace().collect();
        let word_amount = raw.len();

        raw.into_iter()
            .enumerate()
            .filter_map(|(index, word)| {
                self.normalize_word(word).map(|word| Token {
                    word,
                    index,
                    weight: zone.weight,
                    word_amount,
                })
            })
            .collect()
    }

    /// Normalize one raw word into at most one canonical token.
    ///
    /// Order matters: possessive stripping and the character filter run on
    /// the raw (lowercased) word, the stopword check runs on the lemmatized
    /// form, and the transform map has the last word.
    pub fn normalize_word(&self, raw: &str) -> Option<String> {
        let lowered = raw.to_lowercase();
        let stem = lowered.strip_suffix(POSSESSIVE_SUFFIX).unwrap_or(&lowered);

        let cleaned: String = stem
            .chars()
            .filter(|c| !self.lexicon.is_denied_char(*c))
            .collect();

        if cleaned.chars().count() < MIN_WORD_LENGTH {
            return None;
        }

        let word = self.lexicon.lemma(&cleaned).unwrap_or(&cleaned);

        if self.lexicon.is_stopword(word) {
            return None;
        }

        let word = self.lexicon.transform(word).unwrap_or(word);
        Some(word.to_string())
    }
}
