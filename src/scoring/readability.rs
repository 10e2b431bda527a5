//! Readability metrics derived from token and sentence sequences.
//!
//! ```text
//! avg_sentence_length   = words / sentences
//! percent_complex_words = complex words / words
//! fog_index             = 0.4 * (avg_sentence_length + percent_complex_words)
//! avg_word_length       = characters / words
//! syllables_per_word    = syllables / words
//! ```
//!
//! None of these ratios is damped. An empty token or sentence sequence is
//! reported as [`LexometerError::Arithmetic`]; the article scorer skips
//! such documents before they get here.

use serde::{Deserialize, Serialize};

use crate::analysis::token::{Sentence, Token};
use crate::error::{LexometerError, Result};
use crate::scoring::syllable;

/// Weight of the Gunning Fog approximation.
pub const FOG_WEIGHT: f64 = 0.4;

/// Readability metrics for one document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityScores {
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
    pub complex_word_count: usize,
    pub percent_complex_words: f64,
    pub fog_index: f64,
    pub avg_word_length: f64,
    pub syllable_count: usize,
    pub syllables_per_word: f64,
}

/// Computes sentence length, complexity and Fog Index.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReadabilityAnalyzer;

impl ReadabilityAnalyzer {
    pub fn new() -> Self {
        ReadabilityAnalyzer
    }

    /// Analyze a token sequence together with its sentences.
    pub fn analyze(&self, tokens: &[Token], sentences: &[Sentence]) -> Result<ReadabilityScores> {
        let word_count = tokens.len();
        let sentence_count = sentences.len();

        if sentence_count == 0 {
            return Err(LexometerError::arithmetic(
                "average sentence length with zero sentences",
            ));
        }
        if word_count == 0 {
            return Err(LexometerError::arithmetic("word ratios with zero words"));
        }

        let mut syllable_count = 0;
        let mut complex_word_count = 0;
        let mut char_count = 0;
        for token in tokens {
            let syllables = syllable::estimate(&token.text);
            syllable_count += syllables;
            if syllables > syllable::COMPLEX_WORD_THRESHOLD {
                complex_word_count += 1;
            }
            char_count += token.char_count();
        }

        let words = word_count as f64;
        let avg_sentence_length = words / sentence_count as f64;
        let percent_complex_words = complex_word_count as f64 / words;

        Ok(ReadabilityScores {
            word_count,
            sentence_count,
            avg_sentence_length,
            complex_word_count,
            percent_complex_words,
            fog_index: FOG_WEIGHT * (avg_sentence_length + percent_complex_words),
            avg_word_length: char_count as f64 / words,
            syllable_count,
            syllables_per_word: syllable_count as f64 / words,
        })
    }
}
