//! Lexicon-based sentiment scoring.
//!
//! ```text
//! polarity     = (positive - negative) / (positive + negative + ε)
//! subjectivity = (positive + negative) / (word_count + ε)
//! ```
//!
//! with ε = [`EPSILON`]. Counts are per occurrence, not per distinct word.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::lexicon::LexiconSet;
use crate::scoring::EPSILON;

/// Sentiment counts and ratios for one token sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub positive: usize,
    pub negative: usize,
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Counts positive and negative lexicon hits in a token sequence.
#[derive(Clone, Copy, Debug, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        LexiconScorer
    }

    /// Score a token sequence against the positive and negative lexicons.
    ///
    /// Never fails: an empty sequence scores zero everywhere.
    pub fn score(&self, tokens: &[Token], lexicon: &LexiconSet) -> SentimentScores {
        let (positive, negative) = tokens.iter().fold((0usize, 0usize), |(p, n), token| {
            (
                p + usize::from(lexicon.is_positive(&token.text)),
                n + usize::from(lexicon.is_negative(&token.text)),
            )
        });

        SentimentScores {
            positive,
            negative,
            polarity: polarity(positive, negative),
            subjectivity: subjectivity(positive, negative, tokens.len()),
        }
    }
}

/// ε-damped polarity; strictly inside (-1, 1).
pub fn polarity(positive: usize, negative: usize) -> f64 {
    let (p, n) = (positive as f64, negative as f64);
    (p - n) / ((p + n) + EPSILON)
}

/// ε-damped share of sentiment-bearing words; zero for an empty sequence.
pub fn subjectivity(positive: usize, negative: usize, word_count: usize) -> f64 {
    (positive + negative) as f64 / (word_count as f64 + EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<Token> {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i))
            .collect()
    }

    fn lexicon() -> LexiconSet {
        LexiconSet::new(Vec::<&str>::new(), vec!["good", "great"], vec!["bad"])
    }

    #[test]
    fn test_balanced_sentiment() {
        let scores = LexiconScorer::new().score(&tokens(&["good", "fast", "bad", "faster"]), &lexicon());

        assert_eq!(scores.positive, 1);
        assert_eq!(scores.negative, 1);
        assert!(scores.polarity.abs() < 1e-5);
        assert!((scores.subjectivity - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_counts_every_occurrence() {
        let scores = LexiconScorer::new().score(&tokens(&["good", "good", "great"]), &lexicon());
        assert_eq!(scores.positive, 3);
        assert_eq!(scores.negative, 0);
        assert!(scores.polarity > 0.999 && scores.polarity < 1.0);
    }

    #[test]
    fn test_no_sentiment_words() {
        let words = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
        let scores = LexiconScorer::new().score(&tokens(&words), &lexicon());

        assert_eq!(scores.positive, 0);
        assert_eq!(scores.negative, 0);
        assert_eq!(scores.polarity, 0.0);
        assert_eq!(scores.subjectivity, 0.0);
    }

    #[test]
    fn test_empty_sequence() {
        let scores = LexiconScorer::new().score(&[], &lexicon());
        assert_eq!(scores, SentimentScores::default());
    }

    #[test]
    fn test_polarity_is_strictly_bounded() {
        for p in [0usize, 1, 7, 1000, 1_000_000] {
            for n in [0usize, 1, 3, 1000, 1_000_000] {
                let value = polarity(p, n);
                assert!(value > -1.0 && value < 1.0, "polarity({p}, {n}) = {value}");
            }
        }
    }

    #[test]
    fn test_negative_polarity() {
        let scores = LexiconScorer::new().score(&tokens(&["bad", "bad", "good"]), &lexicon());
        assert!(scores.polarity < 0.0);
        assert!((scores.polarity + 1.0 / 3.0).abs() < 1e-5);
    }
}
