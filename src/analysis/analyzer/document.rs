//! Article analyzer: word tokens for scoring plus sentence spans.
//!
//! Word tokens come from the pipeline
//!
//! ```text
//! Lowercase → StripPunctuation → Whitespace → Stop words
//! ```
//!
//! while sentences are cut from the raw text before any of that runs, so
//! stop word removal can never change the sentence count.
//!
//! # Examples
//!
//! ```
//! use lexometer::analysis::analyzer::document::DocumentAnalyzer;
//!
//! let analyzer = DocumentAnalyzer::from_stop_words(vec!["news", "travels"]);
//! let analyzed = analyzer
//!     .tokenize("Good news travels fast. Bad news travels faster.")
//!     .unwrap();
//!
//! assert_eq!(analyzed.words(), vec!["good", "fast", "bad", "faster"]);
//! assert_eq!(analyzed.sentence_count(), 2);
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::strip_punctuation::StripPunctuationCharFilter;
use crate::analysis::token::{Sentence, Token};
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::sentence::SentenceTokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;
use crate::lexicon::LexiconSet;

/// The result of analyzing one document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedText {
    /// Normalized, stop-filtered word tokens in source order
    pub tokens: Vec<Token>,
    /// Sentence spans from the unfiltered text
    pub sentences: Vec<Sentence>,
}

impl AnalyzedText {
    /// Number of word tokens after filtering.
    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }

    /// Number of sentences in the raw text.
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Token texts in order.
    pub fn words(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// True when there is nothing to score: no tokens or no sentences.
    pub fn is_degenerate(&self) -> bool {
        self.tokens.is_empty() || self.sentences.is_empty()
    }
}

/// Produces the token and sentence sequences every metric is computed from.
#[derive(Clone, Debug)]
pub struct DocumentAnalyzer {
    words: PipelineAnalyzer,
    sentences: SentenceTokenizer,
}

impl DocumentAnalyzer {
    /// Build the article pipeline around a shared lowercase stop word set.
    pub fn new(stop_words: Arc<HashSet<String>>) -> Self {
        Self::with_stop_filter(StopFilter::with_stop_words(stop_words))
    }

    /// Build the article pipeline from a list of stop words.
    pub fn from_stop_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_stop_filter(StopFilter::from_words(words))
    }

    /// Build the article pipeline using the stop words of a lexicon.
    pub fn from_lexicon(lexicon: &LexiconSet) -> Self {
        Self::new(lexicon.stopwords_shared())
    }

    /// Build the article pipeline with a preconfigured stop filter.
    ///
    /// Passing a filter with `remove_stopped(false)` keeps stop words in the
    /// token sequence, marked as stopped.
    pub fn with_stop_filter(stop_filter: StopFilter) -> Self {
        let words = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_char_filter(Arc::new(StripPunctuationCharFilter::new()))
            .add_filter(Arc::new(stop_filter))
            .with_name("article");

        DocumentAnalyzer {
            words,
            sentences: SentenceTokenizer::new(),
        }
    }

    /// Tokenize `text` into filtered word tokens and raw sentence spans.
    ///
    /// Empty results are not an error here; deciding what to do with a
    /// document that has no tokens or sentences is up to the caller.
    pub fn tokenize(&self, text: &str) -> Result<AnalyzedText> {
        let sentences = self.sentences.split(text);
        let tokens: Vec<Token> = self.words.analyze(text)?.collect();

        Ok(AnalyzedText { tokens, sentences })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_tokens_and_sentences() {
        let analyzer = DocumentAnalyzer::from_stop_words(vec!["news", "travels"]);
        let analyzed = analyzer
            .tokenize("Good news travels fast. Bad news travels faster.")
            .unwrap();

        assert_eq!(analyzed.words(), vec!["good", "fast", "bad", "faster"]);
        assert_eq!(analyzed.word_count(), 4);
        assert_eq!(analyzed.sentence_count(), 2);
        assert!(!analyzed.is_degenerate());
    }

    #[test]
    fn test_stop_words_do_not_change_sentence_count() {
        let text = "The cat sat. The dog ran. It rained.";
        let keep_all = DocumentAnalyzer::from_stop_words(Vec::<&str>::new());
        let drop_all = DocumentAnalyzer::from_stop_words(vec![
            "the", "cat", "sat", "dog", "ran", "it", "rained",
        ]);

        let kept = keep_all.tokenize(text).unwrap();
        let dropped = drop_all.tokenize(text).unwrap();

        assert_eq!(kept.sentence_count(), 3);
        assert_eq!(dropped.sentence_count(), 3);
        assert_eq!(dropped.word_count(), 0);
        assert!(dropped.is_degenerate());
    }

    #[test]
    fn test_stop_words_match_uppercase_source() {
        let analyzer = DocumentAnalyzer::from_stop_words(vec!["i", "we"]);
        let analyzed = analyzer.tokenize("I think we should act.").unwrap();
        assert_eq!(analyzed.words(), vec!["think", "should", "act"]);
    }

    #[test]
    fn test_lowercasing_runs_before_punctuation_stripping() {
        let analyzer = DocumentAnalyzer::from_stop_words(Vec::<&str>::new());
        let analyzed = analyzer.tokenize("İstanbul ÉCOLE").unwrap();

        // "İ" lowercases to "i" plus U+0307, and the combining mark is stripped.
        assert_eq!(analyzed.words(), vec!["istanbul", "école"]);
        for token in &analyzed.tokens {
            assert!(token.text.chars().all(char::is_alphanumeric), "{:?}", token.text);
        }
    }

    #[test]
    fn test_empty_text() {
        let analyzer = DocumentAnalyzer::from_stop_words(vec!["the"]);
        let analyzed = analyzer.tokenize("").unwrap();

        assert!(analyzed.tokens.is_empty());
        assert!(analyzed.sentences.is_empty());
        assert!(analyzed.is_degenerate());
    }

    #[test]
    fn test_marked_stop_words() {
        let analyzer = DocumentAnalyzer::with_stop_filter(
            StopFilter::from_words(vec!["the"]).remove_stopped(false),
        );
        let analyzed = analyzer.tokenize("The end.").unwrap();

        assert_eq!(analyzed.word_count(), 2);
        assert!(analyzed.tokens[0].is_stopped());
        assert!(!analyzed.tokens[1].is_stopped());
    }
}
