//! Scores one article end to end.
//!
//! ```text
//! raw text ─┬─ DocumentAnalyzer ─ tokens/sentences ─┬─ LexiconScorer
//!           │                                       └─ ReadabilityAnalyzer
//!           └─ PronounCounter
//! ```
//!
//! A document with no tokens or no sentences is skipped instead of scored.
//! That guard runs before any ratio is computed, so the readability
//! divisions never see a zero denominator.
//!
//! # Examples
//!
//! ```
//! use lexometer::lexicon::LexiconSet;
//! use lexometer::scoring::{ArticleScorer, RawDocument, ScoreOutcome};
//!
//! let lexicon = LexiconSet::new(vec!["news", "travels"], vec!["good"], vec!["bad"]);
//! let doc = RawDocument::new("42", "Good news travels fast. Bad news travels faster.");
//!
//! match ArticleScorer::new().score_document(&doc, &lexicon).unwrap() {
//!     ScoreOutcome::Scored(record) => {
//!         assert_eq!(record.word_count, 4);
//!         assert_eq!(record.avg_sentence_length, 2.0);
//!     }
//!     ScoreOutcome::Skipped(skipped) => panic!("skipped: {}", skipped.reason),
//! }
//! ```

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::document::{AnalyzedText, DocumentAnalyzer};
use crate::error::{LexometerError, Result};
use crate::lexicon::LexiconSet;
use crate::scoring::pronoun::PronounCounter;
use crate::scoring::readability::ReadabilityAnalyzer;
use crate::scoring::record::MetricsRecord;
use crate::scoring::sentiment::LexiconScorer;

/// One article's identifier and extracted text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    pub id: String,
    pub text: String,
}

impl RawDocument {
    pub fn new<I: Into<String>, T: Into<String>>(id: I, text: T) -> Self {
        RawDocument {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Why a document produced no record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Extraction produced no text at all.
    EmptyText,
    /// Every word was punctuation or a stop word.
    NoTokens,
    /// No sentence with alphanumeric content was found.
    NoSentences,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::EmptyText => "empty text",
            SkipReason::NoTokens => "no tokens after filtering",
            SkipReason::NoSentences => "no sentences",
        };
        f.write_str(reason)
    }
}

/// A document that was not scored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedDocument {
    pub id: String,
    pub reason: SkipReason,
}

impl SkippedDocument {
    /// Turn the skip into an error, for callers that treat it as fatal.
    pub fn into_error(self) -> LexometerError {
        LexometerError::degenerate(format!("document {}: {}", self.id, self.reason))
    }
}

/// Result of scoring one document.
#[derive(Clone, Debug, PartialEq)]
pub enum ScoreOutcome {
    Scored(MetricsRecord),
    Skipped(SkippedDocument),
}

impl ScoreOutcome {
    /// The record, if the document was scored.
    pub fn record(&self) -> Option<&MetricsRecord> {
        match self {
            ScoreOutcome::Scored(record) => Some(record),
            ScoreOutcome::Skipped(_) => None,
        }
    }

    /// Consume the outcome and return the record, if any.
    pub fn into_record(self) -> Option<MetricsRecord> {
        match self {
            ScoreOutcome::Scored(record) => Some(record),
            ScoreOutcome::Skipped(_) => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, ScoreOutcome::Skipped(_))
    }
}

/// Decide whether analyzed text can be scored.
fn check_scorable(text: &str, analyzed: &AnalyzedText) -> std::result::Result<(), SkipReason> {
    if text.trim().is_empty() {
        Err(SkipReason::EmptyText)
    } else if analyzed.sentences.is_empty() {
        Err(SkipReason::NoSentences)
    } else if analyzed.tokens.is_empty() {
        Err(SkipReason::NoTokens)
    } else {
        Ok(())
    }
}

/// Runs every metric over one document and assembles its record.
///
/// The scorer holds no lexicon state: the same scorer can be used with any
/// number of lexicons, and scoring is a pure function of the document and
/// lexicon passed in.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArticleScorer {
    sentiment: LexiconScorer,
    readability: ReadabilityAnalyzer,
    pronouns: PronounCounter,
}

impl ArticleScorer {
    pub fn new() -> Self {
        ArticleScorer::default()
    }

    /// Score a document, or report why it was skipped.
    ///
    /// An `Err` means a defect in the analysis pipeline, never a property
    /// of the document: degenerate documents come back as
    /// [`ScoreOutcome::Skipped`].
    pub fn score_document(&self, document: &RawDocument, lexicon: &LexiconSet) -> Result<ScoreOutcome> {
        let analyzer = DocumentAnalyzer::from_lexicon(lexicon);
        let analyzed = analyzer.tokenize(&document.text)?;

        if let Err(reason) = check_scorable(&document.text, &analyzed) {
            debug!("Skipping document {}: {}", document.id, reason);
            return Ok(ScoreOutcome::Skipped(SkippedDocument {
                id: document.id.clone(),
                reason,
            }));
        }

        let sentiment = self.sentiment.score(&analyzed.tokens, lexicon);
        let readability = self
            .readability
            .analyze(&analyzed.tokens, &analyzed.sentences)?;
        let personal_pronouns = self.pronouns.count(&document.text);

        debug!(
            "Scored document {}: {} words, {} sentences",
            document.id, readability.word_count, readability.sentence_count
        );

        Ok(ScoreOutcome::Scored(MetricsRecord {
            id: document.id.clone(),
            positive_score: sentiment.positive,
            negative_score: sentiment.negative,
            polarity_score: sentiment.polarity,
            subjectivity_score: sentiment.subjectivity,
            avg_sentence_length: readability.avg_sentence_length,
            percent_complex_words: readability.percent_complex_words,
            fog_index: readability.fog_index,
            word_count: readability.word_count,
            complex_word_count: readability.complex_word_count,
            syllables_per_word: readability.syllables_per_word,
            personal_pronouns,
            avg_word_length: readability.avg_word_length,
        }))
    }
}
