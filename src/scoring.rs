//! Metric computation for analyzed articles.
//!
//! - [`syllable`] - heuristic syllable estimate for one word
//! - [`sentiment`] - lexicon counts, polarity and subjectivity
//! - [`readability`] - sentence length, complex words, Fog Index
//! - [`pronoun`] - first-person pronoun count on the raw text
//! - [`article`] - runs everything for one document
//! - [`record`] - the output row

pub mod article;
pub mod pronoun;
pub mod readability;
pub mod record;
pub mod sentiment;
pub mod syllable;

pub use article::{ArticleScorer, RawDocument, ScoreOutcome, SkipReason, SkippedDocument};
pub use record::MetricsRecord;

/// Damping term added to the polarity and subjectivity denominators.
pub const EPSILON: f64 = 1e-6;
