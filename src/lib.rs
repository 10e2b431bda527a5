//! # Lexometer
//!
//! Readability and lexicon-based sentiment metrics for articles.
//!
//! ## Features
//!
//! - Punctuation stripping, lowercasing and stop word filtering
//! - Unicode sentence segmentation on the raw text
//! - Positive/negative lexicon counts with polarity and subjectivity
//! - Heuristic syllable estimates, complex words and the Gunning Fog Index
//! - First-person pronoun counts
//! - Batch scoring from CSV input to CSV/JSON output
//!
//! ## Example
//!
//! ```
//! use lexometer::lexicon::LexiconSet;
//! use lexometer::scoring::{ArticleScorer, RawDocument};
//!
//! let lexicon = LexiconSet::new(vec!["the"], vec!["good"], vec!["bad"]);
//! let doc = RawDocument::new("a1", "The results were good. The outlook is bad.");
//!
//! let outcome = ArticleScorer::new().score_document(&doc, &lexicon).unwrap();
//! let record = outcome.record().unwrap();
//! assert_eq!(record.positive_score, 1);
//! assert_eq!(record.negative_score, 1);
//! ```

pub mod analysis;
pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod scoring;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
