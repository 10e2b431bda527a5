//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw text before it is passed to the
//! tokenizer. Sentence segmentation never sees their output.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Lowercases the text
//! - [`strip_punctuation::StripPunctuationCharFilter`] - Drops everything that is neither alphanumeric nor whitespace
//!
//! # Examples
//!
//! ```
//! use lexometer::analysis::char_filter::CharFilter;
//! use lexometer::analysis::char_filter::strip_punctuation::StripPunctuationCharFilter;
//!
//! let filter = StripPunctuationCharFilter::new();
//! assert_eq!(filter.filter("Hello, world!"), "Hello world");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod strip_punctuation;
