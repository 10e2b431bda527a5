//! Lowercase char filter implementation.
//!
//! # Examples
//!
//! ```
//! use lexometer::analysis::char_filter::CharFilter;
//! use lexometer::analysis::char_filter::lowercase::LowercaseCharFilter;
//!
//! let filter = LowercaseCharFilter::new();
//! assert_eq!(filter.filter("Hello WORLD"), "hello world");
//! ```

use super::CharFilter;

/// Lowercase a word or a whole text.
///
/// ASCII input takes the cheap `to_ascii_lowercase` path; everything else
/// uses Unicode-aware lowercasing.
pub fn lowercase(text: &str) -> String {
    if text.is_ascii() {
        text.to_ascii_lowercase()
    } else {
        text.to_lowercase()
    }
}

/// A char filter that lowercases the whole text.
///
/// Unicode lowercasing can expand a letter into a letter plus a combining
/// mark (`İ` becomes `i\u{307}`), so this filter runs before punctuation
/// stripping, which then removes the mark.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        lowercase(input)
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
