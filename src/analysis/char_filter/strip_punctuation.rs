//! Punctuation-stripping char filter.

use super::CharFilter;

/// A char filter that removes every character that is neither alphanumeric
/// nor whitespace.
///
/// Removed characters are dropped without a replacement, so `"don't"`
/// becomes `"dont"` and `"state-of-the-art"` becomes `"stateoftheart"`.
#[derive(Clone, Debug, Default)]
pub struct StripPunctuationCharFilter;

impl StripPunctuationCharFilter {
    /// Create a new punctuation-stripping char filter.
    pub fn new() -> Self {
        StripPunctuationCharFilter
    }

    /// Whether a character survives the filter.
    #[inline]
    pub fn keeps(c: char) -> bool {
        c.is_alphanumeric() || c.is_whitespace()
    }
}

impl CharFilter for StripPunctuationCharFilter {
    fn filter(&self, input: &str) -> String {
        input.chars().filter(|&c| Self::keeps(c)).collect()
    }

    fn name(&self) -> &'static str {
        "strip_punctuation"
    }
}
