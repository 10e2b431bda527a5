//! First-person pronoun counting.
//!
//! Counts whole-word, case-insensitive matches of `I`, `we`, `my`, `ours`
//! and `us` in the raw text. Stop word removal would usually delete these,
//! so the count never looks at tokens. The country "US" is counted too.

use std::sync::LazyLock;

use regex::Regex;

static PERSONAL_PRONOUNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:i|we|my|ours|us)\b").expect("pronoun pattern should be valid")
});

/// Counts first-person pronouns in raw text.
#[derive(Clone, Copy, Debug, Default)]
pub struct PronounCounter;

impl PronounCounter {
    pub fn new() -> Self {
        PronounCounter
    }

    /// Number of pronoun occurrences in `raw_text`.
    pub fn count(&self, raw_text: &str) -> usize {
        PERSONAL_PRONOUNS.find_iter(raw_text).count()
    }
}
