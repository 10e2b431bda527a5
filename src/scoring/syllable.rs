//! Heuristic syllable estimation.
//!
//! The estimate counts the vowels `a e i o u`, takes one off for words
//! ending in `es` or `ed`, and never goes below one. It is intentionally
//! crude: no dictionary, no `y`, no diphthongs.
//!
//! # Examples
//!
//! ```
//! use lexometer::scoring::syllable::estimate;
//!
//! assert_eq!(estimate("happiness"), 4);
//! assert_eq!(estimate("boxes"), 1);
//! assert_eq!(estimate("rhythm"), 1);
//! ```

/// Words with more estimated syllables than this are complex.
pub const COMPLEX_WORD_THRESHOLD: usize = 2;

#[inline]
fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Estimate the syllable count of a single word. Always at least 1.
pub fn estimate(word: &str) -> usize {
    let vowels = word.chars().filter(|&c| is_vowel(c)).count();

    let lower = word.to_ascii_lowercase();
    let silent_suffix = lower.ends_with("es") || lower.ends_with("ed");

    let count = if silent_suffix {
        vowels.saturating_sub(1)
    } else {
        vowels
    };
    count.max(1)
}

/// Whether a word counts as complex (more than two estimated syllables).
pub fn is_complex(word: &str) -> bool {
    estimate(word) > COMPLEX_WORD_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_vowel_count() {
        assert_eq!(estimate("happiness"), 4);
        assert_eq!(estimate("good"), 2);
        assert_eq!(estimate("analysis"), 3);
    }

    #[test]
    fn test_silent_suffixes() {
        assert_eq!(estimate("boxes"), 1);
        assert_eq!(estimate("jumped"), 1);
        assert_eq!(estimate("created"), 2);
        // "ss" is not a suffix match
        assert_eq!(estimate("business"), 3);
    }

    #[test]
    fn test_minimum_of_one() {
        assert_eq!(estimate(""), 1);
        assert_eq!(estimate("rhythm"), 1);
        assert_eq!(estimate("ed"), 1);
        assert_eq!(estimate("es"), 1);
        assert_eq!(estimate("2024"), 1);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(estimate("HAPPINESS"), estimate("happiness"));
        assert_eq!(estimate("BOXES"), 1);
    }

    #[test]
    fn test_non_ascii_vowels_do_not_count() {
        // only the plain ASCII vowels are counted
        assert_eq!(estimate("café"), 1);
    }

    #[test]
    fn test_is_complex() {
        assert!(is_complex("happiness"));
        assert!(is_complex("analysis"));
        assert!(!is_complex("faster"));
        assert!(!is_complex("boxes"));
    }
}
