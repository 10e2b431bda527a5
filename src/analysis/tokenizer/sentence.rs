//! Sentence tokenizer implementation.
//!
//! Splits raw text into sentences using the Unicode sentence boundary rules
//! (UAX #29). Segments that contain no alphanumeric character (stray
//! punctuation) are not sentences.
//!
//! # Examples
//!
//! ```
//! use lexometer::analysis::tokenizer::sentence::SentenceTokenizer;
//!
//! let tokenizer = SentenceTokenizer::new();
//! let sentences = tokenizer.split("Good news travels fast. Bad news travels faster.");
//! assert_eq!(sentences.len(), 2);
//! assert_eq!(sentences[0].text, "Good news travels fast.");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::Sentence;

/// A tokenizer that splits text on Unicode sentence boundaries.
///
/// Line breaks are not sentence boundaries: `\r` and `\n` are read as
/// spaces before segmenting, so a title line runs into the first sentence
/// of the body and text without any terminal punctuation is one sentence.
/// The substitution is byte for byte, so offsets and sentence text still
/// refer to the raw input.
///
/// There is no abbreviation list. A period followed by a space and an
/// uppercase letter ends a sentence, so `"Mr. Smith met Dr. Jones."` is
/// three sentences.
#[derive(Clone, Debug, Default)]
pub struct SentenceTokenizer;

impl SentenceTokenizer {
    /// Create a new sentence tokenizer.
    pub fn new() -> Self {
        SentenceTokenizer
    }

    /// Split `text` into sentence spans.
    pub fn split(&self, text: &str) -> Vec<Sentence> {
        let joined: String = text
            .chars()
            .map(|c| if matches!(c, '\r' | '\n') { ' ' } else { c })
            .collect();

        joined
            .split_sentence_bound_indices()
            .filter(|(_, segment)| segment.chars().any(char::is_alphanumeric))
            .map(|(offset, segment)| {
                let start = offset + (segment.len() - segment.trim_start().len());
                let end = start + segment.trim().len();
                Sentence::new(&text[start..end], start, end)
            })
            .collect()
    }

    /// Get the name of this tokenizer.
    pub fn name(&self) -> &'static str {
        "sentence"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sentences() {
        let tokenizer = SentenceTokenizer::new();
        let sentences = tokenizer.split("Good news travels fast. Bad news travels faster.");

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "Good news travels fast.");
        assert_eq!(sentences[1].text, "Bad news travels faster.");
        assert_eq!(sentences[1].start_offset, 24);
        assert_eq!(sentences[1].end_offset, 48);
    }

    #[test]
    fn test_no_terminal_punctuation_is_one_sentence() {
        let tokenizer = SentenceTokenizer::new();
        let sentences = tokenizer.split("a headline without any full stop");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text, "a headline without any full stop");
    }

    #[test]
    fn test_single_terminal_mark() {
        let tokenizer = SentenceTokenizer::new();
        assert_eq!(tokenizer.split("Done.").len(), 1);
    }

    #[test]
    fn test_question_and_exclamation_marks() {
        let tokenizer = SentenceTokenizer::new();
        let sentences = tokenizer.split("Is it late? Yes! Go home.");
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn test_empty_and_punctuation_only_text() {
        let tokenizer = SentenceTokenizer::new();
        assert!(tokenizer.split("").is_empty());
        assert!(tokenizer.split("   \n  ").is_empty());
        assert!(tokenizer.split("... !!! ???").is_empty());
    }

    #[test]
    fn test_offsets_point_into_raw_text() {
        let tokenizer = SentenceTokenizer::new();
        for text in ["  First one.   Second one.", "Title\r\nFirst one.\n\nSecond one.\n"] {
            let sentences = tokenizer.split(text);
            assert_eq!(sentences.len(), 2);
            for sentence in sentences {
                assert_eq!(&text[sentence.start_offset..sentence.end_offset], sentence.text);
            }
        }
    }

    #[test]
    fn test_line_breaks_without_terminal_punctuation_are_one_sentence() {
        let tokenizer = SentenceTokenizer::new();
        assert_eq!(tokenizer.split("Markets rally on rate hopes\nInvestors cheer the news").len(), 1);
        assert_eq!(tokenizer.split("first line\r\nsecond line\n\nthird line").len(), 1);
    }

    #[test]
    fn test_title_line_joins_first_body_sentence() {
        let tokenizer = SentenceTokenizer::new();
        let sentences =
            tokenizer.split("Markets Rally\nInvestors cheered the news. Stocks rose sharply.");

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "Markets Rally\nInvestors cheered the news.");
        assert_eq!(sentences[1].text, "Stocks rose sharply.");
    }

    #[test]
    fn test_abbreviations_end_sentences() {
        let tokenizer = SentenceTokenizer::new();
        assert_eq!(tokenizer.split("Mr. Smith met Dr. Jones at 5 p.m. today.").len(), 3);
    }
}
