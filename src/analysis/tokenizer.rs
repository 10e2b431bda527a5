//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the step of the analysis pipeline that splits the
//! (char-filtered) text into word tokens. Sentence segmentation lives next
//! to them but works on the unfiltered text and yields sentence spans
//! instead of tokens.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//! - [`sentence::SentenceTokenizer`] - Unicode sentence segmentation (UAX #29)
//!
//! # Examples
//!
//! ```
//! use lexometer::analysis::tokenizer::Tokenizer;
//! use lexometer::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so one analyzer can be shared by
/// callers scoring documents on several threads.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use lexometer::analysis::token::{Token, TokenStream};
/// use lexometer::analysis::tokenizer::Tokenizer;
/// use lexometer::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod sentence;
pub mod whitespace;
