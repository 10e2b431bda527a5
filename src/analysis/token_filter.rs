//! Token filter implementations for token transformation.
//!
//! Filters transform the token streams produced by tokenizers.
//!
//! # Available Filters
//!
//! - [`stop::StopFilter`] - Removes (or marks) stop words
//!
//! # Filter Chaining
//!
//! ```text
//! Lowercase → Strip punctuation → Whitespace split → Stop words
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use lexometer::analysis::token::{Token, TokenStream};
/// use lexometer::analysis::token_filter::Filter;
/// use lexometer::error::Result;
///
/// struct ShortWordFilter;
///
/// impl Filter for ShortWordFilter {
///     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
///         let kept: Vec<Token> = tokens.filter(|t| t.char_count() > 2).collect();
///         Ok(Box::new(kept.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "short_word"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod stop;
