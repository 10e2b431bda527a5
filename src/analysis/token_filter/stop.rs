//! Stop filter implementation.
//!
//! Removes stop words from the token stream. The stop word set is shared
//! with the [`LexiconSet`](crate::lexicon::LexiconSet) it came from and is
//! expected to be lowercase already; tokens are lowercased before the
//! lookup, so matching is case-insensitive.
//!
//! # Examples
//!
//! ```
//! use lexometer::analysis::token_filter::Filter;
//! use lexometer::analysis::token_filter::stop::StopFilter;
//! use lexometer::analysis::token::Token;
//!
//! let filter = StopFilter::from_words(vec!["news", "travels"]);
//! let tokens = vec![
//!     Token::new("good", 0),
//!     Token::new("News", 1),
//!     Token::new("travels", 2),
//!     Token::new("fast", 3),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "good");
//! assert_eq!(result[1].text, "fast");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::char_filter::lowercase::lowercase;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes stop words from the token stream.
///
/// With `remove_stopped(false)` stop words are kept but marked as stopped,
/// which is what the `tokenize` command uses to show what was dropped.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of lowercase stop words
    stop_words: Arc<HashSet<String>>,
    /// Whether to remove stopped tokens entirely or just mark them as stopped
    remove_stopped: bool,
}

impl StopFilter {
    /// Create a stop filter sharing an existing stop word set.
    pub fn with_stop_words(stop_words: Arc<HashSet<String>>) -> Self {
        StopFilter {
            stop_words,
            remove_stopped: true,
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// Words are lowercased on the way in.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words.into_iter().map(|s| lowercase(s.as_ref())).collect();
        Self::with_stop_words(Arc::new(stop_words))
    }

    /// Set whether to remove stopped tokens entirely or just mark them as stopped.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Check if a word is a stop word, ignoring case.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word) || self.stop_words.contains(&lowercase(word))
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if token.is_stopped() {
                    Some(token)
                } else if self.is_stop_word(&token.text) {
                    if self.remove_stopped {
                        None
                    } else {
                        Some(token.stop())
                    }
                } else {
                    Some(token)
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
