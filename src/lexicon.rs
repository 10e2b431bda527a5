//! Stop word and sentiment word sets.
//!
//! A [`LexiconSet`] is built once from three word lists and is read-only
//! afterwards. Every scoring call receives it explicitly; wrap it in an
//! `Arc` to share it between threads.
//!
//! # Examples
//!
//! ```
//! use lexometer::lexicon::LexiconSet;
//!
//! let lexicon = LexiconSet::new(vec!["the", "News"], vec!["Good"], vec!["bad"]);
//!
//! assert!(lexicon.is_stopword("news"));
//! assert!(lexicon.is_positive("good"));
//! assert!(lexicon.is_negative("bad"));
//! assert_eq!(lexicon.stats().stopwords, 2);
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::lowercase::lowercase;
use crate::error::Result;

pub mod loader;

/// Immutable stop word, positive and negative word sets.
///
/// All entries are trimmed and lowercase. Lookups expect an already
/// normalized word, which is what the article analyzer produces.
#[derive(Clone, Debug, Default)]
pub struct LexiconSet {
    stopwords: Arc<HashSet<String>>,
    positive: HashSet<String>,
    negative: HashSet<String>,
}

/// Sizes of the three sets of a [`LexiconSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconStats {
    pub stopwords: usize,
    pub positive: usize,
    pub negative: usize,
}

fn normalize_words<I, S>(words: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| lowercase(w.as_ref().trim()))
        .filter(|w| !w.is_empty())
        .collect()
}

impl LexiconSet {
    /// Build a lexicon from three word lists, normalizing every entry.
    pub fn new<A, B, C, S1, S2, S3>(stopwords: A, positive: B, negative: C) -> Self
    where
        A: IntoIterator<Item = S1>,
        B: IntoIterator<Item = S2>,
        C: IntoIterator<Item = S3>,
        S1: AsRef<str>,
        S2: AsRef<str>,
        S3: AsRef<str>,
    {
        LexiconSet {
            stopwords: Arc::new(normalize_words(stopwords)),
            positive: normalize_words(positive),
            negative: normalize_words(negative),
        }
    }

    /// Load a lexicon from word list files.
    ///
    /// All stop word files are merged into one set. A missing positive or
    /// negative path gives an empty set; a path that cannot be read is an
    /// error.
    pub fn from_files<P: AsRef<Path>>(
        stopword_files: &[P],
        positive: Option<&Path>,
        negative: Option<&Path>,
    ) -> Result<Self> {
        let mut stopwords = Vec::new();
        for path in stopword_files {
            stopwords.extend(loader::read_word_list(path.as_ref())?);
        }

        let positive = match positive {
            Some(path) => loader::read_word_list(path)?,
            None => Vec::new(),
        };
        let negative = match negative {
            Some(path) => loader::read_word_list(path)?,
            None => Vec::new(),
        };

        let lexicon = Self::new(stopwords, positive, negative);
        let stats = lexicon.stats();
        info!(
            "Loaded lexicon: {} stop words from {} file(s), {} positive, {} negative",
            stats.stopwords,
            stopword_files.len(),
            stats.positive,
            stats.negative
        );

        Ok(lexicon)
    }

    /// Check whether a normalized word is a stop word.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Check whether a normalized word is in the positive lexicon.
    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    /// Check whether a normalized word is in the negative lexicon.
    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    /// The stop word set.
    pub fn stopwords(&self) -> &HashSet<String> {
        &self.stopwords
    }

    /// The stop word set as a shared handle, for building stop filters.
    pub fn stopwords_shared(&self) -> Arc<HashSet<String>> {
        Arc::clone(&self.stopwords)
    }

    /// The positive word set.
    pub fn positive(&self) -> &HashSet<String> {
        &self.positive
    }

    /// The negative word set.
    pub fn negative(&self) -> &HashSet<String> {
        &self.negative
    }

    /// Sizes of the three sets.
    pub fn stats(&self) -> LexiconStats {
        LexiconStats {
            stopwords: self.stopwords.len(),
            positive: self.positive.len(),
            negative: self.negative.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_normalizes_entries() {
        let lexicon = LexiconSet::new(vec!["  The ", "", "AND"], vec!["Happy"], vec!["SAD  "]);

        assert!(lexicon.is_stopword("the"));
        assert!(lexicon.is_stopword("and"));
        assert!(lexicon.is_positive("happy"));
        assert!(lexicon.is_negative("sad"));
        assert_eq!(
            lexicon.stats(),
            LexiconStats {
                stopwords: 2,
                positive: 1,
                negative: 1
            }
        );
    }

    #[test]
    fn test_empty_lexicon() {
        let lexicon = LexiconSet::default();
        assert!(!lexicon.is_stopword("the"));
        assert!(lexicon.positive().is_empty());
        assert!(lexicon.negative().is_empty());
    }

    #[test]
    fn test_from_files_merges_stopword_lists() {
        let dir = TempDir::new().unwrap();
        let generic = dir.path().join("StopWords_Generic.txt");
        let names = dir.path().join("StopWords_Names.txt");
        let positive = dir.path().join("positive-words.txt");
        fs::write(&generic, "a\nthe\n").unwrap();
        fs::write(&names, "SMITH | Surnames from 1990 census\n").unwrap();
        fs::write(&positive, ";comment\ngood\ngreat\n").unwrap();

        let lexicon =
            LexiconSet::from_files(&[&generic, &names], Some(positive.as_path()), None).unwrap();

        assert!(lexicon.is_stopword("the"));
        assert!(lexicon.is_stopword("smith"));
        assert!(lexicon.is_positive("great"));
        assert!(!lexicon.is_positive("comment"));
        assert!(lexicon.negative().is_empty());
    }

    #[test]
    fn test_from_files_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.txt");
        assert!(LexiconSet::from_files(&[&missing], None, None).is_err());
    }

    #[test]
    fn test_shared_stopwords_point_to_same_set() {
        let lexicon = LexiconSet::new(vec!["x"], Vec::<&str>::new(), Vec::<&str>::new());
        let a = lexicon.stopwords_shared();
        let b = lexicon.stopwords_shared();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
