//! Configuration for batch scoring runs.
//!
//! A config file is JSON; every field is optional:
//!
//! ```json
//! {
//!   "stopword_files": ["StopWords/StopWords_Generic.txt", "StopWords/StopWords_Names.txt"],
//!   "positive_words": "MasterDictionary/positive-words.txt",
//!   "negative_words": "MasterDictionary/negative-words.txt",
//!   "input": "Input.csv",
//!   "text_dir": "articles",
//!   "output": "Output.csv",
//!   "output_format": "csv",
//!   "parallel": false
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::batch::output::RecordFormat;
use crate::error::{LexometerError, Result};

/// Configuration for a batch run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Stop word lists, merged into one set.
    pub stopword_files: Vec<PathBuf>,

    /// Positive word list.
    pub positive_words: Option<PathBuf>,

    /// Negative word list.
    pub negative_words: Option<PathBuf>,

    /// Input table with a `URL_ID` column.
    pub input: Option<PathBuf>,

    /// Directory holding `<URL_ID>.txt` files.
    /// When absent, text comes from the input's `TEXT` column.
    pub text_dir: Option<PathBuf>,

    /// Output file. Standard output when absent.
    pub output: Option<PathBuf>,

    /// Output format.
    pub output_format: RecordFormat,

    /// Score documents on the rayon thread pool.
    pub parallel: bool,
}

impl BatchConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LexometerError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Check that the configuration describes a runnable batch.
    pub fn validate(&self) -> Result<()> {
        if self.input.is_none() {
            return Err(LexometerError::config("no input file given"));
        }
        if self.stopword_files.is_empty()
            && self.positive_words.is_none()
            && self.negative_words.is_none()
        {
            return Err(LexometerError::config(
                "no word lists given (stop words, positive or negative)",
            ));
        }
        Ok(())
    }

    /// Add a stop word file.
    pub fn with_stopword_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.stopword_files.push(path.into());
        self
    }

    /// Set the positive word list.
    pub fn with_positive_words<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.positive_words = Some(path.into());
        self
    }

    /// Set the negative word list.
    pub fn with_negative_words<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.negative_words = Some(path.into());
        self
    }

    /// Set the input table.
    pub fn with_input<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.input = Some(path.into());
        self
    }

    /// Set the text directory.
    pub fn with_text_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.text_dir = Some(path.into());
        self
    }

    /// Set the output file.
    pub fn with_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Set the output format.
    pub fn with_output_format(mut self, format: RecordFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Enable or disable parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
