//! Document sources: where the raw text of an input record comes from.
//!
//! Fetching pages over the network and extracting article text from HTML
//! happen outside this crate; a source only hands over text that already
//! exists, either inline in the input table or as files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::batch::input::InputRecord;
use crate::error::{LexometerError, Result};

/// Resolves an input record to its raw text.
///
/// An `Err` is an extraction failure: the batch runner logs it and treats
/// the document as having no text.
pub trait DocumentSource: Send + Sync {
    /// Return the raw text for a record.
    fn fetch(&self, record: &InputRecord) -> Result<String>;

    /// Get the name of this source (for logging).
    fn name(&self) -> &'static str;
}

/// Uses the `TEXT` column of the input table.
#[derive(Clone, Debug, Default)]
pub struct InlineSource;

impl InlineSource {
    pub fn new() -> Self {
        InlineSource
    }
}

impl DocumentSource for InlineSource {
    fn fetch(&self, record: &InputRecord) -> Result<String> {
        Ok(record.text.clone().unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "inline"
    }
}

/// Reads `<dir>/<URL_ID>.txt`.
#[derive(Clone, Debug)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        DirectorySource { dir: dir.into() }
    }

    /// The directory documents are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the text file for a record.
    ///
    /// The id must name a file directly inside the directory: ids that are
    /// empty, `.`, `..` or contain a path separator are rejected.
    pub fn path_for(&self, record: &InputRecord) -> Result<PathBuf> {
        let id = record.id.as_str();
        if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\']) {
            return Err(LexometerError::invalid_argument(format!(
                "document id {id:?} is not a plain file name"
            )));
        }
        Ok(self.dir.join(format!("{id}.txt")))
    }
}

impl DocumentSource for DirectorySource {
    fn fetch(&self, record: &InputRecord) -> Result<String> {
        let bytes = fs::read(self.path_for(record)?)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn name(&self) -> &'static str {
        "directory"
    }
}
