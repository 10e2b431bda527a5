//! Word list parsing and loading.
//!
//! Word lists are newline-delimited. Lines are trimmed, blank lines and
//! lines starting with `;` are skipped, and for annotated lines of the
//! form `WORD | note` only `WORD` is kept. Files are decoded lossily since
//! published lists are often Latin-1.

use std::fs;
use std::path::Path;

use log::debug;

use crate::analysis::char_filter::lowercase::lowercase;
use crate::error::Result;

/// Parse the text of a word list into lowercase entries.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(';'))
        .filter_map(|line| {
            let word = line.split('|').next().unwrap_or(line).trim();
            if word.is_empty() {
                None
            } else {
                Some(lowercase(word))
            }
        })
        .collect()
}

/// Read and parse a word list file.
pub fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path)?;
    let words = parse_word_list(&String::from_utf8_lossy(&bytes));
    debug!("Read {} words from {}", words.len(), path.display());
    Ok(words)
}
