//! Input table reading.
//!
//! The input is CSV with a header row. `URL_ID` is required; `URL` and
//! `TEXT` are optional. Header names are matched case-insensitively and
//! other columns are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};

use crate::error::{LexometerError, Result};

/// One row of the input table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub id: String,
    pub url: Option<String>,
    pub text: Option<String>,
}

impl InputRecord {
    pub fn new<S: Into<String>>(id: S) -> Self {
        InputRecord {
            id: id.into(),
            url: None,
            text: None,
        }
    }

    pub fn with_url<S: Into<String>>(mut self, url: S) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = Some(text.into());
        self
    }
}

fn column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}

fn cell(row: &StringRecord, index: Option<usize>) -> Option<String> {
    index
        .and_then(|i| row.get(i))
        .map(str::to_string)
        .filter(|value| !value.trim().is_empty())
}

/// Read input records from any CSV reader.
///
/// Rows with an empty `URL_ID` are dropped.
pub fn read_input_records<R: Read>(reader: R) -> Result<Vec<InputRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let id_column = column(&headers, "URL_ID")
        .ok_or_else(|| LexometerError::config("input has no URL_ID column"))?;
    let url_column = column(&headers, "URL");
    let text_column = column(&headers, "TEXT");

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let Some(id) = cell(&row, Some(id_column)) else {
            continue;
        };
        records.push(InputRecord {
            id: id.trim().to_string(),
            url: cell(&row, url_column),
            text: cell(&row, text_column),
        });
    }

    Ok(records)
}

/// Read input records from a CSV file.
pub fn read_input_file<P: AsRef<Path>>(path: P) -> Result<Vec<InputRecord>> {
    let file = File::open(path.as_ref())?;
    read_input_records(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_id_and_url() {
        let data = "URL_ID,URL\nblackassign0001,https://example.com/a\nblackassign0002,https://example.com/b\n";
        let records = read_input_records(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "blackassign0001");
        assert_eq!(records[0].url.as_deref(), Some("https://example.com/a"));
        assert_eq!(records[0].text, None);
    }

    #[test]
    fn test_reads_inline_text_and_ignores_other_columns() {
        let data = "Extra,url_id,Text\nx,7,\"Hello, world. Bye.\"\n";
        let records = read_input_records(data.as_bytes()).unwrap();

        assert_eq!(records, vec![InputRecord::new("7").with_text("Hello, world. Bye.")]);
    }

    #[test]
    fn test_blank_ids_are_dropped() {
        let data = "URL_ID,URL\n,https://example.com/a\n3,https://example.com/c\n";
        let records = read_input_records(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "3");
    }

    #[test]
    fn test_missing_id_column() {
        let data = "URL\nhttps://example.com/a\n";
        let result = read_input_records(data.as_bytes());
        assert!(matches!(result, Err(LexometerError::Config(_))));
    }
}
