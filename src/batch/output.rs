//! Output writing for scored records.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scoring::record::{COLUMNS, MetricsRecord};

/// Output table format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    /// CSV with a header row
    #[default]
    Csv,
    /// A single JSON array
    Json,
    /// One JSON object per line
    Jsonl,
}

/// Writes metrics records in one of the [`RecordFormat`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordWriter {
    format: RecordFormat,
}

impl RecordWriter {
    pub fn new(format: RecordFormat) -> Self {
        RecordWriter { format }
    }

    pub fn format(&self) -> RecordFormat {
        self.format
    }

    /// Write all records to `writer`.
    ///
    /// CSV output always has a header row, even with no records.
    pub fn write<W: Write>(&self, mut writer: W, records: &[MetricsRecord]) -> Result<()> {
        match self.format {
            RecordFormat::Csv => {
                let mut csv_writer = csv::WriterBuilder::new()
                    .has_headers(false)
                    .from_writer(writer);
                csv_writer.write_record(COLUMNS)?;
                for record in records {
                    csv_writer.serialize(record)?;
                }
                csv_writer.flush()?;
            }
            RecordFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, records)?;
                writeln!(writer)?;
                writer.flush()?;
            }
            RecordFormat::Jsonl => {
                for record in records {
                    serde_json::to_writer(&mut writer, record)?;
                    writeln!(writer)?;
                }
                writer.flush()?;
            }
        }
        Ok(())
    }

    /// Write all records to a file, creating or truncating it.
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P, records: &[MetricsRecord]) -> Result<()> {
        let file = File::create(path.as_ref())?;
        self.write(BufWriter::new(file), records)
    }

    /// Write all records to standard output.
    pub fn write_to_stdout(&self, records: &[MetricsRecord]) -> Result<()> {
        let stdout = io::stdout();
        self.write(stdout.lock(), records)
    }
}
