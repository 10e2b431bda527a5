//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::batch::output::{RecordFormat, RecordWriter};
use crate::cli::args::{LexometerArgs, OutputFormat};
use crate::error::Result;
use crate::scoring::record::{COLUMNS, MetricsRecord};

/// Result structure for the tokenize command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeResult {
    pub word_count: usize,
    pub sentence_count: usize,
    pub tokens: Vec<String>,
    pub stopped: Vec<String>,
    pub sentences: Vec<String>,
}

/// One word's syllable estimate.
#[derive(Debug, Serialize, Deserialize)]
pub struct SyllableEstimate {
    pub word: String,
    pub syllables: usize,
    pub complex: bool,
}

/// Summary of a batch run written to a file.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchSummary {
    pub output: String,
    pub documents: usize,
    pub scored: usize,
    pub skipped: usize,
    pub duration_ms: u64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &LexometerArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Csv => output_csv(result),
    }
}

/// Output metrics records in the specified format.
///
/// CSV output uses the batch column contract.
pub fn output_records(records: &[MetricsRecord], args: &LexometerArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for record in records {
                let value = serde_json::to_value(record)?;
                println!("Document {}", record.id);
                println!("─────────────");
                for column in COLUMNS.iter().skip(1) {
                    let formatted = value.get(*column).map(format_value).unwrap_or_default();
                    println!("{column:<28} {formatted}");
                }
                println!();
            }
            Ok(())
        }
        OutputFormat::Json => output_json(&records, args),
        OutputFormat::Csv => RecordWriter::new(RecordFormat::Csv).write_to_stdout(records),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &LexometerArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    output_generic_human(&value);
    Ok(())
}

fn output_generic_human(value: &serde_json::Value) {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr {
                match item.as_object() {
                    Some(obj) => {
                        let fields: Vec<String> = obj
                            .iter()
                            .map(|(key, val)| format!("{key}={}", format_value(val)))
                            .collect();
                        println!("{}", fields.join("  "));
                    }
                    None => println!("{}", format_value(item)),
                }
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LexometerArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Output in CSV format.
fn output_csv<T: Serialize>(result: &T) -> Result<()> {
    let stdout = io::stdout();
    write_csv(stdout.lock(), result)
}

/// Write a result as CSV.
///
/// An array of objects becomes one row per element under a header taken
/// from the first element; an object becomes `key,value` rows.
fn write_csv<W: Write, T: Serialize>(writer: W, result: &T) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);

    match serde_json::to_value(result)? {
        serde_json::Value::Array(arr) => {
            for (i, item) in arr.iter().enumerate() {
                if let Some(obj) = item.as_object() {
                    if i == 0 {
                        csv_writer.write_record(obj.keys())?;
                    }
                    csv_writer.write_record(obj.values().map(csv_field))?;
                }
            }
        }
        serde_json::Value::Object(obj) => {
            csv_writer.write_record(["key", "value"])?;
            for (key, value) in &obj {
                csv_writer.write_record([key.as_str(), csv_field(value).as_str()])?;
            }
        }
        other => csv_writer.write_record([csv_field(&other)])?,
    }

    csv_writer.flush()?;
    Ok(())
}

/// Format a JSON value for human display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{f:.6}"),
            _ => n.to_string(),
        },
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            format!("[{}]", items.join(", "))
        }
        serde_json::Value::Object(_) => value.to_string(),
    }
}

/// Format a JSON value as a CSV field. Quoting is left to the writer.
fn csv_field(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(arr) => arr
            .iter()
            .map(format_value)
            .collect::<Vec<_>>()
            .join(" "),
        other => format_value(other),
    }
}
