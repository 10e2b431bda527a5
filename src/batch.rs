//! Batch scoring of many articles.
//!
//! The batch layer reads input records, resolves each one to raw text
//! through a [`source::DocumentSource`], scores it with the
//! [`ArticleScorer`](crate::scoring::ArticleScorer) and writes one output
//! row per scored document. Documents that cannot be read or scored are
//! logged and left out of the output.

pub mod input;
pub mod output;
pub mod runner;
pub mod source;

pub use input::{InputRecord, read_input_file, read_input_records};
pub use output::{RecordFormat, RecordWriter};
pub use runner::{BatchReport, BatchRunner, score_documents};
pub use source::{DirectorySource, DocumentSource, InlineSource};
