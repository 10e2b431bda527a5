//! Command line argument parsing for the Lexometer CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::batch::output::RecordFormat;
use crate::config::BatchConfig;

/// Lexometer - readability and sentiment metrics for articles
#[derive(Parser, Debug, Clone)]
#[command(name = "lexometer")]
#[command(about = "Readability and lexicon-based sentiment metrics for articles")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexometerArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexometerArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Score a single document
    Score(ScoreArgs),

    /// Show the tokens and sentences a document is scored from
    Tokenize(TokenizeArgs),

    /// Show syllable estimates for words
    Syllables(SyllablesArgs),

    /// Score every document listed in an input table
    Batch(BatchArgs),
}

impl Command {
    /// The subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Score(_) => "score",
            Command::Tokenize(_) => "tokenize",
            Command::Syllables(_) => "syllables",
            Command::Batch(_) => "batch",
        }
    }
}

/// Word list locations shared by several commands.
#[derive(Args, Debug, Clone, Default)]
pub struct LexiconArgs {
    /// Stop word list (repeatable)
    #[arg(long = "stopwords", value_name = "FILE")]
    pub stopwords: Vec<PathBuf>,

    /// Positive word list
    #[arg(long, value_name = "FILE")]
    pub positive: Option<PathBuf>,

    /// Negative word list
    #[arg(long, value_name = "FILE")]
    pub negative: Option<PathBuf>,
}

/// Arguments for scoring one document
#[derive(Parser, Debug, Clone)]
pub struct ScoreArgs {
    /// Text file to score, or "-" for standard input
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Document id (defaults to the file stem)
    #[arg(long)]
    pub id: Option<String>,

    /// Fail instead of reporting a skipped document
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub lexicon: LexiconArgs,
}

/// Arguments for tokenizing one document
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Text file to tokenize, or "-" for standard input
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Stop word list (repeatable)
    #[arg(long = "stopwords", value_name = "FILE")]
    pub stopwords: Vec<PathBuf>,

    /// Keep stop words in the output, marked as stopped
    #[arg(long)]
    pub show_stopped: bool,
}

/// Arguments for syllable estimates
#[derive(Parser, Debug, Clone)]
pub struct SyllablesArgs {
    /// Words to estimate
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for a batch run
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// JSON configuration file; flags override its values
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Input CSV with a URL_ID column
    #[arg(short, long, value_name = "INPUT_FILE")]
    pub input: Option<PathBuf>,

    /// Directory holding <URL_ID>.txt files
    #[arg(long, value_name = "DIR")]
    pub text_dir: Option<PathBuf>,

    /// Output file (standard output when omitted)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Output table format
    #[arg(id = "batch_output_format", long = "output-format", value_enum)]
    pub output_format: Option<RecordFormat>,

    /// Score documents in parallel
    #[arg(long)]
    pub parallel: bool,

    #[command(flatten)]
    pub lexicon: LexiconArgs,
}

impl BatchArgs {
    /// Apply command line values on top of a configuration.
    pub fn merge_into(&self, mut config: BatchConfig) -> BatchConfig {
        if !self.lexicon.stopwords.is_empty() {
            config.stopword_files = self.lexicon.stopwords.clone();
        }
        if let Some(path) = &self.lexicon.positive {
            config.positive_words = Some(path.clone());
        }
        if let Some(path) = &self.lexicon.negative {
            config.negative_words = Some(path.clone());
        }
        if let Some(path) = &self.input {
            config.input = Some(path.clone());
        }
        if let Some(path) = &self.text_dir {
            config.text_dir = Some(path.clone());
        }
        if let Some(path) = &self.output {
            config.output = Some(path.clone());
        }
        if let Some(format) = self.output_format {
            config.output_format = format;
        }
        if self.parallel {
            config.parallel = true;
        }
        config
    }
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}
