//! Command implementations for the Lexometer CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use log::info;

use crate::analysis::analyzer::document::DocumentAnalyzer;
use crate::analysis::token_filter::stop::StopFilter;
use crate::batch::input::read_input_file;
use crate::batch::output::RecordWriter;
use crate::batch::runner::BatchRunner;
use crate::batch::source::{DirectorySource, DocumentSource, InlineSource};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::BatchConfig;
use crate::error::{LexometerError, Result};
use crate::lexicon::LexiconSet;
use crate::lexicon::loader::read_word_list;
use crate::scoring::syllable;
use crate::scoring::{ArticleScorer, RawDocument, ScoreOutcome};

/// Execute a CLI command.
pub fn execute_command(args: LexometerArgs) -> Result<()> {
    match &args.command {
        Command::Score(score_args) => score_document(score_args, &args),
        Command::Tokenize(tokenize_args) => tokenize_document(tokenize_args, &args),
        Command::Syllables(syllable_args) => estimate_syllables(syllable_args, &args),
        Command::Batch(batch_args) => run_batch(batch_args, &args),
    }
}

/// Execute a CLI command, naming the command in any error.
pub fn run(args: LexometerArgs) -> anyhow::Result<()> {
    let name = args.command.name();
    execute_command(args).with_context(|| format!("{name} command failed"))
}

/// Read a text file, or standard input for "-".
fn read_text(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    } else {
        let bytes = fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn document_id(path: &Path, id: Option<&str>) -> String {
    match id {
        Some(id) => id.to_string(),
        None if path.as_os_str() == "-" => "stdin".to_string(),
        None => path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
    }
}

fn load_lexicon(args: &LexiconArgs) -> Result<LexiconSet> {
    LexiconSet::from_files(
        &args.stopwords,
        args.positive.as_deref(),
        args.negative.as_deref(),
    )
}

/// Score a single document.
fn score_document(args: &ScoreArgs, cli_args: &LexometerArgs) -> Result<()> {
    let lexicon = load_lexicon(&args.lexicon)?;
    let text = read_text(&args.input)?;
    let document = RawDocument::new(document_id(&args.input, args.id.as_deref()), text);

    match ArticleScorer::new().score_document(&document, &lexicon)? {
        ScoreOutcome::Scored(record) => output_records(&[record], cli_args),
        ScoreOutcome::Skipped(skipped) => {
            if args.strict {
                Err(skipped.into_error())
            } else {
                output_result("Document skipped", &skipped, cli_args)
            }
        }
    }
}

/// Show the tokens and sentences of a document.
fn tokenize_document(args: &TokenizeArgs, cli_args: &LexometerArgs) -> Result<()> {
    let mut stopwords = Vec::new();
    for path in &args.stopwords {
        stopwords.extend(read_word_list(path)?);
    }

    let stop_filter = StopFilter::from_words(stopwords).remove_stopped(!args.show_stopped);
    let analyzer = DocumentAnalyzer::with_stop_filter(stop_filter);
    let analyzed = analyzer.tokenize(&read_text(&args.input)?)?;

    let (stopped, kept): (Vec<_>, Vec<_>) =
        analyzed.tokens.into_iter().partition(|t| t.is_stopped());

    let result = TokenizeResult {
        word_count: kept.len(),
        sentence_count: analyzed.sentences.len(),
        tokens: kept.into_iter().map(|t| t.text).collect(),
        stopped: stopped.into_iter().map(|t| t.text).collect(),
        sentences: analyzed.sentences.into_iter().map(|s| s.text).collect(),
    };

    output_result("Tokenized document", &result, cli_args)
}

/// Show syllable estimates.
fn estimate_syllables(args: &SyllablesArgs, cli_args: &LexometerArgs) -> Result<()> {
    let estimates: Vec<SyllableEstimate> = args
        .words
        .iter()
        .map(|word| SyllableEstimate {
            word: word.clone(),
            syllables: syllable::estimate(&word.to_lowercase()),
            complex: syllable::is_complex(&word.to_lowercase()),
        })
        .collect();

    output_result("Syllable estimates", &estimates, cli_args)
}

/// Score every document of an input table.
fn run_batch(args: &BatchArgs, cli_args: &LexometerArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => BatchConfig::from_file(path)?,
        None => BatchConfig::new(),
    };
    let config = args.merge_into(config);
    config.validate()?;

    let input = config
        .input
        .as_ref()
        .ok_or_else(|| LexometerError::config("no input file given"))?;

    let lexicon = Arc::new(LexiconSet::from_files(
        &config.stopword_files,
        config.positive_words.as_deref(),
        config.negative_words.as_deref(),
    )?);
    let records = read_input_file(input)?;
    info!("Read {} input records from {}", records.len(), input.display());

    let source: Arc<dyn DocumentSource> = match &config.text_dir {
        Some(dir) => Arc::new(DirectorySource::new(dir)),
        None => Arc::new(InlineSource::new()),
    };

    let report = BatchRunner::new(lexicon, source)
        .parallel(config.parallel)
        .run(&records)?;

    let writer = RecordWriter::new(config.output_format);
    match &config.output {
        Some(path) => {
            writer.write_to_path(path, &report.records)?;
            let summary = BatchSummary {
                output: path.display().to_string(),
                documents: report.total(),
                scored: report.records.len(),
                skipped: report.skipped.len(),
                duration_ms: report.duration_ms,
            };
            output_result("Batch complete", &summary, cli_args)
        }
        None => writer.write_to_stdout(&report.records),
    }
}
