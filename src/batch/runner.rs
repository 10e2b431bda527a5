//! Batch runner: scores every input record and collects the results.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::batch::input::InputRecord;
use crate::batch::source::DocumentSource;
use crate::error::Result;
use crate::lexicon::LexiconSet;
use crate::scoring::{ArticleScorer, MetricsRecord, RawDocument, ScoreOutcome, SkippedDocument};

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    /// Scored records, in input order.
    pub records: Vec<MetricsRecord>,
    /// Documents that produced no record.
    pub skipped: Vec<SkippedDocument>,
    pub duration_ms: u64,
}

impl BatchReport {
    /// Number of input records processed.
    pub fn total(&self) -> usize {
        self.records.len() + self.skipped.len()
    }
}

/// Scores input records against a shared lexicon.
///
/// Documents are independent: a failed fetch or a degenerate document is
/// recorded as skipped and the run continues.
pub struct BatchRunner {
    lexicon: Arc<LexiconSet>,
    source: Arc<dyn DocumentSource>,
    scorer: ArticleScorer,
    parallel: bool,
}

impl BatchRunner {
    pub fn new(lexicon: Arc<LexiconSet>, source: Arc<dyn DocumentSource>) -> Self {
        BatchRunner {
            lexicon,
            source,
            scorer: ArticleScorer::new(),
            parallel: false,
        }
    }

    /// Score documents on the rayon thread pool instead of one by one.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    fn process(&self, record: &InputRecord) -> Result<ScoreOutcome> {
        let text = match self.source.fetch(record) {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    "Failed to read document {} from {} source: {e}",
                    record.id,
                    self.source.name()
                );
                String::new()
            }
        };

        let document = RawDocument::new(record.id.clone(), text);
        self.scorer.score_document(&document, &self.lexicon)
    }

    /// Score every record.
    pub fn run(&self, records: &[InputRecord]) -> Result<BatchReport> {
        let start = Instant::now();

        let outcomes: Vec<ScoreOutcome> = if self.parallel {
            records
                .par_iter()
                .map(|record| self.process(record))
                .collect::<Result<Vec<_>>>()?
        } else {
            records
                .iter()
                .map(|record| self.process(record))
                .collect::<Result<Vec<_>>>()?
        };

        let mut report = BatchReport::default();
        for outcome in outcomes {
            match outcome {
                ScoreOutcome::Scored(record) => report.records.push(record),
                ScoreOutcome::Skipped(skipped) => {
                    warn!("Skipped document {}: {}", skipped.id, skipped.reason);
                    report.skipped.push(skipped);
                }
            }
        }
        report.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            "Scored {} of {} documents ({} skipped) in {}ms",
            report.records.len(),
            report.total(),
            report.skipped.len(),
            report.duration_ms
        );

        Ok(report)
    }
}

/// Score a mapping of document id to raw text.
///
/// Skipped documents are absent from the result.
pub fn score_documents<I, K, V>(documents: I, lexicon: &LexiconSet) -> Result<BTreeMap<String, MetricsRecord>>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let scorer = ArticleScorer::new();
    let mut scored = BTreeMap::new();

    for (id, text) in documents {
        let document = RawDocument::new(id, text);
        if let ScoreOutcome::Scored(record) = scorer.score_document(&document, lexicon)? {
            scored.insert(record.id.clone(), record);
        }
    }

    Ok(scored)
}
