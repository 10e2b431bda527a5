//! Criterion benchmarks for Lexometer.
//!
//! Covers article tokenization, single document scoring and batch scoring
//! with and without the rayon thread pool.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lexometer::analysis::analyzer::document::DocumentAnalyzer;
use lexometer::batch::{BatchRunner, InlineSource, InputRecord};
use lexometer::lexicon::LexiconSet;
use lexometer::scoring::{ArticleScorer, RawDocument};

const WORDS: &[&str] = &[
    "the", "company", "reported", "strong", "growth", "in", "revenue", "while", "analysts",
    "expected", "a", "decline", "we", "believe", "our", "profit", "will", "improve", "despite",
    "losses", "and", "uncertainty", "of", "markets", "investors", "welcomed", "the", "news",
];

/// Generate articles of varying length with sentence breaks.
fn generate_articles(count: usize) -> Vec<String> {
    let mut articles = Vec::with_capacity(count);
    for i in 0..count {
        let length = 200 + (i % 300);
        let mut text = String::with_capacity(length * 8);
        for j in 0..length {
            text.push_str(WORDS[(i * 7 + j * 13) % WORDS.len()]);
            if j % 17 == 16 {
                text.push_str(". ");
            } else if j % 41 == 40 {
                text.push_str(", ");
            } else {
                text.push(' ');
            }
        }
        text.push('.');
        articles.push(text);
    }
    articles
}

fn lexicon() -> LexiconSet {
    LexiconSet::new(
        vec!["the", "a", "in", "and", "of", "while", "will"],
        vec!["strong", "growth", "improve", "welcomed"],
        vec!["decline", "losses", "uncertainty"],
    )
}

fn bench_tokenization(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenization");

    let lexicon = lexicon();
    let analyzer = DocumentAnalyzer::from_lexicon(&lexicon);
    let articles = generate_articles(100);

    group.bench_function("tokenize_single_article", |b| {
        b.iter(|| black_box(analyzer.tokenize(black_box(&articles[0]))))
    });

    group.throughput(Throughput::Elements(articles.len() as u64));
    group.bench_function("tokenize_articles", |b| {
        b.iter(|| {
            for article in &articles {
                let _ = black_box(analyzer.tokenize(black_box(article)));
            }
        })
    });

    group.finish();
}

fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring");

    let lexicon = lexicon();
    let scorer = ArticleScorer::new();
    let documents: Vec<RawDocument> = generate_articles(100)
        .into_iter()
        .enumerate()
        .map(|(i, text)| RawDocument::new(i.to_string(), text))
        .collect();

    group.bench_function("score_single_article", |b| {
        b.iter(|| black_box(scorer.score_document(black_box(&documents[0]), &lexicon)))
    });

    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("score_articles", |b| {
        b.iter(|| {
            for document in &documents {
                let _ = black_box(scorer.score_document(black_box(document), &lexicon));
            }
        })
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(20);

    let lexicon = Arc::new(lexicon());
    let records: Vec<InputRecord> = generate_articles(500)
        .into_iter()
        .enumerate()
        .map(|(i, text)| InputRecord::new(i.to_string()).with_text(text))
        .collect();

    group.throughput(Throughput::Elements(records.len() as u64));
    for parallel in [false, true] {
        let runner = BatchRunner::new(Arc::clone(&lexicon), Arc::new(InlineSource::new()))
            .parallel(parallel);
        let name = if parallel { "parallel_batch" } else { "sequential_batch" };
        group.bench_function(name, |b| b.iter(|| black_box(runner.run(black_box(&records)))));
    }

    group.finish();
}

criterion_group!(benches, bench_tokenization, bench_scoring, bench_batch);
criterion_main!(benches);
