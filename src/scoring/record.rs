//! The per-document output row.
//!
//! Field order and serialized names are the column contract of the batch
//! output. Downstream consumers read columns by these exact names.

use serde::{Deserialize, Serialize};

/// Serialized column names, in output order.
pub const COLUMNS: [&str; 13] = [
    "URL_ID",
    "Positive Score",
    "Negative Score",
    "Polarity Score",
    "Subjectivity Score",
    "Avg Sentence Length",
    "Percentage of Complex Words",
    "Fog Index",
    "Word Count",
    "Complex Word Count",
    "Syllables per Word",
    "Personal Pronouns",
    "Avg Word Length",
];

/// Metrics for one scored document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    #[serde(rename = "URL_ID")]
    pub id: String,

    #[serde(rename = "Positive Score")]
    pub positive_score: usize,

    #[serde(rename = "Negative Score")]
    pub negative_score: usize,

    #[serde(rename = "Polarity Score")]
    pub polarity_score: f64,

    #[serde(rename = "Subjectivity Score")]
    pub subjectivity_score: f64,

    #[serde(rename = "Avg Sentence Length")]
    pub avg_sentence_length: f64,

    #[serde(rename = "Percentage of Complex Words")]
    pub percent_complex_words: f64,

    #[serde(rename = "Fog Index")]
    pub fog_index: f64,

    #[serde(rename = "Word Count")]
    pub word_count: usize,

    #[serde(rename = "Complex Word Count")]
    pub complex_word_count: usize,

    #[serde(rename = "Syllables per Word")]
    pub syllables_per_word: f64,

    #[serde(rename = "Personal Pronouns")]
    pub personal_pronouns: usize,

    #[serde(rename = "Avg Word Length")]
    pub avg_word_length: f64,
}
