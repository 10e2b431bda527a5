//! Text analysis module for Lexometer.
//!
//! This module turns raw article text into the two sequences every metric is
//! computed from: stop-filtered word tokens and raw-text sentence spans.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
