//! N-gram frequency aggregation
//!
//! Turns the token stream collected by a crawl into per-length tables of the
//! most frequent n-grams.

mod counter;
mod table;

pub use counter::{count_ngrams, top_k};
pub use table::{FrequencyTable, NGramCount};
