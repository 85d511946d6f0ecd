//! Report types for finished crawls

use crate::config::CrawlConfig;
use crate::frequency::FrequencyTable;
use crate::state::CrawlState;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to format output: {0}")]
    Format(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Everything reported about one crawl
#[derive(Debug, Clone, Serialize)]
pub struct CrawlReport {
    /// Seed URL of the crawl
    pub seed: String,

    /// Configured maximum link depth
    pub max_depth: u32,

    /// Requested n-gram lengths
    pub ngram_lengths: BTreeSet<usize>,

    /// Requested number of n-grams per length
    pub most_frequent: usize,

    /// When the crawl started
    pub started_at: DateTime<Utc>,

    /// When aggregation finished
    pub finished_at: DateTime<Utc>,

    /// Visited URLs, in visit order
    pub pages_visited: Vec<String>,

    /// Total number of tokens collected
    pub token_count: usize,

    /// Most frequent n-grams per length
    pub frequencies: FrequencyTable,
}

impl CrawlReport {
    /// Assembles a report from a finished crawl
    pub fn new(
        config: &CrawlConfig,
        state: &CrawlState,
        frequencies: FrequencyTable,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        Self {
            seed: config.seed.clone(),
            max_depth: config.max_depth,
            ngram_lengths: config.ngram_lengths.clone(),
            most_frequent: config.most_frequent,
            started_at,
            finished_at,
            pages_visited: state.visited().to_vec(),
            token_count: state.tokens().len(),
            frequencies,
        }
    }

    /// Wall-clock duration of the crawl in seconds
    pub fn duration_seconds(&self) -> f64 {
        (self.finished_at - self.started_at).num_milliseconds() as f64 / 1000.0
    }
}
