use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Number of n-grams reported per length when nothing else is configured
pub const DEFAULT_MOST_FREQUENT: usize = 10;

/// Main configuration structure, mirroring the TOML file layout
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Builds a configuration for `seed` with every other value defaulted
    pub fn for_seed(seed: impl Into<String>) -> Self {
        Self {
            crawler: CrawlConfig::new(seed),
            http: HttpConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// What the crawl does and how far it goes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CrawlConfig {
    /// Seed URL; also the prefix every followed link must start with
    #[serde(default)]
    pub seed: String,

    /// Number of link hops to follow from the seed (0 = seed page only)
    #[serde(rename = "max-depth", default)]
    pub max_depth: u32,

    /// N-gram lengths to report
    #[serde(rename = "ngram-lengths", default = "default_ngram_lengths")]
    pub ngram_lengths: BTreeSet<usize>,

    /// How many of the most frequent n-grams to report per length
    #[serde(rename = "most-frequent", default = "default_most_frequent")]
    pub most_frequent: usize,

    /// What happens when a page cannot be fetched
    #[serde(rename = "on-error", default)]
    pub on_error: FailurePolicy,
}

impl CrawlConfig {
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            max_depth: 0,
            ngram_lengths: default_ngram_lengths(),
            most_frequent: DEFAULT_MOST_FREQUENT,
            on_error: FailurePolicy::default(),
        }
    }

    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_ngram_lengths(mut self, lengths: impl IntoIterator<Item = usize>) -> Self {
        self.ngram_lengths = lengths.into_iter().collect();
        self
    }

    pub fn with_most_frequent(mut self, k: usize) -> Self {
        self.most_frequent = k;
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.on_error = policy;
        self
    }
}

impl Default for CrawlConfig {
    /// Defaults with an empty seed, which validation rejects until one is set
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// Failure handling for individual page fetches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// The first failed fetch aborts the whole crawl
    #[default]
    Abort,

    /// Failed pages are logged and skipped; they stay marked as visited
    Skip,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Total request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection timeout (seconds)
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// Report output configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Report format
    #[serde(default)]
    pub format: OutputFormat,

    /// File to write the report to; stdout when absent
    #[serde(default)]
    pub path: Option<String>,
}

/// Supported report formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain-text table for the terminal
    #[default]
    Table,
    Markdown,
    Json,
}

fn default_ngram_lengths() -> BTreeSet<usize> {
    BTreeSet::from([1])
}

fn default_most_frequent() -> usize {
    DEFAULT_MOST_FREQUENT
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}
