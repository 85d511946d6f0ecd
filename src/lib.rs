//! Wordfreq-Crawler: word n-gram frequencies for a small website
//!
//! This crate crawls a site from a seed URL, follows internal links up to a
//! bounded depth, collects the visible text of every page and reports the most
//! frequent word n-grams.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod frequency;
pub mod output;
pub mod state;

use thiserror::Error;

/// Main error type for crawl operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to read response body from {url}: {source}")]
    Body { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

impl CrawlError {
    /// Returns the URL whose fetch caused this error, if any
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Http { url, .. } | Self::HttpStatus { url, .. } | Self::Body { url, .. } => {
                Some(url.as_str())
            }
            _ => None,
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for crawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, CrawlConfig, FailurePolicy};
pub use crawler::{crawl, run_crawl, word_frequencies, Crawler, Fetcher, HttpFetcher};
pub use frequency::{top_k, FrequencyTable};
pub use state::CrawlState;
