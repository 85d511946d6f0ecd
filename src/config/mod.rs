//! Configuration module for the word-frequency crawler
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use wordfreq_crawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawl.toml")).unwrap();
//! println!("Crawler will follow links {} hops deep", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlConfig, FailurePolicy, HttpConfig, OutputConfig, OutputFormat,
    DEFAULT_MOST_FREQUENT,
};

// Re-export parser and validation functions
pub use parser::{load_config, parse_config, read_config};
pub use validation::validate;
pub(crate) use validation::validate_crawl_config;
