//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the `Fetcher` trait
//! - HTML parsing into tokens and anchors
//! - Depth-first crawl coordination
//! - The crawl-then-aggregate entry points

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::Crawler;
pub use fetcher::{build_http_client, FetchedPage, Fetcher, HttpFetcher};
pub use parser::{parse_html, ParsedPage};

use crate::config::{Config, CrawlConfig};
use crate::frequency::{top_k, FrequencyTable};
use crate::output::CrawlReport;
use crate::CrawlError;
use chrono::Utc;

/// Crawls the site and returns its most frequent n-grams
///
/// This is the main entry point of the library. It will:
/// 1. Fetch the seed page and collect its tokens
/// 2. Follow internal links depth first up to `config.max_depth`
/// 3. Count the n-grams of every requested length over all tokens
///
/// # Arguments
///
/// * `config` - What to crawl and what to report
/// * `fetcher` - Where page content comes from
///
/// # Returns
///
/// * `Ok(FrequencyTable)` - Crawl and aggregation completed
/// * `Err(CrawlError)` - Crawl failed; no partial table is produced
pub async fn word_frequencies<F: Fetcher>(
    config: &CrawlConfig,
    fetcher: &F,
) -> Result<FrequencyTable, CrawlError> {
    let mut crawler = Crawler::new(config.clone(), fetcher);
    let state = crawler.run().await?;

    Ok(top_k(
        state.tokens(),
        &config.ngram_lengths,
        config.most_frequent,
    ))
}

/// Runs a crawl and assembles the full report
pub async fn run_crawl<F: Fetcher>(
    config: &CrawlConfig,
    fetcher: &F,
) -> Result<CrawlReport, CrawlError> {
    let started_at = Utc::now();

    let mut crawler = Crawler::new(config.clone(), fetcher);
    let state = crawler.run().await?;
    let frequencies = top_k(
        state.tokens(),
        &config.ngram_lengths,
        config.most_frequent,
    );

    Ok(CrawlReport::new(
        config,
        state,
        frequencies,
        started_at,
        Utc::now(),
    ))
}

/// Runs a complete crawl over HTTP
///
/// Builds the HTTP client from `config.http` and crawls with `config.crawler`.
pub async fn crawl(config: &Config) -> Result<CrawlReport, CrawlError> {
    let fetcher = HttpFetcher::new(&config.http)?;
    run_crawl(&config.crawler, &fetcher).await
}
