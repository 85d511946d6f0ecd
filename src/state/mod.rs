//! State module for tracking crawl progress
//!
//! `CrawlState` holds everything a crawl accumulates: the URLs it has
//! claimed and the word tokens it has collected.

mod crawl_state;

pub use crawl_state::CrawlState;
