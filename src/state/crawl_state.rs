//! Accumulated results of one crawl run

use std::collections::HashSet;

/// Visited URLs and collected tokens, both in insertion order
///
/// A `CrawlState` is owned by a single crawler and only grows while the
/// crawl runs. Afterwards it is read-only input for aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlState {
    visited: Vec<String>,
    seen: HashSet<String>,
    tokens: Vec<String>,
}

impl CrawlState {
    /// Creates an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `url` as visited
    ///
    /// Returns false if the URL was already recorded, in which case the
    /// visit order is left untouched.
    pub fn mark_visited(&mut self, url: &str) -> bool {
        if !self.seen.insert(url.to_string()) {
            return false;
        }
        self.visited.push(url.to_string());
        true
    }

    /// Returns true if `url` has already been claimed by this crawl
    pub fn is_visited(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    /// Visited URLs in the order they were claimed
    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    /// Appends tokens extracted from one page
    pub fn extend_tokens<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.tokens.extend(tokens);
    }

    /// All collected tokens in page and document order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}
