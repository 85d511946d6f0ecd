//! Crawler coordinator - main crawl orchestration logic
//!
//! The crawl is depth first: after a page is fetched, its internal links are
//! followed one by one, and each followed page's own links are exhausted
//! before the next sibling link is considered. The pending links of every
//! open page sit on an explicit stack.

use crate::config::{validate_crawl_config, CrawlConfig, FailurePolicy};
use crate::crawler::fetcher::Fetcher;
use crate::crawler::parser::parse_html;
use crate::extract::is_followable;
use crate::state::CrawlState;
use crate::CrawlError;

/// Links of a fetched page that have not been considered yet
struct PendingLinks {
    /// Depth at which these links will be fetched
    depth: u32,
    links: std::vec::IntoIter<String>,
}

/// Main crawler structure
///
/// A crawler owns its configuration, its fetcher and the state of its
/// current run. Fetches happen one at a time; the next one starts only after
/// the previous page has been fully processed.
pub struct Crawler<F> {
    config: CrawlConfig,
    fetcher: F,
    state: CrawlState,
}

impl<F: Fetcher> Crawler<F> {
    /// Creates a new crawler
    ///
    /// # Arguments
    ///
    /// * `config` - What to crawl and how deep
    /// * `fetcher` - Where page content comes from
    pub fn new(config: CrawlConfig, fetcher: F) -> Self {
        Self {
            config,
            fetcher,
            state: CrawlState::new(),
        }
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    /// State of the last run (empty before the first run)
    pub fn state(&self) -> &CrawlState {
        &self.state
    }

    pub fn into_state(self) -> CrawlState {
        self.state
    }

    /// Runs the crawl from the seed URL
    ///
    /// Each run starts from an empty state. Under `FailurePolicy::Abort` the
    /// first failed fetch ends the run with that error; under
    /// `FailurePolicy::Skip` the failed page is logged and the crawl goes on.
    ///
    /// # Returns
    ///
    /// * `Ok(&CrawlState)` - Visited URLs and collected tokens
    /// * `Err(CrawlError)` - Invalid configuration or a failed fetch
    pub async fn run(&mut self) -> Result<&CrawlState, CrawlError> {
        validate_crawl_config(&self.config)?;

        self.state = CrawlState::new();
        tracing::info!(
            "Starting crawl of {} (max depth {})",
            self.config.seed,
            self.config.max_depth
        );

        let mut stack: Vec<PendingLinks> = Vec::new();
        let seed = self.config.seed.clone();
        if let Some(pending) = self.visit(seed, 0).await? {
            stack.push(pending);
        }

        while let Some(top) = stack.last_mut() {
            let Some(link) = top.links.next() else {
                stack.pop();
                continue;
            };
            let depth = top.depth;

            if !is_followable(&link, &self.config.seed, &self.state) {
                tracing::trace!("Skipping link {}", link);
                continue;
            }

            if let Some(pending) = self.visit(link, depth).await? {
                stack.push(pending);
            }
        }

        tracing::info!(
            "Crawl completed: {} pages visited, {} tokens collected",
            self.state.visited().len(),
            self.state.tokens().len()
        );

        Ok(&self.state)
    }

    /// Fetches one page and collects its tokens
    ///
    /// The URL is marked visited before the request, so a page that fails is
    /// never requested again. Returns the page's links when the depth budget
    /// allows following them.
    async fn visit(
        &mut self,
        url: String,
        depth: u32,
    ) -> Result<Option<PendingLinks>, CrawlError> {
        self.state.mark_visited(&url);
        tracing::debug!("Fetching {} (depth {})", url, depth);

        let page = match self.fetcher.get(&url).await {
            Ok(page) => page,
            Err(e) => match self.config.on_error {
                FailurePolicy::Abort => return Err(e),
                FailurePolicy::Skip => {
                    tracing::warn!("Skipping {}: {}", url, e);
                    return Ok(None);
                }
            },
        };

        let parsed = parse_html(&page.body);
        tracing::debug!(
            "Extracted {} tokens and {} anchors from {} (HTTP {}, {}, served from {})",
            parsed.tokens.len(),
            parsed.anchors.len(),
            url,
            page.status_code,
            page.content_type.as_deref().unwrap_or("no content type"),
            page.final_url
        );
        self.state.extend_tokens(parsed.tokens);

        if self.config.max_depth > depth {
            Ok(Some(PendingLinks {
                depth: depth + 1,
                links: parsed.anchors.into_iter(),
            }))
        } else {
            Ok(None)
        }
    }
}
