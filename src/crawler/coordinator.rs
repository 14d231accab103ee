//! Crawl orchestration
//!
//! This module contains the main crawl loop. It drains the frontier one URL at
//! a time, fetching each page, extracting and resolving its links, queueing the
//! in-scope ones, and recording every link in the reverse link graph.
//!
//! The loop is strictly sequential: one fetch is in flight at any moment,
//! followed by the politeness delay.

use crate::config::LinkLimit;
use crate::crawler::frontier::Frontier;
use crate::crawler::result::CrawlResult;
use crate::crawler::{Fetcher, LinkExtractor};
use crate::url::{normalize_url, resolve_href};
use crate::CrawlError;
use std::time::{Duration, Instant};

/// Progress is logged every this many pages
const PROGRESS_INTERVAL: usize = 10;

/// Options controlling a single crawl
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Substring in-scope URLs must contain; defaults to the normalized seed
    pub search_prefix: Option<String>,

    /// Maximum number of pages to fetch
    pub link_limit: LinkLimit,

    /// Pause after each fetch
    pub politeness_delay: Duration,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            search_prefix: None,
            link_limit: LinkLimit::DEFAULT,
            politeness_delay: Duration::from_millis(100),
        }
    }
}

/// Breadth-first crawler over a [`Fetcher`] and a [`LinkExtractor`]
pub struct Crawler<F, E> {
    fetcher: F,
    extractor: E,
    options: CrawlOptions,
}

impl<F: Fetcher, E: LinkExtractor> Crawler<F, E> {
    /// Creates a new crawler
    pub fn new(fetcher: F, extractor: E, options: CrawlOptions) -> Self {
        Self {
            fetcher,
            extractor,
            options,
        }
    }

    /// Runs a complete crawl from `seed`
    ///
    /// # Crawl Loop
    ///
    /// While the frontier is non-empty and fewer than `link_limit` pages have
    /// been fetched:
    ///
    /// 1. Dequeue the oldest URL and fetch it; it now counts as crawled
    /// 2. If the page is not-found, mark it broken and keep going
    /// 3. Resolve each extracted href against the page URL; skip malformed ones
    /// 4. Queue resolved URLs that contain the search prefix and were never
    ///    queued, remembering which page discovered them
    /// 5. Record every resolved link in the reverse link graph, in scope or not
    /// 6. Sleep the politeness delay if another fetch will follow
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlResult)` - The crawl finished
    /// * `Err(CrawlError)` - The seed itself is not a valid http(s) URL
    pub async fn run(&self, seed: &str) -> Result<CrawlResult, CrawlError> {
        let seed = normalize_url(seed)?;
        let search_prefix = self
            .options
            .search_prefix
            .clone()
            .unwrap_or_else(|| seed.clone());

        tracing::info!(
            "Starting crawl at {} (search prefix: {}, link limit: {})",
            seed,
            search_prefix,
            self.options.link_limit
        );

        let mut frontier = Frontier::new();
        frontier.enqueue(seed.clone());
        let mut result = CrawlResult::new(seed, search_prefix);

        let start_time = Instant::now();

        while self.options.link_limit.allows(result.files_found()) {
            let current = match frontier.dequeue() {
                Ok(url) => url,
                Err(_) => {
                    tracing::info!("Frontier is empty, crawl complete");
                    break;
                }
            };

            self.process_url(&current, &mut frontier, &mut result).await;

            let pages_crawled = result.files_found();
            if pages_crawled % PROGRESS_INTERVAL == 0 {
                tracing::info!(
                    "Progress: {} pages crawled, {} in frontier",
                    pages_crawled,
                    frontier.pending_len()
                );
            }

            let more_to_fetch =
                !frontier.is_empty() && self.options.link_limit.allows(result.files_found());
            if more_to_fetch && !self.options.politeness_delay.is_zero() {
                tokio::time::sleep(self.options.politeness_delay).await;
            }
        }

        if !frontier.is_empty() {
            tracing::info!(
                "Link limit {} reached with {} URLs still queued",
                self.options.link_limit,
                frontier.pending_len()
            );
        }

        tracing::info!(
            "Crawl completed: {} pages crawled ({} broken) in {:?}",
            result.files_found(),
            result.broken().len(),
            start_time.elapsed()
        );

        Ok(result)
    }

    /// Fetches one page and folds its links into the crawl state
    async fn process_url(&self, current: &str, frontier: &mut Frontier, result: &mut CrawlResult) {
        tracing::debug!("Processing URL: {}", current);

        let page = self.fetcher.fetch(current).await;
        result.record_crawled(current);

        if page.is_not_found() {
            tracing::debug!("Broken page: {}", current);
            result.record_broken(current);
        }

        // Relative links resolve against where the page was actually served
        let base = page.final_url.as_deref().unwrap_or(current);

        for href in self.extractor.extract_hrefs(&page.content) {
            let full = match resolve_href(base, &href) {
                Ok(url) => url,
                Err(e) => {
                    tracing::debug!("Skipping href {:?} on {}: {}", href, current, e);
                    continue;
                }
            };

            if result.in_scope(&full) && frontier.enqueue(full.clone()) {
                tracing::trace!("Queued {} (from {})", full, current);
                result.record_discovery(&full, current);
            }

            result.record_link(current, &full);
        }
    }
}
