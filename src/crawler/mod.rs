//! Crawler module for page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - The FIFO frontier that makes the crawl breadth-first
//! - The `Fetcher` and `LinkExtractor` seams and their HTTP/HTML implementations
//! - The crawl loop that builds a `CrawlResult`

mod coordinator;
mod fetcher;
mod frontier;
mod parser;
mod result;

pub use coordinator::{CrawlOptions, Crawler};
pub use fetcher::{build_http_client, Fetcher, HttpFetcher, Page};
pub use frontier::Frontier;
pub use parser::{HtmlLinkExtractor, LinkExtractor};
pub use result::CrawlResult;

use crate::config::Config;
use crate::CrawlError;
use std::time::Duration;

/// Runs a complete crawl over HTTP
///
/// This is the main entry point for crawling a live site. It will:
/// 1. Build the HTTP client from the configuration
/// 2. Settle the seed by following its redirects
/// 3. Crawl breadth-first within the search prefix
///
/// # Arguments
///
/// * `seed` - The starting URL
/// * `search_prefix` - Scope substring; `None` uses the settled seed
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlResult)` - Crawl completed
/// * `Err(CrawlError)` - The HTTP client could not be built or the seed is invalid
///
/// # Example
///
/// ```no_run
/// use sitecrawl::config::Config;
/// use sitecrawl::crawler::crawl;
///
/// # async fn example() -> Result<(), sitecrawl::CrawlError> {
/// let result = crawl("https://example.com/", None, &Config::default()).await?;
/// println!("{} pages", result.files_found());
/// # Ok(())
/// # }
/// ```
pub async fn crawl(
    seed: &str,
    search_prefix: Option<String>,
    config: &Config,
) -> Result<CrawlResult, CrawlError> {
    let fetcher = HttpFetcher::new(
        &config.user_agent,
        Duration::from_secs(config.crawler.request_timeout_secs),
    )?;

    let seed = fetcher.final_url(seed).await;

    let options = CrawlOptions {
        search_prefix,
        link_limit: config.crawler.link_limit,
        politeness_delay: Duration::from_millis(config.crawler.politeness_delay_ms),
    };

    Crawler::new(fetcher, HtmlLinkExtractor, options)
        .run(&seed)
        .await
}
