//! Page fetching
//!
//! This module defines the [`Fetcher`] seam used by the crawler and the HTTP
//! implementation used by the binary:
//! - Building HTTP clients with a proper user agent string and timeout
//! - GET requests following redirects
//! - Folding every failure into a not-found page so the crawl keeps going

use crate::config::UserAgentConfig;
use reqwest::{redirect::Policy, Client, StatusCode};
use std::future::Future;
use std::time::Duration;

/// Maximum redirect hops followed for a single request
const MAX_REDIRECTS: usize = 10;

/// A fetched page as seen by the crawler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Response body, empty for failed fetches
    pub content: String,

    /// HTTP status code
    pub status: u16,

    /// Final URL after redirects, if it is known
    pub final_url: Option<String>,
}

impl Page {
    /// Creates a page with the given content and status
    pub fn new(content: impl Into<String>, status: u16) -> Self {
        Self {
            content: content.into(),
            status,
            final_url: None,
        }
    }

    /// A successful page
    pub fn ok(content: impl Into<String>) -> Self {
        Self::new(content, StatusCode::OK.as_u16())
    }

    /// An empty not-found page
    pub fn not_found() -> Self {
        Self::new(String::new(), StatusCode::NOT_FOUND.as_u16())
    }

    /// Sets the URL the page was finally served from
    pub fn with_final_url(mut self, final_url: impl Into<String>) -> Self {
        self.final_url = Some(final_url.into());
        self
    }

    /// Returns true if the status is 404 Not Found
    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND.as_u16()
    }
}

/// Retrieves pages for the crawler
///
/// Implementations must not fail: any error is reported through the returned
/// page, normally as [`Page::not_found`].
pub trait Fetcher {
    /// Fetches `url` and returns its content and status
    fn fetch(&self, url: &str) -> impl Future<Output = Page> + Send;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `timeout` - Whole-request timeout
///
/// # Example
///
/// ```no_run
/// use sitecrawl::config::UserAgentConfig;
/// use sitecrawl::crawler::build_http_client;
/// use std::time::Duration;
///
/// let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(5)).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .timeout(timeout)
        .connect_timeout(timeout)
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// [`Fetcher`] backed by a reqwest client
///
/// # Error Mapping
///
/// | Condition | Page |
/// |-----------|------|
/// | 2xx / 3xx | body, real status |
/// | 4xx / 5xx | not-found, empty |
/// | Timeout | not-found, empty |
/// | Connection refused / DNS / TLS | not-found, empty |
/// | Too many redirects | not-found, empty |
/// | Body read failure | not-found, empty |
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with its own HTTP client
    pub fn new(config: &UserAgentConfig, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(build_http_client(config, timeout)?))
    }

    /// Creates a fetcher around an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Follows redirects from `url` and returns where they end
    ///
    /// Used to settle the seed before crawling so that a redirecting start
    /// page does not become its own broken entry. Falls back to `url` itself
    /// when the request fails.
    pub async fn final_url(&self, url: &str) -> String {
        match self.client.get(url).send().await {
            Ok(response) => {
                let final_url = response.url().to_string();
                if final_url.trim_end_matches('/') != url.trim_end_matches('/') {
                    tracing::info!("Seed {} redirected to {}", url, final_url);
                }
                final_url
            }
            Err(e) => {
                tracing::warn!("Could not resolve redirects for {}: {}", url, e);
                url.to_string()
            }
        }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Page {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                // Classify error
                if e.is_timeout() {
                    tracing::warn!("Request timeout for {}", url);
                } else if e.is_connect() {
                    tracing::warn!("Connection failed for {}: {}", url, e);
                } else if e.is_redirect() {
                    tracing::warn!("Too many redirects from {}", url);
                } else {
                    tracing::warn!("Request failed for {}: {}", url, e);
                }
                return Page::not_found();
            }
        };

        let status = response.status();
        let final_url = response.url().to_string();

        if !(status.is_success() || status.is_redirection()) {
            tracing::warn!("HTTP {} for {}", status.as_u16(), url);
            return Page::not_found();
        }

        match response.text().await {
            Ok(body) => Page::new(body, status.as_u16()).with_final_url(final_url),
            Err(e) => {
                tracing::warn!("Failed to read body of {}: {}", url, e);
                Page::not_found()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> UserAgentConfig {
        UserAgentConfig {
            crawler_name: "TestCrawler".to_string(),
            crawler_version: "1.0".to_string(),
            contact_url: Some("https://example.com/about".to_string()),
        }
    }

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&create_test_config(), Duration::from_secs(5));
        assert!(client.is_ok());
    }

    #[test]
    fn test_http_fetcher_new() {
        let fetcher = HttpFetcher::new(&create_test_config(), Duration::from_secs(5));
        assert!(fetcher.is_ok());
    }

    #[test]
    fn test_page_constructors() {
        let page = Page::ok("<html></html>");
        assert_eq!(page.status, 200);
        assert!(!page.is_not_found());
        assert_eq!(page.final_url, None);

        let missing = Page::not_found();
        assert!(missing.is_not_found());
        assert!(missing.content.is_empty());
    }

    #[test]
    fn test_with_final_url() {
        let page = Page::ok("").with_final_url("https://example.com/docs/");
        assert_eq!(page.final_url.as_deref(), Some("https://example.com/docs/"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_not_found() {
        let fetcher = HttpFetcher::new(&create_test_config(), Duration::from_secs(2)).unwrap();
        // Nothing listens on the discard port
        let page = fetcher.fetch("http://127.0.0.1:9/").await;
        assert!(page.is_not_found());
        assert!(page.content.is_empty());
    }

    // Status-code handling is covered against a wiremock server in tests/
}
