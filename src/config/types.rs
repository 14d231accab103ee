use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Main configuration structure for sitecrawl
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum number of pages to fetch
    #[serde(rename = "link-limit", default)]
    pub link_limit: LinkLimit,

    /// Pause between consecutive fetches (milliseconds)
    #[serde(rename = "politeness-delay-ms", default = "default_politeness_delay_ms")]
    pub politeness_delay_ms: u64,

    /// Per-request timeout (seconds)
    #[serde(rename = "request-timeout-secs", default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            link_limit: LinkLimit::default(),
            politeness_delay_ms: default_politeness_delay_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_politeness_delay_ms() -> u64 {
    100
}

fn default_request_timeout_secs() -> u64 {
    5
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name", default = "default_crawler_name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version", default = "default_crawler_version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url", default)]
    pub contact_url: Option<String>,
}

impl UserAgentConfig {
    /// Formats the User-Agent header value
    ///
    /// Format: `CrawlerName/Version` or `CrawlerName/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        match &self.contact_url {
            Some(contact) => format!(
                "{}/{} (+{})",
                self.crawler_name, self.crawler_version, contact
            ),
            None => format!("{}/{}", self.crawler_name, self.crawler_version),
        }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: default_crawler_name(),
            crawler_version: default_crawler_version(),
            contact_url: None,
        }
    }
}

fn default_crawler_name() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

fn default_crawler_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Upper bound on the number of pages a crawl may fetch
///
/// Accepts a non-negative integer or the word `infinity` when parsed from the
/// command line or a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawLinkLimit")]
pub enum LinkLimit {
    /// Stop after this many pages have been fetched
    Bounded(usize),
    /// Crawl until the frontier is exhausted
    Unbounded,
}

impl LinkLimit {
    /// Default limit when none is configured
    pub const DEFAULT: LinkLimit = LinkLimit::Bounded(1000);

    /// Returns true if another page may be fetched after `crawled` pages
    pub fn allows(&self, crawled: usize) -> bool {
        match self {
            Self::Bounded(limit) => crawled < *limit,
            Self::Unbounded => true,
        }
    }
}

impl Default for LinkLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for LinkLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(limit) => write!(f, "{}", limit),
            Self::Unbounded => f.write_str("infinity"),
        }
    }
}

impl FromStr for LinkLimit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("infinity") || s.eq_ignore_ascii_case("inf") {
            return Ok(Self::Unbounded);
        }

        s.parse::<usize>().map(Self::Bounded).map_err(|_| {
            format!(
                "link limit must be a non-negative integer or \"infinity\", got '{}'",
                s
            )
        })
    }
}

/// Shape of `link-limit` as written in TOML: a number or a word
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLinkLimit {
    Count(usize),
    Word(String),
}

impl TryFrom<RawLinkLimit> for LinkLimit {
    type Error = String;

    fn try_from(raw: RawLinkLimit) -> Result<Self, Self::Error> {
        match raw {
            RawLinkLimit::Count(limit) => Ok(Self::Bounded(limit)),
            RawLinkLimit::Word(word) => word.parse(),
        }
    }
}
