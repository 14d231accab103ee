//! sitecrawl: a polite single-site link auditor
//!
//! This crate crawls a website breadth-first from a seed URL, staying inside a
//! search prefix, and reports broken links, outgoing links, and a structural
//! summary of the pages it found.

pub mod config;
pub mod crawler;
pub mod graph;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for sitecrawl operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Frontier is empty")]
    EmptyFrontier,
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

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(#[from] ::url::ParseError),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
}

/// Result type alias for sitecrawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::{Config, LinkLimit};
pub use crawler::{CrawlOptions, CrawlResult, Crawler, Fetcher, LinkExtractor, Page};
pub use graph::{analyze, LinkGraph, Reachability};
pub use output::{render_reports, Action};
pub use crate::url::{normalize_url, resolve_href};
