//! Configuration module for sitecrawl
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every key has a default, so a crawl can run without one.
//!
//! # Example
//!
//! ```no_run
//! use sitecrawl::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("sitecrawl.toml")).unwrap();
//! println!("Politeness delay: {}ms", config.crawler.politeness_delay_ms);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, LinkLimit, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
