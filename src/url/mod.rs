//! URL handling module for sitecrawl
//!
//! This module turns raw hrefs into the normalized keys used throughout the
//! crawl and decides which of them fall inside the search prefix.

mod matcher;
mod normalize;

// Re-export main functions
pub use matcher::matches_prefix;
pub use normalize::{normalize_url, resolve_href};
