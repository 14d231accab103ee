//! Accumulated state of a single crawl
//!
//! A `CrawlResult` is built by the crawler while it runs and handed out
//! read-only when the crawl finishes. The reachability walk and the report
//! renderers only ever borrow it.

use crate::graph::LinkGraph;
use crate::url::matches_prefix;
use std::collections::{BTreeSet, HashMap};

/// Everything a crawl learned about the site
#[derive(Debug, Clone)]
pub struct CrawlResult {
    seed: String,
    search_prefix: String,
    link_graph: LinkGraph,
    crawled: BTreeSet<String>,
    broken: BTreeSet<String>,
    /// First page that linked to each in-scope URL, the seed excluded
    discovered_from: HashMap<String, String>,
    /// Every URL ever enqueued, in discovery order, starting with the seed
    discovery_order: Vec<String>,
}

impl CrawlResult {
    pub(crate) fn new(seed: impl Into<String>, search_prefix: impl Into<String>) -> Self {
        let seed = seed.into();
        Self {
            discovery_order: vec![seed.clone()],
            seed,
            search_prefix: search_prefix.into(),
            link_graph: LinkGraph::new(),
            crawled: BTreeSet::new(),
            broken: BTreeSet::new(),
            discovered_from: HashMap::new(),
        }
    }

    pub(crate) fn record_crawled(&mut self, url: &str) {
        self.crawled.insert(url.to_string());
    }

    pub(crate) fn record_broken(&mut self, url: &str) {
        self.broken.insert(url.to_string());
    }

    /// Records that `url` entered the frontier via a link on `from`
    pub(crate) fn record_discovery(&mut self, url: &str, from: &str) {
        self.discovered_from.insert(url.to_string(), from.to_string());
        self.discovery_order.push(url.to_string());
    }

    pub(crate) fn record_link(&mut self, from: &str, to: &str) {
        self.link_graph.add_link(from, to);
    }

    /// The normalized seed URL
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Substring that in-scope URLs contain
    pub fn search_prefix(&self) -> &str {
        &self.search_prefix
    }

    /// Returns true if `url` lies inside the search prefix
    pub fn in_scope(&self, url: &str) -> bool {
        matches_prefix(&self.search_prefix, url)
    }

    /// Reverse adjacency of every observed link
    pub fn link_graph(&self) -> &LinkGraph {
        &self.link_graph
    }

    /// Pages actually fetched, whatever their status
    pub fn crawled(&self) -> &BTreeSet<String> {
        &self.crawled
    }

    /// Crawled pages that came back not-found
    pub fn broken(&self) -> &BTreeSet<String> {
        &self.broken
    }

    /// Every URL ever enqueued, in the order it was discovered
    pub fn discovery_order(&self) -> &[String] {
        &self.discovery_order
    }

    /// Number of pages fetched
    pub fn files_found(&self) -> usize {
        self.crawled.len()
    }

    /// Path from the seed to `url` along the links that first discovered it
    ///
    /// Returns `None` for URLs that never entered the frontier. The seed's own
    /// path is just the seed.
    pub fn discovery_path(&self, url: &str) -> Option<Vec<String>> {
        if url != self.seed && !self.discovered_from.contains_key(url) {
            return None;
        }

        let mut path = vec![url.to_string()];
        let mut node = url;
        while let Some(from) = self.discovered_from.get(node) {
            path.push(from.clone());
            node = from.as_str();
        }
        path.reverse();

        Some(path)
    }

    /// Longest discovery path, first-discovered wins on ties
    ///
    /// This follows the forward crawl, unlike the back-link walk used for the
    /// summary report.
    pub fn deepest_discovery_path(&self) -> Vec<String> {
        let mut deepest = vec![self.seed.clone()];
        for url in &self.discovery_order {
            if let Some(path) = self.discovery_path(url) {
                if path.len() > deepest.len() {
                    deepest = path;
                }
            }
        }
        deepest
    }
}
