use std::collections::BTreeMap;

/// Reverse adjacency of every link observed during a crawl
///
/// Maps each link target to the pages seen linking to it, in the order the
/// links were observed. The same source linking twice yields two entries.
/// Targets outside the search prefix are recorded too, so the outgoing and
/// broken-link reports can see them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkGraph {
    referrers: BTreeMap<String, Vec<String>>,
}

impl LinkGraph {
    /// Creates an empty link graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `from` links to `to`
    pub fn add_link(&mut self, from: &str, to: &str) {
        self.referrers
            .entry(to.to_string())
            .or_default()
            .push(from.to_string());
    }

    /// Pages observed linking to `url`, in observation order
    ///
    /// Returns an empty slice for URLs nothing links to.
    pub fn referrers(&self, url: &str) -> &[String] {
        self.referrers.get(url).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if at least one link to `url` was observed
    pub fn contains(&self, url: &str) -> bool {
        self.referrers.contains_key(url)
    }

    /// Every link target, in lexicographic order
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.referrers.keys().map(String::as_str)
    }

    /// Number of distinct link targets
    pub fn len(&self) -> usize {
        self.referrers.len()
    }

    /// Returns true if no links were recorded
    pub fn is_empty(&self) -> bool {
        self.referrers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph = LinkGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
        assert!(graph.referrers("https://example.com").is_empty());
    }

    #[test]
    fn test_add_link_records_reverse_edge() {
        let mut graph = LinkGraph::new();
        graph.add_link("https://example.com", "https://example.com/about");

        assert!(graph.contains("https://example.com/about"));
        assert!(!graph.contains("https://example.com"));
        assert_eq!(
            graph.referrers("https://example.com/about"),
            ["https://example.com".to_string()]
        );
    }

    #[test]
    fn test_duplicate_links_preserved() {
        let mut graph = LinkGraph::new();
        graph.add_link("https://example.com", "https://example.com/about");
        graph.add_link("https://example.com", "https://example.com/about");

        assert_eq!(graph.referrers("https://example.com/about").len(), 2);
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.referrers.values().map(Vec::len).sum::<usize>(), 2);
    }

    #[test]
    fn test_referrers_keep_observation_order() {
        let mut graph = LinkGraph::new();
        graph.add_link("https://example.com/z", "https://example.com/target");
        graph.add_link("https://example.com/a", "https://example.com/target");

        assert_eq!(
            graph.referrers("https://example.com/target"),
            [
                "https://example.com/z".to_string(),
                "https://example.com/a".to_string()
            ]
        );
    }

    #[test]
    fn test_targets_sorted() {
        let mut graph = LinkGraph::new();
        graph.add_link("https://example.com", "https://example.com/b");
        graph.add_link("https://example.com", "https://example.com/a");
        graph.add_link("https://example.com", "https://other.org");

        let targets: Vec<_> = graph.targets().collect();
        assert_eq!(
            targets,
            vec![
                "https://example.com/a",
                "https://example.com/b",
                "https://other.org"
            ]
        );
    }

    #[test]
    fn test_self_link() {
        let mut graph = LinkGraph::new();
        graph.add_link("https://example.com", "https://example.com");
        assert_eq!(
            graph.referrers("https://example.com"),
            ["https://example.com".to_string()]
        );
    }
}
