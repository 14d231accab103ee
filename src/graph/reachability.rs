//! Back-link reachability from the seed
//!
//! Walks the reverse adjacency breadth-first, from a page to the pages that
//! link to it. A crawled page that this walk never reaches has no chain of
//! referrers leading back to the seed; those pages make up the "can't get
//! home" list in the summary report.

use crate::graph::LinkGraph;
use std::collections::{BTreeSet, HashMap, VecDeque};

/// Outcome of a reachability walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reachability {
    /// Every page reached, the seed included
    pub visited: BTreeSet<String>,

    /// Path from the seed to the first page found at the greatest BFS depth
    pub longest_path: Vec<String>,
}

impl Reachability {
    /// Number of hops along the longest path
    pub fn depth(&self) -> usize {
        self.longest_path.len().saturating_sub(1)
    }

    /// Returns true if the walk reached `url`
    pub fn reached(&self, url: &str) -> bool {
        self.visited.contains(url)
    }
}

/// Runs the reachability walk from `seed` over `graph`
///
/// Each page is visited at most once. Because the walk is breadth-first, the
/// longest path it produces ends at a node of maximum BFS depth; among nodes
/// at that depth the first one discovered wins. This is the deepest node of the
/// BFS tree, not the longest simple path in the graph.
///
/// # Example
///
/// ```
/// use sitecrawl::graph::{analyze, LinkGraph};
///
/// let mut graph = LinkGraph::new();
/// graph.add_link("https://example.com/a", "https://example.com");
///
/// let reach = analyze("https://example.com", &graph);
/// assert_eq!(reach.depth(), 1);
/// assert!(reach.reached("https://example.com/a"));
/// ```
pub fn analyze(seed: &str, graph: &LinkGraph) -> Reachability {
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut depths: HashMap<&str, usize> = HashMap::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    depths.insert(seed, 0);
    queue.push_back(seed);

    let mut deepest = seed;
    let mut deepest_depth = 0;

    while let Some(current) = queue.pop_front() {
        let next_depth = depths[current] + 1;

        for referrer in graph.referrers(current) {
            let referrer = referrer.as_str();
            if depths.contains_key(referrer) {
                continue;
            }

            depths.insert(referrer, next_depth);
            parents.insert(referrer, current);
            queue.push_back(referrer);

            if next_depth > deepest_depth {
                deepest = referrer;
                deepest_depth = next_depth;
            }
        }
    }

    let mut longest_path = vec![deepest.to_string()];
    let mut node = deepest;
    while let Some(&parent) = parents.get(node) {
        longest_path.push(parent.to_string());
        node = parent;
    }
    longest_path.reverse();

    tracing::debug!(
        "Reachability from {}: {} pages reached, depth {}",
        seed,
        depths.len(),
        deepest_depth
    );

    Reachability {
        visited: depths.into_keys().map(str::to_string).collect(),
        longest_path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "https://example.com";

    fn url(path: &str) -> String {
        format!("{}/{}", SEED, path)
    }

    #[test]
    fn test_empty_graph_visits_seed() {
        let reach = analyze(SEED, &LinkGraph::new());

        assert!(reach.reached(SEED));
        assert_eq!(reach.visited.len(), 1);
        assert_eq!(reach.longest_path, vec![SEED.to_string()]);
        assert_eq!(reach.depth(), 0);
    }

    #[test]
    fn test_walks_referrers_not_targets() {
        let mut graph = LinkGraph::new();
        // seed -> x, nothing links back to the seed
        graph.add_link(SEED, &url("x"));

        let reach = analyze(SEED, &graph);

        assert!(!reach.reached(&url("x")));
        assert_eq!(reach.depth(), 0);
    }

    #[test]
    fn test_chain_of_referrers() {
        let mut graph = LinkGraph::new();
        graph.add_link(&url("a"), SEED);
        graph.add_link(&url("b"), &url("a"));
        graph.add_link(&url("c"), &url("b"));

        let reach = analyze(SEED, &graph);

        assert_eq!(reach.depth(), 3);
        assert_eq!(
            reach.longest_path,
            vec![SEED.to_string(), url("a"), url("b"), url("c")]
        );
    }

    #[test]
    fn test_cycle_terminates() {
        let mut graph = LinkGraph::new();
        graph.add_link(&url("a"), SEED);
        graph.add_link(SEED, &url("a"));
        graph.add_link(&url("a"), &url("a"));

        let reach = analyze(SEED, &graph);

        assert_eq!(reach.visited.len(), 2);
        assert_eq!(reach.longest_path, vec![SEED.to_string(), url("a")]);
    }

    #[test]
    fn test_first_found_wins_ties() {
        let mut graph = LinkGraph::new();
        graph.add_link(&url("first"), SEED);
        graph.add_link(&url("second"), SEED);

        let reach = analyze(SEED, &graph);

        assert_eq!(reach.depth(), 1);
        assert_eq!(reach.longest_path, vec![SEED.to_string(), url("first")]);
    }

    #[test]
    fn test_shortest_route_used_for_depth() {
        let mut graph = LinkGraph::new();
        // a reaches the seed directly and via b
        graph.add_link(&url("a"), SEED);
        graph.add_link(&url("b"), SEED);
        graph.add_link(&url("a"), &url("b"));

        let reach = analyze(SEED, &graph);

        assert_eq!(reach.depth(), 1);
        assert_eq!(reach.visited.len(), 3);
    }

    #[test]
    fn test_duplicate_edges_visit_once() {
        let mut graph = LinkGraph::new();
        graph.add_link(&url("a"), SEED);
        graph.add_link(&url("a"), SEED);

        let reach = analyze(SEED, &graph);

        assert_eq!(reach.visited.len(), 2);
    }
}
