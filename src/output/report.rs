//! Plain-text report renderers
//!
//! Each renderer is a pure function of the crawl result and returns the text
//! to print, including its header line. Line order is deterministic so that
//! repeated crawls of an unchanged site produce identical output.

use crate::crawler::CrawlResult;
use crate::graph::{analyze, Reachability};

/// Renders the broken-links report
///
/// One `referrer, broken` line per recorded link into a broken page. A page
/// linked twice from the same referrer is listed twice.
pub fn broken_links_report(result: &CrawlResult) -> String {
    let mut out = String::from("Broken Links:\n");

    for broken in result.broken() {
        for referrer in result.link_graph().referrers(broken) {
            out.push_str(&format!("{}, {}\n", referrer, broken));
        }
    }

    out
}

/// Renders the outgoing-links report
///
/// Every link target outside the search prefix, once each.
pub fn outgoing_links_report(result: &CrawlResult) -> String {
    let mut out = String::from("Outgoing Links:\n");

    for target in result.link_graph().targets() {
        if !result.in_scope(target) {
            out.push_str(&format!("{}\n", target));
        }
    }

    out
}

/// Structural summary of a crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Number of pages fetched
    pub files_found: usize,

    /// Hops along `longest_path`
    pub longest_path_depth: usize,

    /// Deepest back-link chain from the seed
    pub longest_path: Vec<String>,

    /// Crawled, non-broken pages with no back-link chain to the seed
    pub cant_get_home: Vec<String>,
}

impl Summary {
    /// Builds the summary from a crawl and its reachability walk
    pub fn new(result: &CrawlResult, reachability: &Reachability) -> Self {
        let cant_get_home = result
            .crawled()
            .iter()
            .filter(|url| !reachability.reached(url) && !result.broken().contains(*url))
            .cloned()
            .collect();

        Self {
            files_found: result.files_found(),
            longest_path_depth: reachability.depth(),
            longest_path: reachability.longest_path.clone(),
            cant_get_home,
        }
    }

    /// Runs the reachability walk and builds the summary
    pub fn from_result(result: &CrawlResult) -> Self {
        let reachability = analyze(result.seed(), result.link_graph());
        Self::new(result, &reachability)
    }

    /// Renders the summary report
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("FilesFound: {}\n", self.files_found));
        out.push_str(&format!("LongestPathDepth: {}\n", self.longest_path_depth));

        out.push_str("LongestPath:\n");
        for url in &self.longest_path {
            out.push_str(&format!("{}\n", url));
        }

        out.push_str("CantGetHome:\n");
        for url in &self.cant_get_home {
            out.push_str(&format!("{}\n", url));
        }

        out
    }
}

/// Renders the summary report for a crawl
pub fn summary_report(result: &CrawlResult) -> String {
    Summary::from_result(result).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "https://example.com";

    fn url(path: &str) -> String {
        format!("{}/{}", SEED, path)
    }

    fn sample_result() -> CrawlResult {
        let mut result = CrawlResult::new(SEED, "example.com");
        for page in [SEED.to_string(), url("a"), url("b"), url("orphan")] {
            result.record_crawled(&page);
        }
        result.record_broken(&url("b"));

        result.record_link(SEED, &url("a"));
        result.record_link(SEED, &url("b"));
        result.record_link(&url("a"), &url("b"));
        result.record_link(&url("a"), SEED);
        result.record_link(&url("a"), "https://external.org/x");
        result.record_link(&url("orphan"), "https://external.org/x");
        result.record_link(SEED, &url("orphan"));
        result
    }

    #[test]
    fn test_broken_links_report() {
        let report = broken_links_report(&sample_result());
        assert_eq!(
            report,
            format!(
                "Broken Links:\n{seed}, {b}\n{a}, {b}\n",
                seed = SEED,
                a = url("a"),
                b = url("b")
            )
        );
    }

    #[test]
    fn test_broken_links_duplicate_referrers() {
        let mut result = CrawlResult::new(SEED, SEED);
        result.record_crawled(SEED);
        result.record_crawled(&url("gone"));
        result.record_broken(&url("gone"));
        result.record_link(SEED, &url("gone"));
        result.record_link(SEED, &url("gone"));

        let report = broken_links_report(&result);
        assert_eq!(report.lines().count(), 3);
    }

    #[test]
    fn test_broken_seed_without_referrers() {
        let mut result = CrawlResult::new(SEED, SEED);
        result.record_crawled(SEED);
        result.record_broken(SEED);

        assert_eq!(broken_links_report(&result), "Broken Links:\n");
    }

    #[test]
    fn test_outgoing_links_report_dedupes() {
        let report = outgoing_links_report(&sample_result());
        assert_eq!(report, "Outgoing Links:\nhttps://external.org/x\n");
    }

    #[test]
    fn test_summary() {
        let summary = Summary::from_result(&sample_result());

        assert_eq!(summary.files_found, 4);
        assert_eq!(summary.longest_path_depth, 1);
        assert_eq!(summary.longest_path, vec![SEED.to_string(), url("a")]);
        assert_eq!(summary.cant_get_home, vec![url("orphan")]);
    }

    #[test]
    fn test_summary_render() {
        let report = summary_report(&sample_result());
        assert_eq!(
            report,
            format!(
                "FilesFound: 4\nLongestPathDepth: 1\nLongestPath:\n{seed}\n{a}\nCantGetHome:\n{orphan}\n",
                seed = SEED,
                a = url("a"),
                orphan = url("orphan")
            )
        );
    }

    #[test]
    fn test_summary_empty_crawl() {
        let result = CrawlResult::new(SEED, SEED);
        assert_eq!(
            summary_report(&result),
            format!(
                "FilesFound: 0\nLongestPathDepth: 0\nLongestPath:\n{}\nCantGetHome:\n",
                SEED
            )
        );
    }

    #[test]
    fn test_single_broken_child() {
        // Seed links to b and c, b is missing, c links back
        let mut result = CrawlResult::new(SEED, SEED);
        for page in [SEED.to_string(), url("b"), url("c")] {
            result.record_crawled(&page);
        }
        result.record_broken(&url("b"));
        result.record_link(SEED, &url("b"));
        result.record_link(SEED, &url("c"));
        result.record_link(&url("c"), SEED);

        assert_eq!(
            broken_links_report(&result),
            format!("Broken Links:\n{}, {}\n", SEED, url("b"))
        );
        assert!(Summary::from_result(&result).cant_get_home.is_empty());
    }

    #[test]
    fn test_chain_with_one_back_link() {
        // seed -> x -> y -> z, only x links back to the seed
        let mut result = CrawlResult::new(SEED, SEED);
        for page in [SEED.to_string(), url("x"), url("y"), url("z")] {
            result.record_crawled(&page);
        }
        result.record_link(SEED, &url("x"));
        result.record_link(&url("x"), &url("y"));
        result.record_link(&url("x"), SEED);
        result.record_link(&url("y"), &url("z"));

        let summary = Summary::from_result(&result);
        assert_eq!(summary.longest_path_depth, 1);
        assert_eq!(summary.longest_path, vec![SEED.to_string(), url("x")]);
        assert_eq!(summary.cant_get_home, vec![url("y"), url("z")]);
    }

    #[test]
    fn test_single_page_site_summary() {
        let mut result = CrawlResult::new(SEED, SEED);
        result.record_crawled(SEED);

        assert_eq!(
            summary_report(&result),
            format!(
                "FilesFound: 1\nLongestPathDepth: 0\nLongestPath:\n{}\nCantGetHome:\n",
                SEED
            )
        );
    }

    #[test]
    fn test_cant_get_home_excludes_broken() {
        let result = sample_result();
        let summary = Summary::from_result(&result);

        for url in &summary.cant_get_home {
            assert!(!result.broken().contains(url));
            assert!(result.crawled().contains(url));
        }
    }
}
