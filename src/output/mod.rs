//! Output module for rendering crawl reports
//!
//! This module handles:
//! - Selecting which reports to print from the requested actions
//! - Rendering the broken-links, outgoing-links and summary reports

mod report;

pub use report::{broken_links_report, outgoing_links_report, summary_report, Summary};

use crate::crawler::CrawlResult;
use clap::ValueEnum;
use std::collections::BTreeSet;

/// A report that can be requested on the command line
///
/// Variants are declared in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Action {
    /// Referrer and target of every link into a broken page
    #[value(name = "brokenlinks")]
    BrokenLinks,

    /// Every link target outside the search prefix
    #[value(name = "outgoinglinks")]
    OutgoingLinks,

    /// Page count, deepest back-link path and unreachable pages
    #[value(name = "summary")]
    Summary,
}

/// Renders the requested reports
///
/// Reports always come out in the order broken links, outgoing links,
/// summary, each at most once, whatever order or repetition the actions were
/// given in. No actions render nothing.
///
/// # Arguments
///
/// * `actions` - The requested reports
/// * `result` - The finished crawl
pub fn render_reports(actions: &[Action], result: &CrawlResult) -> String {
    let actions: BTreeSet<Action> = actions.iter().copied().collect();

    let mut out = String::new();
    for action in actions {
        tracing::debug!("Rendering {:?} report", action);
        let report = match action {
            Action::BrokenLinks => broken_links_report(result),
            Action::OutgoingLinks => outgoing_links_report(result),
            Action::Summary => summary_report(result),
        };
        out.push_str(&report);
    }

    out
}
