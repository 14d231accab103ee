//! Link graph and the analyses run over it
//!
//! The crawl records a single reverse-adjacency graph; the reachability walk
//! consumes that same structure to build the summary report.

mod link_graph;
mod reachability;

pub use link_graph::LinkGraph;
pub use reachability::{analyze, Reachability};
