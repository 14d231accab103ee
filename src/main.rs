//! sitecrawl main entry point
//!
//! This is the command-line interface for the sitecrawl link auditor.

use anyhow::Context;
use clap::Parser;
use sitecrawl::config::{load_config, Config, LinkLimit};
use sitecrawl::crawler::crawl;
use sitecrawl::output::{render_reports, Action};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// sitecrawl: a polite single-site link auditor
///
/// sitecrawl crawls a website breadth-first from a starting URL, staying inside
/// a search prefix, and reports broken links, links leaving the site, and a
/// structural summary of the pages it found.
#[derive(Parser, Debug)]
#[command(name = "sitecrawl")]
#[command(version)]
#[command(about = "A polite single-site link auditor", long_about = None)]
struct Cli {
    /// URL to start crawling from
    #[arg(value_name = "STARTING_URL")]
    starting_url: String,

    /// Maximum number of pages to fetch, or "infinity" (first value wins)
    #[arg(long = "linklimit", value_name = "N")]
    link_limit: Vec<LinkLimit>,

    /// Only crawl URLs containing this substring (first value wins)
    #[arg(long = "searchprefix", value_name = "PREFIX")]
    search_prefix: Vec<String>,

    /// Report to print after the crawl; may be repeated
    #[arg(long, value_enum, value_name = "ACTION")]
    action: Vec<Action>,

    /// Path to TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(limit) = cli.link_limit.first() {
        config.crawler.link_limit = *limit;
    }
    let search_prefix = cli.search_prefix.into_iter().next();

    tracing::info!(
        "Crawling {} (link limit: {}, prefix: {})",
        cli.starting_url,
        config.crawler.link_limit,
        search_prefix.as_deref().unwrap_or("<seed>")
    );

    let result = match crawl(&cli.starting_url, search_prefix, &config).await {
        Ok(result) => {
            tracing::info!(
                "Crawl completed: {} pages, {} broken",
                result.files_found(),
                result.broken().len()
            );
            result
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    print!("{}", render_reports(&cli.action, &result));

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so they never mix with the reports on stdout.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitecrawl=info,warn"),
            1 => EnvFilter::new("sitecrawl=debug,info"),
            2 => EnvFilter::new("sitecrawl=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
