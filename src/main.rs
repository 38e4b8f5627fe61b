//! Docscrape main entry point
//!
//! This is the command-line interface for the docscrape documentation-site
//! statistics scraper.

use anyhow::Context;
use clap::Parser;
use docscrape::cache::HttpPageCache;
use docscrape::config::{load_config, Config};
use docscrape::report::scrape_all;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Docscrape: a documentation-site statistics scraper
///
/// Docscrape crawls a documentation website starting from the base URL,
/// caches every downloaded page on disk, persists the discovered URL graph,
/// and prints four statistics extracted from the parsed HTML.
#[derive(Parser, Debug)]
#[command(name = "docscrape")]
#[command(version = "0.1.0")]
#[command(about = "A documentation-site statistics scraper", long_about = None)]
struct Cli {
    /// Base URL of the documentation site to scrape
    #[arg(value_name = "BASE_URL")]
    base_url: String,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Ignore a persisted URL graph and re-crawl the site
    #[arg(long)]
    fresh: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, or run with defaults when no file is given
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    let base_url = Url::parse(&cli.base_url)
        .with_context(|| format!("invalid base URL: {}", cli.base_url))?;

    let cache = HttpPageCache::new(&config)?;
    let graph_path = PathBuf::from(&config.output.graph_path);

    let time_start = Instant::now();
    let scrap = scrape_all(&cache, &base_url, &graph_path, cli.fresh).await?;

    println!("{}", scrap.to_json()?);
    println!("took {} s", time_start.elapsed().as_secs());

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("docscrape=info,warn"),
            1 => EnvFilter::new("docscrape=debug,info"),
            2 => EnvFilter::new("docscrape=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
