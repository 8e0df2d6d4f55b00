//! Antologia main entry point
//!
//! Running the binary with no arguments performs one full scrape of the
//! configured poetry site and writes the deduplicated collection to disk.

use antologia::config::load_config;
use antologia::traverse::run_scrape;
use antologia::Config;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Antologia: a poem harvester for amediavoz.com
///
/// Crawls the site's index pages, segments every poet page into discrete
/// poem records, and writes the deduplicated collection as JSON.
#[derive(Parser, Debug)]
#[command(name = "antologia")]
#[command(version)]
#[command(about = "A poem harvester for amediavoz.com", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file; built-in defaults when omitted
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

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

    // Load configuration or fall back to the built-in defaults
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    tracing::info!(
        "Scraping {} ({} index pages)",
        config.site.base_url,
        config.site.index_pages.len()
    );

    let records_path = config.output.records_path.clone();
    let records = run_scrape(config).await?;

    println!("✓ Scrape finished");
    println!("  {} unique poems saved", records.len());
    println!("  Output: {}", records_path);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("antologia=info,warn"),
            1 => EnvFilter::new("antologia=debug,info"),
            2 => EnvFilter::new("antologia=trace,debug"),
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
