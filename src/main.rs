//! Office-Scout main entry point
//!
//! This is the command-line interface for the office-space listings crawler.

use anyhow::Context;
use clap::Parser;
use office_scout::config::{load_config, validate, Config};
use office_scout::crawler::crawl;
use office_scout::output::{print_summary, write_report};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Office-Scout: a ranked office-space listings crawler
///
/// Crawls the configured listings search endpoint page by page, extracts
/// rent, floor space, and link for every well-formed listing, and writes a
/// report ranked by dollars per square foot.
#[derive(Parser, Debug)]
#[command(name = "office-scout")]
#[command(version)]
#[command(about = "A ranked office-space listings crawler", long_about = None)]
struct Cli {
    /// Exclude office space below this monthly rent [default: 1000]
    #[arg(short, long, value_name = "RENT")]
    rent: Option<u32>,

    /// Exclude office space below this square footage [default: 500]
    #[arg(short, long, value_name = "SQFT")]
    space: Option<u32>,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Write the ranked report here instead of the configured path
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

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

    // Assemble the effective configuration
    let config = build_config(&cli)?;

    tracing::info!(
        "starting crawler with min rent {} and min square footage {}",
        config.search.min_rent,
        config.search.min_space
    );

    let report_path = PathBuf::from(&config.output.report_path);

    // Run the crawl; a timeout-truncated run is still a normal completion
    let result = crawl(config).await.context("crawl failed")?;

    write_report(&result.listings, &report_path)
        .with_context(|| format!("failed to write report to {}", report_path.display()))?;

    if !cli.quiet {
        print_summary(&result);
        println!("Report written to {}", report_path.display());
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("office_scout=info,warn"),
            1 => EnvFilter::new("office_scout=debug,info"),
            2 => EnvFilter::new("office_scout=trace,debug"),
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

/// Assembles the effective configuration from defaults, the optional config
/// file, and CLI overrides (highest precedence)
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(rent) = cli.rent {
        config.search.min_rent = rent;
    }

    if let Some(space) = cli.space {
        config.search.min_space = space;
    }

    if let Some(output) = &cli.output {
        config.output.report_path = output.display().to_string();
    }

    validate(&config).context("invalid configuration")?;

    Ok(config)
}
