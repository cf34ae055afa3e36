//! Brochure Scraper main entry point
//!
//! This is the command-line interface for the brochure price scraper.

use anyhow::{bail, Context};
use brochure_scraper::config::{load_config_with_hash, Config};
use brochure_scraper::crawler::{discover_links, run, RunOutcome};
use brochure_scraper::output::print_report;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Brochure Scraper: product codes and prices from a PDF brochure
///
/// Reads every link in the brochure, fetches the linked shop pages and
/// saves the product codes and prices found there to a spreadsheet.
#[derive(Parser, Debug)]
#[command(name = "brochure-scraper")]
#[command(version)]
#[command(about = "Extracts product codes and prices from a PDF brochure's links", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// PDF brochure to read (overrides the config file)
    #[arg(long, value_name = "PDF")]
    input: Option<PathBuf>,

    /// Base path of the output spreadsheet, .xlsx or .csv (overrides the config file)
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// List the brochure links and exit without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;

    if cli.dry_run {
        return handle_dry_run(&config);
    }

    handle_scrape(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("brochure_scraper=info,warn"),
            1 => EnvFilter::new("brochure_scraper=debug,info"),
            2 => EnvFilter::new("brochure_scraper=trace,debug"),
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

/// Builds the run configuration from the config file and the path flags
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => match (&cli.input, &cli.output) {
            (Some(input), Some(output)) => Config::new(input.clone(), output.clone()),
            _ => bail!("either a CONFIG file or both --input and --output are required"),
        },
    };

    if let Some(input) = &cli.input {
        config.input.pdf_path = input.clone();
    }
    if let Some(output) = &cli.output {
        config.output.path = output.clone();
    }

    brochure_scraper::config::validate(&config).context("invalid configuration")?;
    Ok(config)
}

/// Handles the --dry-run mode: lists the links that would be fetched
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    let links = discover_links(config)
        .with_context(|| format!("failed to read {}", config.input_pdf_path().display()))?;

    println!("=== Brochure Scraper Dry Run ===\n");
    println!("Input: {}", config.input_pdf_path().display());
    println!("Output: {}", config.output_path().display());
    println!("Timeout: {}s", config.fetch.timeout_secs);
    println!("\nLinks ({}):", links.len());
    for link in &links {
        println!("  - {}", link);
    }

    Ok(())
}

/// Handles the main scrape operation
async fn handle_scrape(config: Config) -> anyhow::Result<()> {
    tracing::info!(
        "Scraping links from {} into {}",
        config.input_pdf_path().display(),
        config.output_path().display()
    );

    let outcome = run(config).await.context("scrape failed")?;

    print_report(outcome.report());

    match outcome {
        RunOutcome::NoProducts(_) => println!("No products extracted."),
        RunOutcome::Saved { path, report } => {
            println!("Saved {} records to {}", report.records.len(), path.display())
        }
    }

    Ok(())
}
