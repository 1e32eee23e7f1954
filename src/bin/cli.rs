//! pdfharvest CLI
//!
//! Thin front-end over the harvest pipeline: takes a page URL, runs one
//! pass, and prints the resulting counters.

use std::path::PathBuf;

use clap::Parser;
use pdfharvest::{error::Result, models::Config, pipeline::run_harvest};

/// pdfharvest - Page-to-PDF batch downloader
#[derive(Parser, Debug)]
#[command(
    name = "pdfharvest",
    version,
    about = "Downloads PDFs linked from a web page and files them by DOI"
)]
struct Cli {
    /// URL of the page to scan for PDF links
    url: String,

    /// Output directory for downloaded files and run logs
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    if let Some(output) = cli.output {
        config.paths.output = output;
    }
    config.validate()?;

    let stats = run_harvest(&config, &cli.url).await?;

    log::info!(
        "Downloaded {} new PDFs ({} with DOI, {} without); skipped {} of {} found",
        stats.downloaded,
        stats.with_doi,
        stats.no_doi,
        stats.skipped,
        stats.found
    );

    Ok(())
}
