// src/pipeline/harvest.rs

//! Harvest pipeline.
//!
//! Fetch the target page, extract PDF candidates, process each one
//! sequentially, and report counters. Only page-level failures abort
//! the run; every asset-level failure is contained and reflected in the
//! log and counters.

use url::Url;

use crate::error::{AppError, Result};
use crate::models::{AssetOutcome, Config, RunStats};
use crate::pipeline::assets::AssetProcessor;
use crate::services::{PageFetcher, links};
use crate::storage::{FileFingerprintStore, FingerprintStore, HASH_LOG, PROCESS_LOG, RunLog};

/// Run the harvest pipeline against a single page URL.
///
/// Returns the run counters, or a run-level error when the page itself
/// cannot be fetched: `AppError::Blocked` for a 401/403 answer,
/// `AppError::Unreachable` for transport failures and other error
/// statuses.
pub async fn run_harvest(config: &Config, page_url: &str) -> Result<RunStats> {
    let out_dir = config.paths.output.as_path();
    tokio::fs::create_dir_all(out_dir).await?;

    let mut run_log = RunLog::create(out_dir.join(PROCESS_LOG)).await?;
    run_log.info(&format!("Run started for {page_url}")).await?;

    let base = Url::parse(page_url)?;
    let fetcher = PageFetcher::new(&config.fetcher)?;
    let mut store = FileFingerprintStore::load(out_dir.join(HASH_LOG)).await?;

    let (status, html) = match fetcher.fetch_page(page_url).await {
        Ok(result) => result,
        Err(error) => {
            run_log
                .error(&format!("Page fetch failed for {page_url}: {error}"))
                .await?;
            return Err(error);
        }
    };
    run_log
        .info(&format!("Fetched {page_url} (HTTP {status})"))
        .await?;

    if status == 401 || status == 403 {
        run_log
            .error(&format!("Access blocked (HTTP {status}), aborting run"))
            .await?;
        return Err(AppError::Blocked(status));
    }
    if !(200..300).contains(&status) {
        run_log
            .error(&format!("Page returned HTTP {status}, aborting run"))
            .await?;
        return Err(AppError::unreachable(format!("HTTP {status}")));
    }

    let candidates = links::extract_pdf_links(&html, &base);
    let mut stats = RunStats {
        found: candidates.len(),
        ..RunStats::default()
    };
    run_log
        .info(&format!("Found {} candidate PDF links", candidates.len()))
        .await?;

    let processor = AssetProcessor::new(&fetcher, out_dir);
    for url in &candidates {
        let outcome = processor.process(url, &mut store).await;
        stats.record(&outcome);
        log_outcome(&mut run_log, url, &outcome).await?;
    }

    store.flush().await?;

    run_log
        .info(&format!(
            "Run complete: {} found, {} downloaded ({} with DOI, {} without), {} skipped",
            stats.found, stats.downloaded, stats.with_doi, stats.no_doi, stats.skipped
        ))
        .await?;

    Ok(stats)
}

/// Write the single terminal log line for one candidate.
async fn log_outcome(run_log: &mut RunLog, url: &str, outcome: &AssetOutcome) -> Result<()> {
    match outcome {
        AssetOutcome::Saved {
            file_name,
            doi: Some(doi),
        } => {
            run_log
                .info(&format!("Saved {url} as {file_name} (DOI {doi})"))
                .await
        }
        AssetOutcome::Saved {
            file_name,
            doi: None,
        } => {
            run_log
                .info(&format!("Saved {url} as {file_name} (no DOI found)"))
                .await
        }
        AssetOutcome::DuplicateContent => {
            run_log
                .info(&format!("Skipped {url}: duplicate content"))
                .await
        }
        AssetOutcome::NameCollision { file_name } => {
            run_log
                .info(&format!("Skipped {url}: {file_name} already exists"))
                .await
        }
        AssetOutcome::Blocked { status } => {
            run_log.warn(&format!("Blocked {url} (HTTP {status})")).await
        }
        AssetOutcome::Failed { reason } => {
            run_log.error(&format!("Failed {url}: {reason}")).await
        }
    }
}
