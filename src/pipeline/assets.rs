// src/pipeline/assets.rs

//! Per-asset processing.
//!
//! Each candidate link is handled in isolation: downloaded, checked
//! against the fingerprint store, staged, probed for a DOI, and settled
//! under its final name. A failure here never aborts the batch.

use std::path::Path;

use crate::error::Result;
use crate::models::AssetOutcome;
use crate::services::{PageFetcher, doi};
use crate::storage::{FingerprintStore, fingerprint};
use crate::utils::name;

/// Processor for individual candidate links.
pub struct AssetProcessor<'a> {
    fetcher: &'a PageFetcher,
    out_dir: &'a Path,
}

impl<'a> AssetProcessor<'a> {
    pub fn new(fetcher: &'a PageFetcher, out_dir: &'a Path) -> Self {
        Self { fetcher, out_dir }
    }

    /// Download one candidate and settle it into the output directory.
    ///
    /// Never returns an error; any failure along the way becomes the
    /// asset's terminal outcome.
    pub async fn process(&self, url: &str, store: &mut dyn FingerprintStore) -> AssetOutcome {
        match self.try_process(url, store).await {
            Ok(outcome) => outcome,
            Err(error) => AssetOutcome::Failed {
                reason: error.to_string(),
            },
        }
    }

    async fn try_process(
        &self,
        url: &str,
        store: &mut dyn FingerprintStore,
    ) -> Result<AssetOutcome> {
        let (status, bytes) = self.fetcher.fetch_bytes(url).await?;

        if status == 401 || status == 403 {
            return Ok(AssetOutcome::Blocked { status });
        }
        if !(200..300).contains(&status) {
            return Ok(AssetOutcome::Failed {
                reason: format!("HTTP {status}"),
            });
        }

        let fingerprint = fingerprint(&bytes);
        if store.contains(&fingerprint) {
            return Ok(AssetOutcome::DuplicateContent);
        }

        // Stage to the output directory so the final rename stays on
        // one filesystem.
        let staged = self.out_dir.join(format!("{fingerprint}.tmp"));
        tokio::fs::write(&staged, &bytes).await?;

        let doi = doi::extract_doi(&staged);
        let file_name = name::final_filename(doi.as_deref(), url);
        let final_path = self.out_dir.join(&file_name);

        if tokio::fs::try_exists(&final_path).await? {
            tokio::fs::remove_file(&staged).await?;
            return Ok(AssetOutcome::NameCollision { file_name });
        }

        tokio::fs::rename(&staged, &final_path).await?;
        store.insert(fingerprint);

        Ok(AssetOutcome::Saved { file_name, doi })
    }
}
