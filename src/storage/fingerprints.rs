// src/storage/fingerprints.rs

//! Content fingerprint persistence.
//!
//! One hash per previously saved file, kept as a newline-delimited log
//! so the store survives across runs. The whole file is rewritten at
//! flush; the store is advisory deduplication, not a transactional
//! ledger.

use std::collections::HashSet;
use std::path::PathBuf;

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};

/// Compute the content fingerprint of a byte buffer.
pub fn fingerprint(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Membership store for fingerprints of saved content.
///
/// Execution is single-threaded today; a concurrent pipeline would swap
/// in an implementation that synchronizes the contains/insert pair.
#[async_trait]
pub trait FingerprintStore: Send {
    /// Whether this fingerprint was recorded before.
    fn contains(&self, fingerprint: &str) -> bool;

    /// Record a fingerprint; returns false if it was already present.
    fn insert(&mut self, fingerprint: String) -> bool;

    /// Persist the current membership, replacing the previous record.
    async fn flush(&self) -> Result<()>;
}

/// File-backed fingerprint store.
pub struct FileFingerprintStore {
    path: PathBuf,
    hashes: HashSet<String>,
}

impl FileFingerprintStore {
    /// Load previously recorded fingerprints from a line-delimited log.
    ///
    /// A missing file is an empty store, not an error.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let hashes = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashSet::new(),
            Err(e) => return Err(AppError::Io(e)),
        };
        Ok(Self { path, hashes })
    }

    /// Number of recorded fingerprints.
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    /// Whether the store holds no fingerprints.
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

#[async_trait]
impl FingerprintStore for FileFingerprintStore {
    fn contains(&self, fingerprint: &str) -> bool {
        self.hashes.contains(fingerprint)
    }

    fn insert(&mut self, fingerprint: String) -> bool {
        self.hashes.insert(fingerprint)
    }

    /// Full rewrite via temp-then-rename so a crash mid-write never
    /// leaves a truncated log.
    async fn flush(&self) -> Result<()> {
        let mut lines: Vec<&str> = self.hashes.iter().map(String::as_str).collect();
        lines.sort_unstable();
        let mut body = lines.join("\n");
        if !body.is_empty() {
            body.push('\n');
        }

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(body.as_bytes()).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
