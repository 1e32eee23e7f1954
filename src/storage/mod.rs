//! Persistence for run artifacts.
//!
//! The output directory holds three kinds of files:
//! - `<name>.pdf` — one per accepted asset
//! - `hash.log` — newline-delimited content fingerprints, across runs
//! - `process.log` — timestamped event lines, fresh per run

mod fingerprints;
mod run_log;

pub use fingerprints::{FileFingerprintStore, FingerprintStore, fingerprint};
pub use run_log::RunLog;

/// Fingerprint log filename inside the output directory.
pub const HASH_LOG: &str = "hash.log";

/// Process log filename inside the output directory.
pub const PROCESS_LOG: &str = "process.log";
