// src/storage/run_log.rs

//! Per-run process log.
//!
//! An explicit handle scoped to one run's output directory rather than
//! a process-wide logger, so concurrent invocations with different
//! output directories cannot interfere. Each line is mirrored to the
//! `log` facade for console output.

use std::path::Path;

use chrono::Local;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::Result;

/// Severity tag for run log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

/// Writer for the run's `process.log`.
///
/// The file is truncated at open; every run starts with a clean log.
pub struct RunLog {
    file: File,
}

impl RunLog {
    /// Create (or truncate) the log file at the given path.
    pub async fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path).await?;
        Ok(Self { file })
    }

    /// Record a routine event.
    pub async fn info(&mut self, message: &str) -> Result<()> {
        log::info!("{}", message);
        self.write(Level::Info, message).await
    }

    /// Record a recoverable problem.
    pub async fn warn(&mut self, message: &str) -> Result<()> {
        log::warn!("{}", message);
        self.write(Level::Warn, message).await
    }

    /// Record a failure.
    pub async fn error(&mut self, message: &str) -> Result<()> {
        log::error!("{}", message);
        self.write(Level::Error, message).await
    }

    async fn write(&mut self, level: Level, message: &str) -> Result<()> {
        let line = format!(
            "{} | {} | {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            level.as_str(),
            message
        );
        self.file.write_all(line.as_bytes()).await?;
        self.file.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn lines_carry_timestamp_and_level() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("process.log");

        let mut run_log = RunLog::create(&path).await.unwrap();
        run_log.info("run started").await.unwrap();
        run_log.warn("slow response").await.unwrap();
        run_log.error("fetch failed").await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("| INFO | run started"));
        assert!(lines[1].ends_with("| WARN | slow response"));
        assert!(lines[2].ends_with("| ERROR | fetch failed"));

        // timestamp | level | message
        for line in lines {
            assert_eq!(line.splitn(3, " | ").count(), 3);
        }
    }

    #[tokio::test]
    async fn create_truncates_previous_run() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("process.log");
        tokio::fs::write(&path, "old run line\n").await.unwrap();

        let mut run_log = RunLog::create(&path).await.unwrap();
        run_log.info("fresh").await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(!content.contains("old run line"));
        assert!(content.contains("fresh"));
    }
}
