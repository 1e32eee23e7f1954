//! Per-asset outcomes and run statistics.

use serde::Serialize;

/// Terminal state of one candidate link.
///
/// Every candidate ends in exactly one of these; the aggregator
/// pattern-matches on it, so no error is ever silently swallowed on the
/// way to the run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetOutcome {
    /// Stored in the output directory under its final name.
    Saved {
        file_name: String,
        doi: Option<String>,
    },

    /// Byte-identical content was already saved in an earlier run or
    /// earlier in this one.
    DuplicateContent,

    /// A file with the derived name already exists on disk; the staged
    /// download was discarded without touching it.
    NameCollision { file_name: String },

    /// The server refused the request (401/403).
    Blocked { status: u16 },

    /// Any other per-asset failure; the batch continues.
    Failed { reason: String },
}

/// Counters for one harvest run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Candidate PDF links discovered on the page
    pub found: usize,

    /// Files newly written this run
    pub downloaded: usize,

    /// Downloads whose leading pages contained a DOI
    pub with_doi: usize,

    /// Downloads saved under the fallback name
    pub no_doi: usize,

    /// Candidates discarded as duplicates (by content or by name)
    pub skipped: usize,
}

impl RunStats {
    /// Fold one asset outcome into the counters.
    ///
    /// Blocked and failed assets appear in the log but in no counter.
    pub fn record(&mut self, outcome: &AssetOutcome) {
        match outcome {
            AssetOutcome::Saved { doi: Some(_), .. } => {
                self.downloaded += 1;
                self.with_doi += 1;
            }
            AssetOutcome::Saved { doi: None, .. } => {
                self.downloaded += 1;
                self.no_doi += 1;
            }
            AssetOutcome::DuplicateContent | AssetOutcome::NameCollision { .. } => {
                self.skipped += 1;
            }
            AssetOutcome::Blocked { .. } | AssetOutcome::Failed { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_saved_with_doi() {
        let mut stats = RunStats::default();
        stats.record(&AssetOutcome::Saved {
            file_name: "10.1000_xyz123.pdf".into(),
            doi: Some("10.1000/xyz123".into()),
        });
        assert_eq!(stats.downloaded, 1);
        assert_eq!(stats.with_doi, 1);
        assert_eq!(stats.no_doi, 0);
    }

    #[test]
    fn record_saved_without_doi() {
        let mut stats = RunStats::default();
        stats.record(&AssetOutcome::Saved {
            file_name: "NO_DOI_report.pdf".into(),
            doi: None,
        });
        assert_eq!(stats.downloaded, 1);
        assert_eq!(stats.no_doi, 1);
    }

    #[test]
    fn record_duplicates_as_skipped() {
        let mut stats = RunStats::default();
        stats.record(&AssetOutcome::DuplicateContent);
        stats.record(&AssetOutcome::NameCollision {
            file_name: "10.1000_xyz123.pdf".into(),
        });
        assert_eq!(stats.skipped, 2);
        assert_eq!(stats.downloaded, 0);
    }

    #[test]
    fn blocked_and_failed_touch_no_counter() {
        let mut stats = RunStats::default();
        stats.record(&AssetOutcome::Blocked { status: 403 });
        stats.record(&AssetOutcome::Failed {
            reason: "HTTP 500".into(),
        });
        assert_eq!(stats, RunStats::default());
    }
}
