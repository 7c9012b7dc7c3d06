//! Statistics tracking for replacement runs

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::replace::engine::{FileOutcome, FileReport};

/// Accumulated counters for one replacement run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Candidate files inspected (including failures)
    pub files_scanned: usize,
    /// Files rewritten in place
    pub files_replaced: usize,
    /// Files without a match, left untouched
    pub files_unchanged: usize,
    /// Files skipped because of a per-file error
    pub files_failed: usize,
    /// Total occurrences replaced across all files
    pub occurrences_replaced: usize,
    /// Bytes read from candidate files
    pub bytes_read: u64,
    /// Bytes written back to rewritten files
    pub bytes_written: u64,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Timestamp of when the summary was collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for RunSummary {
    fn default() -> Self {
        Self {
            files_scanned: 0,
            files_replaced: 0,
            files_unchanged: 0,
            files_failed: 0,
            occurrences_replaced: 0,
            bytes_read: 0,
            bytes_written: 0,
            processing_time_ms: 0,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl RunSummary {
    /// Create a new empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one processed file
    pub fn record(&mut self, report: &FileReport) {
        self.files_scanned += 1;
        self.bytes_read += report.input_size;

        match report.outcome {
            FileOutcome::Replaced { occurrences } => {
                self.files_replaced += 1;
                self.occurrences_replaced += occurrences;
                self.bytes_written += report.output_size;
            }
            FileOutcome::Unchanged => {
                self.files_unchanged += 1;
            }
        }
    }

    /// Record a file that failed and was skipped
    pub fn record_failure(&mut self) {
        self.files_scanned += 1;
        self.files_failed += 1;
    }

    /// Stamp the elapsed time and collection moment
    pub fn finish(&mut self, elapsed: Duration) {
        self.processing_time_ms = elapsed.as_millis() as u64;
        self.collected_at = chrono::Utc::now();
    }

    /// Combine counters from another run
    pub fn combine(&mut self, other: &Self) {
        self.files_scanned += other.files_scanned;
        self.files_replaced += other.files_replaced;
        self.files_unchanged += other.files_unchanged;
        self.files_failed += other.files_failed;
        self.occurrences_replaced += other.occurrences_replaced;
        self.bytes_read += other.bytes_read;
        self.bytes_written += other.bytes_written;
        self.processing_time_ms += other.processing_time_ms;
        self.collected_at = chrono::Utc::now();
    }

    /// Get a formatted one-line summary
    pub fn summary(&self) -> String {
        format!(
            "Replaced {} of {} JSON files in {:.1}s - {} occurrences, {} failed",
            self.files_replaced,
            self.files_scanned,
            self.processing_time_ms as f32 / 1000.0,
            self.occurrences_replaced,
            self.files_failed
        )
    }

    /// Export to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Import from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
