//! Parsing statistics and result structures
//!
//! Every parser returns a [`ParseOutcome`]: the records it produced in
//! file order, the issues it met along the way, and simple counters.

use super::diagnostics::{ParseIssue, Severity};
use serde::Serialize;

/// Parsed records together with what went wrong while producing them
#[derive(Debug, Clone)]
pub struct ParseOutcome<T> {
    /// Successfully parsed records, in source order
    pub records: Vec<T>,

    /// Every issue raised, in the order it was found
    pub issues: Vec<ParseIssue>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

impl<T> ParseOutcome<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            issues: Vec::new(),
            stats: ParseStats::new(),
        }
    }

    /// Number of issues of one severity
    pub fn issue_count(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }

    /// Append another outcome, keeping record order
    pub fn merge(&mut self, other: ParseOutcome<T>) {
        self.records.extend(other.records);
        self.issues.extend(other.issues);
        self.stats.merge(&other.stats);
    }
}

impl<T> Default for ParseOutcome<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Source files opened
    pub files_read: usize,

    /// Source files that contributed nothing because they failed
    pub files_failed: usize,

    /// Candidate lines handed to a record parser
    pub lines_read: usize,

    /// Records successfully parsed
    pub records_parsed: usize,

    /// Lines discarded because of a record-level issue
    pub records_skipped: usize,

    /// Lines skipped because they are not records (procedure files only)
    pub lines_ignored: usize,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of candidate lines that became records, as a percentage
    pub fn success_rate(&self) -> f64 {
        let attempted = self.records_parsed + self.records_skipped;
        if attempted == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / attempted as f64) * 100.0
        }
    }

    pub fn merge(&mut self, other: &ParseStats) {
        self.files_read += other.files_read;
        self.files_failed += other.files_failed;
        self.lines_read += other.lines_read;
        self.records_parsed += other.records_parsed;
        self.records_skipped += other.records_skipped;
        self.lines_ignored += other.lines_ignored;
    }
}
