//! Run summary
//!
//! Diagnostics are streamed to the sink as they are produced; the report only
//! keeps the counters shown in the verbose end-of-run summary.

use crate::diagnostic::{Diagnostic, DiagnosticKind};

/// Summary statistics for a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Total number of diagnostics
    pub total: usize,

    /// Number of identifier/value mismatches
    pub mismatches: usize,

    /// Number of anagram findings (both passes)
    pub anagrams: usize,

    /// Number of cross-scheme mismatches
    pub unexpected_names: usize,

    /// Number of source files parsed
    pub files_checked: usize,

    /// Number of tagged fields audited
    pub fields_checked: usize,
}

/// Counters for one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub summary: ReportSummary,
}

impl Report {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a diagnostic
    pub fn add_diagnostic(&mut self, diagnostic: &Diagnostic) {
        match diagnostic.kind {
            DiagnosticKind::Mismatch => self.summary.mismatches += 1,
            DiagnosticKind::Anagram => self.summary.anagrams += 1,
            DiagnosticKind::UnexpectedName => self.summary.unexpected_names += 1,
        }

        self.summary.total += 1;
    }

    pub fn record_file(&mut self) {
        self.summary.files_checked += 1;
    }

    pub fn record_field(&mut self) {
        self.summary.fields_checked += 1;
    }

    /// Check if the run produced any findings
    pub fn has_findings(&self) -> bool {
        self.summary.total > 0
    }
}
