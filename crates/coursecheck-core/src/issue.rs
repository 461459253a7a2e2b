//! # Issues and the Validation Report
//!
//! A validation run produces [`Issue`]s: classified, human-readable facts
//! about the corpus. The [`ValidationReport`] is the append-only accumulator
//! that owns them for the duration of one run.
//!
//! Checks return their own report and the caller merges; no check ever
//! writes into state it does not own. Issue order inside a report is
//! accumulation order, which the audit keeps deterministic so that two runs
//! over identical input produce identical reports.

use serde::Serialize;

/// How severe an issue is, and whether it can fail a run.
///
/// Only [`Severity::Error`] fails a run; warnings and info notes are
/// advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Diagnostic confirmation, e.g. a file that validated cleanly.
    Info,
    /// Advisory finding that should be reviewed but never fails the run.
    Warning,
    /// Structural or coverage failure; the run verdict becomes FAILED.
    Error,
}

impl Severity {
    /// Lowercase label used in rendered output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified finding from a validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// The issue's severity class.
    pub severity: Severity,
    /// Human-readable description, self-contained (names the file, week, or
    /// skill it concerns).
    pub message: String,
}

/// Append-only accumulator of [`Issue`]s for one validation run.
///
/// Built by value: each check constructs its own report and the run driver
/// merges them in a fixed order. Merging preserves both sides' issue order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<Issue>,
}

impl ValidationReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error. Errors fail the run verdict.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message);
    }

    /// Record a warning. Warnings never fail the run.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.push(Severity::Warning, message);
    }

    /// Record an info note.
    pub fn add_info(&mut self, message: impl Into<String>) {
        self.push(Severity::Info, message);
    }

    fn push(&mut self, severity: Severity, message: impl Into<String>) {
        self.issues.push(Issue {
            severity,
            message: message.into(),
        });
    }

    /// All issues in accumulation order.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Messages of the given severity, in accumulation order.
    pub fn messages(&self, severity: Severity) -> impl Iterator<Item = &str> {
        self.issues
            .iter()
            .filter(move |i| i.severity == severity)
            .map(|i| i.message.as_str())
    }

    /// Number of issues with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    /// Number of errors.
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Number of warnings.
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Number of info notes.
    pub fn info_count(&self) -> usize {
        self.count(Severity::Info)
    }

    /// True iff the report contains no errors.
    pub fn passed(&self) -> bool {
        self.error_count() == 0
    }

    /// Append all of `other`'s issues after this report's own.
    pub fn merge(&mut self, other: ValidationReport) {
        self.issues.extend(other.issues);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_passes() {
        let report = ValidationReport::new();
        assert!(report.passed());
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.issues().len(), 0);
    }

    #[test]
    fn errors_fail_warnings_do_not() {
        let mut report = ValidationReport::new();
        report.add_warning("xp skew in week 3");
        report.add_info("week1/modules.json is valid");
        assert!(report.passed());

        report.add_error("week 2 directory not found");
        assert!(!report.passed());
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert_eq!(report.info_count(), 1);
    }

    #[test]
    fn merge_preserves_order_and_sums_counts() {
        let mut left = ValidationReport::new();
        left.add_error("first");
        left.add_warning("second");

        let mut right = ValidationReport::new();
        right.add_info("third");
        right.add_error("fourth");

        left.merge(right);
        let messages: Vec<_> = left.issues().iter().map(|i| i.message.as_str()).collect();
        assert_eq!(messages, ["first", "second", "third", "fourth"]);
        assert_eq!(left.error_count(), 2);
        assert_eq!(left.warning_count(), 1);
        assert_eq!(left.info_count(), 1);
    }

    #[test]
    fn messages_filters_by_severity() {
        let mut report = ValidationReport::new();
        report.add_error("e1");
        report.add_warning("w1");
        report.add_error("e2");
        let errors: Vec<_> = report.messages(Severity::Error).collect();
        assert_eq!(errors, ["e1", "e2"]);
    }

    #[test]
    fn severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Info.to_string(), "info");
    }
}
