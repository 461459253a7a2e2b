//! # Report Collation
//!
//! Rendering of a finished [`ValidationReport`] into the text report shown
//! to operators, and the binary [`Verdict`] automation depends on.
//!
//! The rendered report lists errors first, then warnings, then info notes.
//! The info section is suppressed when it grows past
//! [`MAX_RENDERED_INFO`] entries; the summary counts always include it.

use crate::issue::{Severity, ValidationReport};

/// Info notes are listed individually only up to this many entries.
pub const MAX_RENDERED_INFO: usize = 20;

/// Binary outcome of a validation run.
///
/// The only signal automation should branch on. Warnings never move the
/// verdict; any error makes it [`Verdict::Failed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Zero errors were recorded.
    Passed,
    /// At least one error was recorded.
    Failed,
}

impl Verdict {
    /// Process exit status for this verdict: 0 for passed, 1 for failed.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Passed => 0,
            Self::Failed => 1,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passed => f.write_str("PASSED"),
            Self::Failed => f.write_str("FAILED"),
        }
    }
}

impl ValidationReport {
    /// The run verdict: [`Verdict::Passed`] iff no errors were recorded.
    pub fn verdict(&self) -> Verdict {
        if self.passed() {
            Verdict::Passed
        } else {
            Verdict::Failed
        }
    }

    /// Render the full text report.
    ///
    /// Apart from the timestamp line, the output is a pure function of the
    /// accumulated issues: identical issue lists render identically.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let rule = "=".repeat(60);
        let sep = "-".repeat(30);

        out.push_str(&rule);
        out.push('\n');
        out.push_str("COURSE CONTENT VALIDATION REPORT\n");
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!(
            "Generated: {}\n\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        ));

        out.push_str("SUMMARY\n");
        out.push_str(&sep);
        out.push('\n');
        out.push_str(&format!("  info notes: {}\n", self.info_count()));
        out.push_str(&format!("  warnings:   {}\n", self.warning_count()));
        out.push_str(&format!("  errors:     {}\n\n", self.error_count()));

        if self.error_count() > 0 {
            out.push_str("ERRORS (must fix)\n");
            out.push_str(&sep);
            out.push('\n');
            for message in self.messages(Severity::Error) {
                out.push_str(&format!("  - {message}\n"));
            }
            out.push('\n');
        }

        if self.warning_count() > 0 {
            out.push_str("WARNINGS (should review)\n");
            out.push_str(&sep);
            out.push('\n');
            for message in self.messages(Severity::Warning) {
                out.push_str(&format!("  - {message}\n"));
            }
            out.push('\n');
        }

        let info_count = self.info_count();
        if info_count > 0 && info_count <= MAX_RENDERED_INFO {
            out.push_str("INFO\n");
            out.push_str(&sep);
            out.push('\n');
            for message in self.messages(Severity::Info) {
                out.push_str(&format!("  - {message}\n"));
            }
            out.push('\n');
        }

        out.push_str("RESULT\n");
        out.push_str(&sep);
        out.push('\n');
        match self.verdict() {
            Verdict::Passed => out.push_str("PASSED: content is valid\n"),
            Verdict::Failed => out.push_str(&format!(
                "FAILED: {} error(s) must be fixed\n",
                self.error_count()
            )),
        }

        out
    }
}
