//! Per-week structural checks.
//!
//! For one week directory: existence, recognized files, the schema gate on
//! each file, and the content scan on files that pass the gate. Every
//! outcome is an issue in the returned report; nothing here aborts the
//! run.

use std::path::Path;

use serde_json::Value;

use coursecheck_core::ValidationReport;
use coursecheck_scan::{scan_code_blocks, scan_links};
use coursecheck_schema::{load_json_value, WeekValidator};

use crate::corpus::{week_dir, WeekStatus, CANONICAL_FILE, VARIANT_FILES};

/// Outcome of checking one week.
#[derive(Debug)]
pub struct WeekCheck {
    /// Structural status of the week.
    pub status: WeekStatus,
    /// Issues found while checking this week.
    pub report: ValidationReport,
    /// The parsed canonical file, when it exists and parses; the
    /// statistical checks consume it whether or not it passed the schema.
    pub canonical: Option<Value>,
}

/// Run the structural checks for one week.
///
/// Missing directory and missing files are Errors; every recognized file
/// present is parsed and schema-validated independently. Files that pass
/// the gate get an Info confirmation and a content scan; parse failures
/// and schema violations are Errors naming the file.
pub fn check_week(validator: &WeekValidator, content_root: &Path, week: u8) -> WeekCheck {
    let dir = week_dir(content_root, week);
    let mut report = ValidationReport::new();
    let mut status = WeekStatus {
        week,
        exists: dir.is_dir(),
        files: Vec::new(),
        valid: true,
    };

    if !status.exists {
        report.add_error(format!("week {week} directory not found"));
        status.valid = false;
        return WeekCheck {
            status,
            report,
            canonical: None,
        };
    }

    let mut canonical = None;
    for name in std::iter::once(CANONICAL_FILE).chain(VARIANT_FILES) {
        let path = dir.join(name);
        if !path.is_file() {
            continue;
        }
        status.files.push(name.to_string());
        let label = format!("week{week}/{name}");
        tracing::debug!(file = %label, "validating module file");

        let value = match load_json_value(&path) {
            Ok(value) => value,
            Err(e) => {
                report.add_error(e.to_string());
                status.valid = false;
                continue;
            }
        };

        let violations = validator.violations(&value);
        if violations.is_empty() {
            report.add_info(format!("{label} is valid"));
            scan_content(&label, &value, &mut report);
        } else {
            for violation in violations {
                report.add_error(format!("schema violation in {label}: {violation}"));
            }
            status.valid = false;
        }

        if name == CANONICAL_FILE {
            if let Some(declared) = value.get("week").and_then(Value::as_u64) {
                if declared != u64::from(week) {
                    report.add_warning(format!(
                        "{label} declares week {declared}, expected week {week}"
                    ));
                }
            }
            canonical = Some(value);
        }
    }

    if status.files.is_empty() {
        report.add_error(format!("no module files found in week {week}"));
        status.valid = false;
    }

    WeekCheck {
        status,
        report,
        canonical,
    }
}

/// Fold content-scan findings into the report as warnings.
fn scan_content(label: &str, document: &Value, report: &mut ValidationReport) {
    let links = scan_links(document);
    for url in &links.broken {
        report.add_warning(format!("{label}: broken link format: {url}"));
    }
    for issue in scan_code_blocks(document) {
        report.add_warning(format!("{label}: {issue}"));
    }
}
