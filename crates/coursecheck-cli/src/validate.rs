//! # Validate Subcommand
//!
//! Single-week and full-corpus validation. The full-corpus run prints a
//! short progress summary, renders the collated report when verbose or
//! failing, and maps the verdict to the process exit code.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use coursecheck_audit::{audit_corpus, check_week, WEEK_COUNT};
use coursecheck_core::Severity;
use coursecheck_schema::WeekValidator;

/// Arguments for the `coursecheck validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Validate a specific week (1-8).
    #[arg(short, long, value_name = "N", conflicts_with = "all")]
    pub week: Option<u8>,

    /// Validate the full corpus.
    #[arg(short, long)]
    pub all: bool,

    /// Write the rendered report to a file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Execute the validate subcommand.
///
/// Returns the process exit code: 0 on a PASSED verdict, 1 on FAILED or
/// usage error. Operational failures (unwritable report file) propagate as
/// errors and exit 2.
pub fn run_validate(args: &ValidateArgs, content_root: &Path, verbose: bool) -> Result<u8> {
    let validator =
        WeekValidator::new().context("failed to compile the week document schema")?;

    if let Some(week) = args.week {
        if !(1..=WEEK_COUNT).contains(&week) {
            println!("ERROR: week must be between 1 and {WEEK_COUNT}, got {week}");
            return Ok(1);
        }
        return validate_single_week(&validator, content_root, week, verbose);
    }

    if args.all {
        return validate_corpus(&validator, args, content_root, verbose);
    }

    println!("Usage: coursecheck validate [--all | --week N] [--output PATH]");
    Ok(1)
}

/// Validate one week in isolation: structural checks only.
fn validate_single_week(
    validator: &WeekValidator,
    content_root: &Path,
    week: u8,
    verbose: bool,
) -> Result<u8> {
    let check = check_week(validator, content_root, week);

    if check.status.valid {
        println!(
            "OK: week {week} is valid ({} file(s) checked)",
            check.status.files.len()
        );
    } else {
        println!("FAIL: week {week} has issues:");
    }

    for issue in check.report.issues() {
        match issue.severity {
            Severity::Error => println!("  error: {}", issue.message),
            Severity::Warning => println!("  warning: {}", issue.message),
            Severity::Info => {
                if verbose {
                    println!("  info: {}", issue.message);
                }
            }
        }
    }

    Ok(check.report.verdict().exit_code())
}

/// Validate the full corpus and render the collated report.
fn validate_corpus(
    validator: &WeekValidator,
    args: &ValidateArgs,
    content_root: &Path,
    verbose: bool,
) -> Result<u8> {
    let result = audit_corpus(validator, content_root);

    let valid_weeks = result.weeks.iter().filter(|w| w.valid).count();
    println!("Weeks: {valid_weeks}/{} valid", result.weeks.len());
    println!(
        "Total XP: {} (mean {:.0} per week)",
        result.xp.total, result.xp.average
    );
    let covered = result.skills.values().filter(|t| !t.is_empty()).count();
    println!("Skills covered: {covered}/{}", result.skills.len());

    let report = &result.report;
    let rendered = report.render();
    let show_report = verbose || !report.passed();
    if show_report {
        println!("\n{rendered}");
    } else {
        println!("Result: {}", report.verdict());
    }

    if let Some(path) = &args.output {
        std::fs::write(path, &rendered)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        println!("Report written to {}", path.display());
    }

    Ok(report.verdict().exit_code())
}
