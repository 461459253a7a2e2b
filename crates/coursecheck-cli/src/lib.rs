//! # coursecheck-cli: Course Content Validator CLI
//!
//! Provides the `coursecheck` command-line interface over the audit
//! pipeline.
//!
//! ## Subcommands
//!
//! - `coursecheck validate --all` checks the full corpus and exits 0 only
//!   when the verdict is PASSED.
//! - `coursecheck validate --week N` checks a single week in isolation
//!   (structural checks only; corpus-wide statistics need the corpus).
//!
//! ```bash
//! coursecheck validate --all
//! coursecheck validate --all --output report.txt
//! coursecheck validate --week 3
//! coursecheck -v validate --all
//! ```
//!
//! The exit status is the automation contract: 0 for PASSED, 1 for FAILED
//! or usage errors, 2 for operational failures.

pub mod validate;

/// Directory name the content root is resolved against when no override
/// is given.
pub const DEFAULT_CONTENT_DIR: &str = "content";
