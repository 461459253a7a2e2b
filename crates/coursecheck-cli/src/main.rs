//! # coursecheck CLI entry point
//!
//! Parses command-line arguments, initializes tracing from the verbosity
//! flag, resolves the content root, and dispatches to the subcommand
//! handlers.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use coursecheck_cli::validate::{run_validate, ValidateArgs};
use coursecheck_cli::DEFAULT_CONTENT_DIR;

/// Course content validator.
///
/// Checks the per-week module documents of an 8-week course for
/// structural correctness (schema, links, code samples) and cross-week
/// consistency (difficulty progression, XP balance, skill coverage).
#[derive(Parser, Debug)]
#[command(name = "coursecheck", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Content root directory. When omitted, a `content/` directory is
    /// searched for upward from the current directory.
    #[arg(long, global = true, value_name = "DIR")]
    content_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a single week or the full corpus.
    Validate(ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let content_root = resolve_content_root(cli.content_dir.as_deref());
    tracing::debug!(content_root = %content_root.display(), "resolved content root");

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, &content_root, cli.verbose > 0),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

/// Resolve the content root directory.
///
/// An explicit `--content-dir` wins. Otherwise walk up from the current
/// directory looking for a `content/` directory, falling back to
/// `./content` so that error messages name the expected location.
fn resolve_content_root(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        loop {
            let candidate = dir.join(DEFAULT_CONTENT_DIR);
            if candidate.is_dir() {
                return candidate;
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }
    }
    PathBuf::from(DEFAULT_CONTENT_DIR)
}
