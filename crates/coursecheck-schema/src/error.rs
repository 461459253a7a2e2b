//! Document and schema error types.
//!
//! Structured errors for loading and validating week documents. All errors
//! carry the file path they concern so that a corpus-wide run can report
//! which file failed without extra bookkeeping at the call site.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a document from disk.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// A required file was not found.
    #[error("required file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// JSON parsing or deserialization failed.
    #[error("failed to parse JSON at {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// I/O error other than file-not-found.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Errors from building the schema interpreter itself.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The embedded schema failed to compile into a validator.
    #[error("failed to compile week document schema: {reason}")]
    Compile { reason: String },
}
