//! # coursecheck-schema: Document Model & Structural Validation
//!
//! This crate owns the on-disk contract for week documents:
//!
//! - **Typed model:** [`WeekDocument`], [`Module`], and [`WeekSummary`]
//!   as serde structs. Any producer that emits this shape round-trips
//!   losslessly through them.
//! - **Loaders:** JSON file loading with structured [`DocumentError`]
//!   context (path, parse failure), so a malformed file is reported as a
//!   classified fact rather than a panic.
//! - **Schema validation:** the structural rules live in an embedded JSON
//!   Schema document (data, not code) interpreted by [`WeekValidator`].
//!   The schema value is exported so it can be tested on its own.
//!
//! ## Design
//!
//! Validation and typing are deliberately separate layers. The validator
//! operates on untyped `serde_json::Value` trees and reports every
//! violation it finds; the typed model is for consumers that only want to
//! touch documents already behind the schema gate.

pub mod document;
pub mod error;
pub mod validate;

// Re-export primary types.
pub use document::{load_json_value, load_week_document, Module, WeekDocument, WeekSummary};
pub use error::{DocumentError, DocumentResult, SchemaError};
pub use validate::{week_schema, SchemaViolation, WeekValidator};
