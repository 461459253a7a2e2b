//! # Domain Validation Errors
//!
//! Construction-time errors for the domain primitives in this crate, built
//! with `thiserror`. Each variant carries the rejected input and the
//! expected format so that a bad value can be diagnosed without guesswork.

use thiserror::Error;

/// Errors produced when constructing domain primitives from untrusted input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Module id does not match the `w<week>m<number>` format.
    #[error("invalid module id: \"{0}\" (expected w<1-8>m<1-5>)")]
    InvalidModuleId(String),

    /// Difficulty string is not one of the three recognized levels.
    #[error("unknown difficulty: \"{0}\" (expected beginner, intermediate, or advanced)")]
    UnknownDifficulty(String),

    /// Skill string is not one of the required-skill names.
    #[error("unknown skill: \"{0}\"")]
    UnknownSkill(String),
}
