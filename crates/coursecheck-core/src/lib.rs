#![deny(missing_docs)]

//! # coursecheck-core: Foundational Types
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies, only `serde`, `thiserror`,
//! and `chrono` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** A [`ModuleId`] is parsed
//!    and range-checked at construction time; an invalid id cannot exist.
//!
//! 2. **Single exhaustive enums.** [`Difficulty`] and [`Skill`] are defined
//!    once, here. Every `match` on them is exhaustive, so adding a level or
//!    a required skill forces every handler in the workspace to address it.
//!
//! 3. **Issues are values, not side effects.** Every check produces a
//!    [`ValidationReport`] that callers merge explicitly. There is no
//!    global accumulator and no mutation at a distance.

pub mod difficulty;
pub mod error;
pub mod issue;
pub mod module_id;
pub mod report;
pub mod skill;

// Re-export primary types at crate root for ergonomic imports.
pub use difficulty::Difficulty;
pub use error::ValidationError;
pub use issue::{Issue, Severity, ValidationReport};
pub use module_id::ModuleId;
pub use report::Verdict;
pub use skill::Skill;
