//! # coursecheck-scan: Content Tree Scanning
//!
//! Module content is a free-form tree: mappings, sequences, and scalars
//! nested to unbounded depth. This crate walks such trees generically and
//! runs two syntactic checks over the string leaves:
//!
//! - [`scan_links`]: extract every URL-shaped substring and flag the ones
//!   whose scheme is not `http`/`https`. Format only; nothing is fetched.
//! - [`scan_code_blocks`]: for strings sitting directly under a `code`,
//!   `solution`, or `example` key, compare delimiter counts per family
//!   (parentheses, braces, brackets) and report each imbalance with the
//!   leaf's path.
//!
//! The walker is total and iterative: no call-stack recursion, so
//! pathologically deep trees cannot overflow, and unexpected shapes are
//! opaque non-matches rather than failures. Neither check attempts to
//! parse the code it inspects; `)(` counts as balanced.

pub mod code;
pub mod links;
pub mod walk;

pub use code::{scan_code_blocks, CodeIssue, CODE_KEYS};
pub use links::{scan_links, LinkReport};
pub use walk::{classify, walk, Flow, NodeKind};
