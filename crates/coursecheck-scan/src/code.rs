//! Delimiter-balance checks for embedded code samples.
//!
//! A string sitting directly under a `code`, `solution`, or `example` key
//! is treated as a code sample. For each such string the three delimiter
//! families are counted independently; every family with unequal open and
//! close counts yields one [`CodeIssue`] at the leaf's path.
//!
//! Matching keys are never descended into: a container under `code` is
//! opaque. The check compares counts only, so it cannot detect reversed
//! ordering like `)(`.

use serde_json::Value;

use crate::walk::{walk, Flow};

/// Mapping keys whose string values are checked as code samples.
pub const CODE_KEYS: [&str; 3] = ["code", "solution", "example"];

/// Delimiter families and the issue label each produces.
const DELIMITERS: [(char, char, &str); 3] = [
    ('(', ')', "unbalanced parentheses"),
    ('{', '}', "unbalanced braces"),
    ('[', ']', "unbalanced brackets"),
];

/// One unbalanced-delimiter finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeIssue {
    /// Dotted/indexed locator of the offending string leaf.
    pub path: String,
    /// Which delimiter family is unbalanced.
    pub issue: String,
}

impl std::fmt::Display for CodeIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.issue, self.path)
    }
}

/// Scan a content tree for code samples with unbalanced delimiters.
///
/// Findings appear in traversal order, so output is deterministic for a
/// given input.
pub fn scan_code_blocks(root: &Value) -> Vec<CodeIssue> {
    let mut issues = Vec::new();
    walk(root, |path, key, node| {
        let Some(key) = key else {
            return Flow::Descend;
        };
        if !CODE_KEYS.contains(&key) {
            return Flow::Descend;
        }
        if let Value::String(sample) = node {
            if !sample.trim().is_empty() {
                for (open, close, label) in DELIMITERS {
                    let opens = sample.chars().filter(|&c| c == open).count();
                    let closes = sample.chars().filter(|&c| c == close).count();
                    if opens != closes {
                        issues.push(CodeIssue {
                            path: path.to_string(),
                            issue: label.to_string(),
                        });
                    }
                }
            }
        }
        Flow::Prune
    });
    issues
}
