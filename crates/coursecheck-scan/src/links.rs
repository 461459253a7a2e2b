//! Link extraction over content trees.
//!
//! Finds URL-shaped substrings in every string leaf. The check is purely
//! lexical: a URL is anything of the form `<scheme>://...` up to
//! whitespace or a URL-hostile delimiter. URLs whose scheme is not `http`
//! or `https` are collected as broken; nothing is ever fetched.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::walk::{walk, Flow};

/// Matches `<scheme>://` URLs; terminates at whitespace and the usual
/// URL-hostile delimiters.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[A-Za-z][A-Za-z0-9+.\-]*://[^\s<>"{}|\\^`\[\]]+"#).expect("valid pattern")
});

/// All URLs found in a content tree, ordered and de-duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkReport {
    /// Every URL-shaped substring found in string leaves.
    pub urls: BTreeSet<String>,
    /// The subset whose scheme is not `http`/`https`.
    pub broken: BTreeSet<String>,
}

impl LinkReport {
    /// True iff at least one URL failed the format check.
    pub fn has_broken(&self) -> bool {
        !self.broken.is_empty()
    }
}

/// Scan every string leaf of `root` for URL-shaped substrings.
pub fn scan_links(root: &Value) -> LinkReport {
    let mut report = LinkReport::default();
    walk(root, |_, _, node| {
        if let Value::String(text) = node {
            for found in URL_RE.find_iter(text) {
                let url = found.as_str().to_string();
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    report.broken.insert(url.clone());
                }
                report.urls.insert(url);
            }
        }
        Flow::Descend
    });
    report
}
