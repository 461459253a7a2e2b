//! Iterative depth-first traversal of untyped JSON trees.
//!
//! Every node is classified as a [`NodeKind`]: mapping, sequence, or
//! scalar. The walk visits nodes pre-order with an explicit work stack, so
//! input depth is bounded by heap, not by the call stack. The visitor
//! decides per node whether to descend via [`Flow`].
//!
//! Paths are dotted/indexed locators (`modules[2].content.solution`):
//! stable, human-readable, and built incrementally as the walk descends.

use serde_json::{Map, Value};

/// Structural classification of a JSON node.
#[derive(Debug)]
pub enum NodeKind<'a> {
    /// An object; children are keyed.
    Mapping(&'a Map<String, Value>),
    /// An array; children are indexed.
    Sequence(&'a [Value]),
    /// A leaf: string, number, boolean, or null.
    Scalar(&'a Value),
}

/// Classify a JSON value into its node kind.
pub fn classify(value: &Value) -> NodeKind<'_> {
    match value {
        Value::Object(map) => NodeKind::Mapping(map),
        Value::Array(items) => NodeKind::Sequence(items),
        other => NodeKind::Scalar(other),
    }
}

/// Visitor verdict for one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Visit this node's children (no-op for scalars).
    Descend,
    /// Skip this node's children entirely.
    Prune,
}

/// Walk `root` depth-first, pre-order, calling `visit` on every node.
///
/// `visit` receives the node's path (empty for the root), the mapping key
/// it sits under (`None` for the root and for sequence elements), and the
/// node itself. Mapping children are visited in key order, sequence
/// children in index order, so traversal is deterministic for a given
/// input.
pub fn walk<'a, F>(root: &'a Value, mut visit: F)
where
    F: FnMut(&str, Option<&str>, &'a Value) -> Flow,
{
    let mut stack: Vec<(String, Option<String>, &'a Value)> =
        vec![(String::new(), None, root)];

    while let Some((path, key, node)) = stack.pop() {
        if visit(&path, key.as_deref(), node) == Flow::Prune {
            continue;
        }
        // Children are pushed in reverse so the stack pops them in order.
        match classify(node) {
            NodeKind::Mapping(map) => {
                for (child_key, child) in map.iter().rev() {
                    stack.push((join_key(&path, child_key), Some(child_key.clone()), child));
                }
            }
            NodeKind::Sequence(items) => {
                for (index, child) in items.iter().enumerate().rev() {
                    stack.push((format!("{path}[{index}]"), None, child));
                }
            }
            NodeKind::Scalar(_) => {}
        }
    }
}

fn join_key(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}
