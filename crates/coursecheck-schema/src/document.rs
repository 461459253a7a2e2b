//! Typed week-document model and JSON loaders.
//!
//! The structs here mirror the document contract exactly: a week holds
//! exactly five modules, every module carries its nine fields, and the
//! summary block is optional. `Module::content` stays an untyped
//! `serde_json::Value` because content trees are free-form by design; the
//! content scanner handles them generically.
//!
//! Optional summary fields skip serialization when absent, so a document
//! loaded through this model and written back does not grow `null` fields
//! that the schema would reject.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use coursecheck_core::{Difficulty, ModuleId};

use crate::error::{DocumentError, DocumentResult};

/// One week of course content: metadata plus exactly five modules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekDocument {
    /// Position of this week in the course, 1..=8.
    pub week: u8,
    /// Week title.
    pub title: String,
    /// Week description.
    pub description: String,
    /// The week's five modules, in order.
    pub modules: Vec<Module>,
    /// Optional roll-up block; its `total_xp` is checked against the
    /// modules' sum, not trusted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_summary: Option<WeekSummary>,
}

/// The smallest content unit: one module of one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Validated `w<week>m<number>` identifier.
    pub id: ModuleId,
    /// Position within the week, 1..=5.
    pub number: u8,
    /// Module title.
    pub title: String,
    /// Free-form duration label, e.g. "45 min".
    pub duration: String,
    /// Difficulty level.
    pub difficulty: Difficulty,
    /// Experience points awarded on completion.
    pub xp: u64,
    /// Skill names this module teaches. Free-form; only names matching the
    /// required-skill set count toward coverage.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Learning objectives.
    #[serde(default)]
    pub objectives: Vec<String>,
    /// Arbitrary nested content tree (lessons, exercises, code samples).
    pub content: Value,
}

/// Optional per-week roll-up block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeekSummary {
    /// Declared XP total for the week.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_xp: Option<i64>,
    /// Skills the week claims to develop.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills_developed: Vec<String>,
    /// Number of projects completed by the end of the week.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects_completed: Option<u32>,
    /// Free-form time estimate, e.g. "6 hours".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    /// Achievement unlocked by finishing the week.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievement_available: Option<String>,
}

/// Load a JSON file and return it as an untyped `serde_json::Value`.
pub fn load_json_value(path: &Path) -> DocumentResult<Value> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|e| DocumentError::JsonParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load a JSON file into a typed [`WeekDocument`].
///
/// Deserialization failures (including shape mismatches) are reported as
/// [`DocumentError::JsonParse`] with the file path.
pub fn load_week_document(path: &Path) -> DocumentResult<WeekDocument> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|e| DocumentError::JsonParse {
        path: path.to_path_buf(),
        source: e,
    })
}

fn read_file(path: &Path) -> DocumentResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DocumentError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DocumentError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}
