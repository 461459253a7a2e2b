//! Corpus layout and lenient document views.
//!
//! The corpus lives at `<content-root>/week<N>/` for weeks 1..=8. Each week
//! directory carries one canonical module file plus up to three recognized
//! project-variant files.
//!
//! [`WeekData`] and [`ModuleData`] are read-only views over a parsed
//! `serde_json::Value` whose accessors never fail: a missing or mistyped
//! field reads as absent. The statistical checks use these views so that a
//! document that failed the schema gate still contributes whatever data it
//! does carry, keeping the audit best-effort.

use std::path::{Path, PathBuf};

use serde_json::Value;

/// Number of weeks in the course.
pub const WEEK_COUNT: u8 = 8;

/// The canonical module file every week should carry. Statistical checks
/// read only this file.
pub const CANONICAL_FILE: &str = "modules.json";

/// Recognized project-variant file names.
pub const VARIANT_FILES: [&str; 3] = [
    "modules_dashboard.json",
    "modules_blog.json",
    "modules_automation.json",
];

/// Directory of the given week under the content root.
pub fn week_dir(content_root: &Path, week: u8) -> PathBuf {
    content_root.join(format!("week{week}"))
}

/// Per-week outcome of the structural checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekStatus {
    /// The week this status describes, 1..=8.
    pub week: u8,
    /// Whether the week directory exists.
    pub exists: bool,
    /// Recognized file names found in the week directory, canonical first.
    pub files: Vec<String>,
    /// True iff the directory exists, at least one recognized file was
    /// found, and every found file parsed and passed the schema.
    pub valid: bool,
}

/// Lenient read-only view over a parsed week document.
#[derive(Debug, Clone)]
pub struct WeekData {
    value: Value,
}

impl WeekData {
    /// Wrap a parsed document.
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// The document's declared `week` field, if present and integral.
    pub fn week(&self) -> Option<u64> {
        self.value.get("week").and_then(Value::as_u64)
    }

    /// The declared `week_summary.total_xp`, reading absent as 0.
    pub fn declared_total_xp(&self) -> i64 {
        self.value
            .get("week_summary")
            .and_then(|summary| summary.get("total_xp"))
            .and_then(Value::as_i64)
            .unwrap_or(0)
    }

    /// Iterate the document's modules, however many there are.
    pub fn modules(&self) -> impl Iterator<Item = ModuleData<'_>> {
        self.value
            .get("modules")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .map(ModuleData::new)
    }
}

/// Lenient read-only view over one module entry.
#[derive(Debug, Clone, Copy)]
pub struct ModuleData<'a> {
    value: &'a Value,
}

impl<'a> ModuleData<'a> {
    fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// The module's `number` field, if present and integral.
    pub fn number(&self) -> Option<u64> {
        self.value.get("number").and_then(Value::as_u64)
    }

    /// The module's `difficulty` string, if present.
    pub fn difficulty(&self) -> Option<&'a str> {
        self.value.get("difficulty").and_then(Value::as_str)
    }

    /// The module's `xp`, reading absent or mistyped as 0.
    pub fn xp(&self) -> u64 {
        self.value.get("xp").and_then(Value::as_u64).unwrap_or(0)
    }

    /// The module's skill names, skipping non-string entries.
    pub fn skills(&self) -> impl Iterator<Item = &'a str> {
        self.value
            .get("skills")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn week_dir_layout() {
        let dir = week_dir(Path::new("/srv/content"), 3);
        assert_eq!(dir, PathBuf::from("/srv/content/week3"));
    }

    #[test]
    fn week_data_reads_declared_fields() {
        let data = WeekData::new(json!({
            "week": 4,
            "week_summary": {"total_xp": 610},
            "modules": [
                {"number": 1, "difficulty": "beginner", "xp": 100, "skills": ["git"]},
                {"number": 2, "xp": 120}
            ]
        }));
        assert_eq!(data.week(), Some(4));
        assert_eq!(data.declared_total_xp(), 610);
        assert_eq!(data.modules().count(), 2);
    }

    #[test]
    fn absent_fields_read_as_absent() {
        let data = WeekData::new(json!({"title": "no structure at all"}));
        assert_eq!(data.week(), None);
        assert_eq!(data.declared_total_xp(), 0);
        assert_eq!(data.modules().count(), 0);
    }

    #[test]
    fn mistyped_fields_read_as_absent() {
        let data = WeekData::new(json!({
            "week": "four",
            "week_summary": "not an object",
            "modules": {"not": "an array"}
        }));
        assert_eq!(data.week(), None);
        assert_eq!(data.declared_total_xp(), 0);
        assert_eq!(data.modules().count(), 0);
    }

    #[test]
    fn module_data_defaults() {
        let data = WeekData::new(json!({"modules": [{}]}));
        let module = data.modules().next().unwrap();
        assert_eq!(module.number(), None);
        assert_eq!(module.difficulty(), None);
        assert_eq!(module.xp(), 0);
        assert_eq!(module.skills().count(), 0);
    }

    #[test]
    fn skills_skip_non_strings() {
        let data = WeekData::new(json!({
            "modules": [{"skills": ["git", 7, null, "css"]}]
        }));
        let skills: Vec<_> = data.modules().next().unwrap().skills().collect();
        assert_eq!(skills, ["git", "css"]);
    }
}
