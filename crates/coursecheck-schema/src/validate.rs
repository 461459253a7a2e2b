//! Structural validation of week documents.
//!
//! The structural rules are data: [`week_schema`] returns the JSON Schema
//! (Draft 2020-12) document that defines a valid week. [`WeekValidator`]
//! compiles it once and interprets it against untyped document trees,
//! reporting every violation with its JSON Pointer location.
//!
//! Keeping the schema as a value means the rules themselves can be unit
//! tested (and inspected by tooling) without constructing documents.

use std::sync::LazyLock;

use serde_json::{json, Value};

use crate::error::SchemaError;

/// The week-document schema.
///
/// A week is an object with `week` (1..=8), a non-empty `title` and
/// `description`, and exactly five modules. Each module carries nine
/// required fields; `id` must match `w<1-8>m<1-5>` and `difficulty` one of
/// the three levels. The `week_summary` block is optional and loosely
/// typed; its consistency is the aggregator's job, not the schema's.
static WEEK_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "type": "object",
        "required": ["week", "title", "description", "modules"],
        "properties": {
            "week": {"type": "integer", "minimum": 1, "maximum": 8},
            "title": {"type": "string", "minLength": 1},
            "description": {"type": "string", "minLength": 1},
            "modules": {
                "type": "array",
                "minItems": 5,
                "maxItems": 5,
                "items": {
                    "type": "object",
                    "required": [
                        "id", "number", "title", "duration", "difficulty",
                        "xp", "skills", "objectives", "content"
                    ],
                    "properties": {
                        "id": {"type": "string", "pattern": "^w[1-8]m[1-5]$"},
                        "number": {"type": "integer", "minimum": 1, "maximum": 5},
                        "title": {"type": "string", "minLength": 1},
                        "duration": {"type": "string"},
                        "difficulty": {
                            "type": "string",
                            "enum": ["beginner", "intermediate", "advanced"]
                        },
                        "xp": {"type": "integer", "minimum": 0},
                        "skills": {"type": "array", "items": {"type": "string"}},
                        "objectives": {"type": "array", "items": {"type": "string"}},
                        "content": {"type": "object"}
                    }
                }
            },
            "week_summary": {
                "type": "object",
                "properties": {
                    "total_xp": {"type": "integer"},
                    "skills_developed": {"type": "array"},
                    "projects_completed": {"type": "integer"},
                    "estimated_time": {"type": "string"},
                    "achievement_available": {"type": "string"}
                }
            }
        }
    })
});

/// The JSON Schema document for one week of course content.
pub fn week_schema() -> &'static Value {
    &WEEK_SCHEMA
}

/// One schema violation with diagnostic context.
///
/// Carries the JSON Pointer to the violating location and a human-readable
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// JSON Pointer to the field that failed validation (empty for the
    /// document root).
    pub instance_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl std::fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// A compiled validator for week documents.
///
/// Compiles [`week_schema`] once at construction; validation itself never
/// fails operationally, it only reports violations.
pub struct WeekValidator {
    validator: jsonschema::Validator,
}

impl std::fmt::Debug for WeekValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeekValidator").finish_non_exhaustive()
    }
}

impl WeekValidator {
    /// Compile the embedded schema into a validator.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Compile`] if the schema does not compile.
    /// The schema is embedded and covered by tests, so this only fires if
    /// the schema itself is edited incorrectly.
    pub fn new() -> Result<Self, SchemaError> {
        let validator = jsonschema::options()
            .with_draft(jsonschema::Draft::Draft202012)
            .build(week_schema())
            .map_err(|e| SchemaError::Compile {
                reason: e.to_string(),
            })?;
        Ok(Self { validator })
    }

    /// True iff the document satisfies the week schema.
    pub fn is_valid(&self, document: &Value) -> bool {
        self.validator.is_valid(document)
    }

    /// All schema violations in the document, in schema-evaluation order.
    ///
    /// Empty means the document is valid.
    pub fn violations(&self, document: &Value) -> Vec<SchemaViolation> {
        self.validator
            .iter_errors(document)
            .map(|err| SchemaViolation {
                instance_path: err.instance_path.to_string(),
                message: err.to_string(),
            })
            .collect()
    }
}
