//! # Required Skills
//!
//! Defines the [`Skill`] enum: the fixed set of competencies the course must
//! teach. Coverage checking iterates [`Skill::all`] so that a skill can
//! never be silently dropped from the audit.
//!
//! Module documents carry free-form skill strings; only strings matching one
//! of these names count toward required coverage.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A competency the course is required to cover.
///
/// The derived ordering follows the declaration order below, which is the
/// canonical reporting order for coverage results.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    /// Writing effective prompts for AI assistants.
    AiPrompting,
    /// Version control with git.
    Git,
    /// HTML structure and semantics.
    Html,
    /// CSS layout and styling.
    Css,
    /// JavaScript fundamentals.
    Javascript,
    /// Reading errors and isolating faults.
    Debugging,
    /// Shipping a project to a live host.
    Deployment,
    /// Storing and querying structured data.
    Databases,
}

impl Skill {
    /// Return all required skills in canonical reporting order.
    pub fn all() -> &'static [Skill] {
        &[
            Self::AiPrompting,
            Self::Git,
            Self::Html,
            Self::Css,
            Self::Javascript,
            Self::Debugging,
            Self::Deployment,
            Self::Databases,
        ]
    }

    /// The canonical snake_case name, as it appears in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AiPrompting => "ai_prompting",
            Self::Git => "git",
            Self::Html => "html",
            Self::Css => "css",
            Self::Javascript => "javascript",
            Self::Debugging => "debugging",
            Self::Deployment => "deployment",
            Self::Databases => "databases",
        }
    }
}

impl FromStr for Skill {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ai_prompting" => Ok(Self::AiPrompting),
            "git" => Ok(Self::Git),
            "html" => Ok(Self::Html),
            "css" => Ok(Self::Css),
            "javascript" => Ok(Self::Javascript),
            "debugging" => Ok(Self::Debugging),
            "deployment" => Ok(Self::Deployment),
            "databases" => Ok(Self::Databases),
            other => Err(ValidationError::UnknownSkill(other.to_string())),
        }
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_eight_skills() {
        assert_eq!(Skill::all().len(), 8);
    }

    #[test]
    fn parse_round_trips_every_skill() {
        for skill in Skill::all() {
            assert_eq!(skill.as_str().parse::<Skill>().unwrap(), *skill);
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(matches!(
            "kubernetes".parse::<Skill>(),
            Err(ValidationError::UnknownSkill(_))
        ));
    }

    #[test]
    fn ordering_matches_declaration() {
        let mut sorted = Skill::all().to_vec();
        sorted.sort();
        assert_eq!(sorted.as_slice(), Skill::all());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Skill::AiPrompting).unwrap();
        assert_eq!(json, "\"ai_prompting\"");
    }
}
