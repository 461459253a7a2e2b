//! # Module Identifier
//!
//! The [`ModuleId`] newtype for the `w<week>m<number>` identifier format.
//! Construction parses and range-checks the id, so a value of this type is
//! always well-formed: week in 1..=8, module number in 1..=5.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A validated module identifier such as `w3m2`.
///
/// Serializes as its string form and validates on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleId {
    week: u8,
    number: u8,
}

impl ModuleId {
    /// Create a module id from its components.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidModuleId`] if `week` is outside
    /// 1..=8 or `number` is outside 1..=5.
    pub fn new(week: u8, number: u8) -> Result<Self, ValidationError> {
        if !(1..=8).contains(&week) || !(1..=5).contains(&number) {
            return Err(ValidationError::InvalidModuleId(format!("w{week}m{number}")));
        }
        Ok(Self { week, number })
    }

    /// The week this module belongs to (1..=8).
    pub fn week(&self) -> u8 {
        self.week
    }

    /// The module's position within its week (1..=5).
    pub fn number(&self) -> u8 {
        self.number
    }
}

impl FromStr for ModuleId {
    type Err = ValidationError;

    /// Parse the exact `w<1-8>m<1-5>` form. No whitespace, no padding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() == 4 && bytes[0] == b'w' && bytes[2] == b'm' {
            let week = bytes[1].wrapping_sub(b'0');
            let number = bytes[3].wrapping_sub(b'0');
            if (1..=8).contains(&week) && (1..=5).contains(&number) {
                return Ok(Self { week, number });
            }
        }
        Err(ValidationError::InvalidModuleId(s.to_string()))
    }
}

impl TryFrom<String> for ModuleId {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ModuleId> for String {
    fn from(id: ModuleId) -> Self {
        id.to_string()
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "w{}m{}", self.week, self.number)
    }
}
