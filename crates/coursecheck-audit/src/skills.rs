//! Required-skill coverage across the corpus.
//!
//! Every module's `skills` field is scanned and matched against the fixed
//! required set. Coverage is reported as a table from skill to the module
//! ids that teach it, in course order. A required skill no module teaches
//! is an Error; a skill taught exactly once is a Warning.

use std::collections::BTreeMap;

use coursecheck_core::{Skill, ValidationReport};

use crate::corpus::WeekData;

/// Which module ids teach each required skill, in course order.
pub type SkillCoverageTable = BTreeMap<Skill, Vec<String>>;

/// Check required-skill coverage over the loaded canonical documents.
///
/// The table is returned regardless of pass/fail so that callers can
/// display coverage even for a failing corpus.
pub fn check_skill_coverage(weeks: &[(u8, WeekData)]) -> (SkillCoverageTable, ValidationReport) {
    let mut report = ValidationReport::new();
    let mut table: SkillCoverageTable =
        Skill::all().iter().map(|skill| (*skill, Vec::new())).collect();

    for (week, data) in weeks {
        for module in data.modules() {
            // Modules without a usable number cannot be cited; skip them.
            let Some(number) = module.number() else {
                continue;
            };
            for name in module.skills() {
                if let Ok(skill) = name.parse::<Skill>() {
                    if let Some(teachers) = table.get_mut(&skill) {
                        teachers.push(format!("w{week}m{number}"));
                    }
                }
            }
        }
    }

    let uncovered: Vec<&str> = table
        .iter()
        .filter(|(_, teachers)| teachers.is_empty())
        .map(|(skill, _)| skill.as_str())
        .collect();
    if !uncovered.is_empty() {
        report.add_warning(format!("skills not covered: {}", uncovered.join(", ")));
    }

    for (skill, teachers) in &table {
        match teachers.as_slice() {
            [] => report.add_error(format!("skill '{skill}' is not taught in any module")),
            [only] => {
                report.add_warning(format!("skill '{skill}' is only taught once ({only})"));
            }
            _ => {}
        }
    }

    (table, report)
}
