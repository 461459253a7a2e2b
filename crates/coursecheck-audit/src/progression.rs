//! Difficulty progression across the course.
//!
//! Advisory only: difficulty should rise over the eight weeks, so advanced
//! material in the first two weeks or beginner-only material in the last
//! two draws a warning. Nothing here can fail the run.

use coursecheck_core::{Difficulty, ValidationReport};

use crate::corpus::WeekData;

/// Check difficulty progression over the loaded canonical documents.
pub fn check_progression(weeks: &[(u8, WeekData)]) -> ValidationReport {
    let mut report = ValidationReport::new();

    for (week, data) in weeks {
        let difficulties: Vec<&str> = data.modules().filter_map(|m| m.difficulty()).collect();

        if *week <= 2
            && difficulties
                .iter()
                .any(|d| *d == Difficulty::Advanced.as_str())
        {
            report.add_warning(format!(
                "week {week} contains advanced modules (too early in the course)"
            ));
        } else if *week >= 7
            && difficulties
                .iter()
                .all(|d| *d == Difficulty::Beginner.as_str())
        {
            report.add_warning(format!(
                "week {week} contains only beginner modules (should be harder by now)"
            ));
        }
    }

    report
}
