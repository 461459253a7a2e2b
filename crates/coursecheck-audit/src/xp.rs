//! XP balance across the corpus.
//!
//! Two consistency checks, both advisory: each week's module XP sum is
//! compared against the total its summary declares, and each week's sum is
//! compared against the corpus mean (outliers below 50% or above 200%
//! draw a warning).
//!
//! The mean divides by the number of weeks that actually produced data.
//! A week whose canonical file is missing or unparsable is skipped, not
//! counted as zero, so absent weeks do not drag the mean down.

use std::collections::BTreeMap;

use coursecheck_core::ValidationReport;

use crate::corpus::WeekData;

/// Corpus-wide XP statistics for programmatic consumers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XpSummary {
    /// Total module XP across all loaded weeks.
    pub total: u64,
    /// Mean weekly XP over the loaded weeks; 0.0 when none loaded.
    pub average: f64,
    /// Per-week module XP sums, keyed by week number.
    pub per_week: BTreeMap<u8, u64>,
}

/// Check XP consistency over the loaded canonical documents.
pub fn check_xp_balance(weeks: &[(u8, WeekData)]) -> (XpSummary, ValidationReport) {
    let mut report = ValidationReport::new();
    let mut per_week = BTreeMap::new();
    let mut total = 0u64;

    for (week, data) in weeks {
        let week_xp: u64 = data.modules().map(|m| m.xp()).sum();
        per_week.insert(*week, week_xp);
        total += week_xp;

        // A document without a summary is treated as declaring 0.
        let declared = data.declared_total_xp();
        if declared != week_xp as i64 {
            report.add_warning(format!(
                "week {week} XP mismatch: modules sum to {week_xp}, summary declares {declared}"
            ));
        }
    }

    let average = if per_week.is_empty() {
        0.0
    } else {
        total as f64 / per_week.len() as f64
    };

    for (week, xp) in &per_week {
        let xp = *xp;
        if (xp as f64) < average * 0.5 {
            report.add_warning(format!("week {week} has unusually low XP ({xp})"));
        } else if (xp as f64) > average * 2.0 {
            report.add_warning(format!("week {week} has unusually high XP ({xp})"));
        }
    }

    let summary = XpSummary {
        total,
        average,
        per_week,
    };
    (summary, report)
}
