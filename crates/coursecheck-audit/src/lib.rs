//! # coursecheck-audit: Cross-Corpus Aggregation
//!
//! Drives the whole validation pipeline over an on-disk corpus:
//!
//! ```text
//! coursecheck-schema (gate)      coursecheck-scan (heuristics)
//!            \                        /
//!             +--> coursecheck-audit +--> ValidationReport (verdict)
//! ```
//!
//! For each of the eight weeks the audit checks the directory, runs every
//! recognized file through the schema gate, scans gated files for link and
//! code issues, and folds the canonical file into the corpus statistics.
//! The progression, XP, and skill-coverage checks then run over everything
//! that loaded.
//!
//! Every check is best-effort and isolated per unit: a missing week, a
//! malformed file, or an uncovered skill is recorded and the audit moves
//! on. Issue order is fixed (weeks 1..=8, then progression, then XP, then
//! coverage), so repeated runs over unchanged input produce identical
//! reports.

pub mod corpus;
pub mod progression;
pub mod skills;
pub mod week;
pub mod xp;

use std::path::Path;

use coursecheck_core::ValidationReport;
use coursecheck_schema::WeekValidator;

pub use corpus::{week_dir, WeekData, WeekStatus, CANONICAL_FILE, VARIANT_FILES, WEEK_COUNT};
pub use progression::check_progression;
pub use skills::{check_skill_coverage, SkillCoverageTable};
pub use week::{check_week, WeekCheck};
pub use xp::{check_xp_balance, XpSummary};

/// Everything a full corpus audit produces.
#[derive(Debug)]
pub struct CorpusReport {
    /// All issues, in the audit's fixed accumulation order.
    pub report: ValidationReport,
    /// Per-week structural status, weeks 1..=8 in order.
    pub weeks: Vec<WeekStatus>,
    /// Corpus-wide XP statistics.
    pub xp: XpSummary,
    /// Required-skill coverage table.
    pub skills: SkillCoverageTable,
}

/// Audit the full corpus under `content_root`.
///
/// Checks every week regardless of earlier failures, then runs the
/// corpus-wide statistics over each week whose canonical file parsed.
pub fn audit_corpus(validator: &WeekValidator, content_root: &Path) -> CorpusReport {
    tracing::debug!(root = %content_root.display(), "starting corpus audit");

    let mut report = ValidationReport::new();
    let mut weeks = Vec::with_capacity(WEEK_COUNT as usize);
    let mut loaded: Vec<(u8, WeekData)> = Vec::new();

    for week in 1..=WEEK_COUNT {
        let check = check_week(validator, content_root, week);
        report.merge(check.report);
        weeks.push(check.status);
        if let Some(value) = check.canonical {
            loaded.push((week, WeekData::new(value)));
        }
    }

    tracing::debug!(loaded = loaded.len(), "canonical files loaded for statistics");

    report.merge(check_progression(&loaded));

    let (xp, xp_report) = check_xp_balance(&loaded);
    report.merge(xp_report);

    let (skills, skills_report) = check_skill_coverage(&loaded);
    report.merge(skills_report);

    CorpusReport {
        report,
        weeks,
        xp,
        skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursecheck_core::{Severity, Skill, Verdict};
    use serde_json::{json, Value};
    use std::path::Path;

    /// Write a schema-valid week document whose five modules together
    /// cover every required skill at least twice per corpus.
    fn write_valid_week(root: &Path, week: u8) {
        let all: Vec<&str> = Skill::all().iter().map(|s| s.as_str()).collect();
        let difficulty = if week <= 2 { "beginner" } else { "intermediate" };
        let modules: Vec<Value> = (1..=5)
            .map(|n| {
                json!({
                    "id": format!("w{week}m{n}"),
                    "number": n,
                    "title": format!("Module {n}"),
                    "duration": "45 min",
                    "difficulty": difficulty,
                    "xp": 100,
                    "skills": all,
                    "objectives": ["practice"],
                    "content": {"lesson": "see https://example.com/notes"}
                })
            })
            .collect();
        let doc = json!({
            "week": week,
            "title": format!("Week {week}"),
            "description": "desc",
            "modules": modules,
            "week_summary": {"total_xp": 500}
        });
        let dir = week_dir(root, week);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CANONICAL_FILE), doc.to_string()).unwrap();
    }

    fn write_full_corpus(root: &Path) {
        for week in 1..=WEEK_COUNT {
            write_valid_week(root, week);
        }
    }

    fn validator() -> WeekValidator {
        WeekValidator::new().unwrap()
    }

    #[test]
    fn clean_corpus_passes() {
        let root = tempfile::tempdir().unwrap();
        write_full_corpus(root.path());

        let result = audit_corpus(&validator(), root.path());
        assert_eq!(result.report.verdict(), Verdict::Passed);
        assert_eq!(result.report.error_count(), 0);
        assert_eq!(result.report.info_count(), 8);
        assert_eq!(result.weeks.len(), 8);
        assert!(result.weeks.iter().all(|w| w.valid));
        assert_eq!(result.xp.total, 4000);
        assert_eq!(result.xp.average, 500.0);
        assert!(result.skills.values().all(|teachers| teachers.len() == 40));
    }

    #[test]
    fn empty_root_fails_with_missing_weeks_and_coverage() {
        let root = tempfile::tempdir().unwrap();
        let result = audit_corpus(&validator(), root.path());

        assert_eq!(result.report.verdict(), Verdict::Failed);
        // Eight missing directories plus eight uncovered skills.
        assert_eq!(result.report.error_count(), 16);
        assert!(result.weeks.iter().all(|w| !w.exists));
        assert_eq!(result.xp.total, 0);
    }

    #[test]
    fn one_missing_week_does_not_stop_the_rest() {
        let root = tempfile::tempdir().unwrap();
        write_full_corpus(root.path());
        std::fs::remove_dir_all(week_dir(root.path(), 4)).unwrap();

        let result = audit_corpus(&validator(), root.path());
        assert_eq!(result.report.error_count(), 1);
        assert!(!result.weeks[3].exists);
        assert!(result.weeks[4].valid);
        // Mean skips the missing week: 7 weeks of 500 XP each.
        assert_eq!(result.xp.average, 500.0);
        assert_eq!(result.xp.per_week.len(), 7);
    }

    #[test]
    fn uncovered_skill_fails_the_corpus() {
        let root = tempfile::tempdir().unwrap();
        write_full_corpus(root.path());

        // Rewrite every week without the git skill.
        for week in 1..=WEEK_COUNT {
            let path = week_dir(root.path(), week).join(CANONICAL_FILE);
            let mut doc: Value =
                serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
            for module in doc["modules"].as_array_mut().unwrap() {
                let skills = module["skills"].as_array_mut().unwrap();
                skills.retain(|s| s.as_str() != Some("git"));
            }
            std::fs::write(&path, doc.to_string()).unwrap();
        }

        let result = audit_corpus(&validator(), root.path());
        assert_eq!(result.report.verdict(), Verdict::Failed);
        let errors: Vec<_> = result.report.messages(Severity::Error).collect();
        assert_eq!(errors, ["skill 'git' is not taught in any module"]);
        assert!(result.skills[&Skill::Git].is_empty());
    }

    #[test]
    fn audit_is_deterministic() {
        let root = tempfile::tempdir().unwrap();
        write_full_corpus(root.path());
        // Leave some findings in place so determinism covers a busy report.
        std::fs::remove_dir_all(week_dir(root.path(), 2)).unwrap();

        let first = audit_corpus(&validator(), root.path());
        let second = audit_corpus(&validator(), root.path());
        assert_eq!(first.report, second.report);
        assert_eq!(first.xp, second.xp);
        assert_eq!(first.skills, second.skills);
    }

    #[test]
    fn issue_order_is_weeks_then_statistics() {
        let root = tempfile::tempdir().unwrap();
        write_valid_week(root.path(), 1);

        // Strip one skill and skew the declared XP so both statistical
        // checks have something to say.
        let path = week_dir(root.path(), 1).join(CANONICAL_FILE);
        let mut doc: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        for module in doc["modules"].as_array_mut().unwrap() {
            module["skills"]
                .as_array_mut()
                .unwrap()
                .retain(|s| s.as_str() != Some("databases"));
        }
        doc["week_summary"]["total_xp"] = json!(450);
        std::fs::write(&path, doc.to_string()).unwrap();

        let result = audit_corpus(&validator(), root.path());
        let messages: Vec<_> = result
            .report
            .issues()
            .iter()
            .map(|i| i.message.as_str())
            .collect();

        let week_8_at = messages
            .iter()
            .position(|m| m.contains("week 8 directory"))
            .unwrap();
        let xp_at = messages
            .iter()
            .position(|m| m.contains("XP mismatch"))
            .unwrap();
        let coverage_at = messages
            .iter()
            .position(|m| m.contains("not taught in any module"))
            .unwrap();
        assert!(week_8_at < xp_at);
        assert!(xp_at < coverage_at);
    }
}
