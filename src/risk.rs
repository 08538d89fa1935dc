//! Risk aggregation over clause verdicts.

use crate::types::ClauseReview;

/// Categories a reviewer expects to find in a healthy contract.
pub const KEY_CLAUSE_CATEGORIES: [&str; 6] = [
    "Indemnity",
    "Termination",
    "Non-Compete",
    "Auto-Renewal",
    "Penalty",
    "Lock-in",
];

/// One entry of the key-clause checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistEntry {
    pub category: &'static str,
    pub present: bool,
}

/// Overall document risk: rounded arithmetic mean of clause scores.
///
/// Order-commutative, so clause annotation may run in any order without
/// changing the aggregate. An empty review list scores 0.
#[must_use]
pub fn overall_risk(reviews: &[ClauseReview]) -> u8 {
    if reviews.is_empty() {
        return 0;
    }

    let total: u32 = reviews.iter().map(|r| u32::from(r.analysis.score)).sum();
    let mean = f64::from(total) / reviews.len() as f64;
    mean.round() as u8
}

/// Check which key clause categories the verdicts cover.
///
/// Matching is case-insensitive substring on the verdict category, so
/// "Non-Compete" also matches a model answering "Non-compete clause".
#[must_use]
pub fn checklist(reviews: &[ClauseReview]) -> Vec<ChecklistEntry> {
    KEY_CLAUSE_CATEGORIES
        .iter()
        .map(|category| {
            let needle = category.to_lowercase();
            let present = reviews
                .iter()
                .any(|r| r.analysis.clause_type.to_lowercase().contains(&needle));
            ChecklistEntry { category, present }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Clause;
    use crate::types::{ClauseAnalysis, ClauseReview};

    fn review(category: &str, score: u8) -> ClauseReview {
        let clause = Clause::new("1. Test", "content long enough to matter");
        let mut analysis = ClauseAnalysis::fallback();
        analysis.clause_type = category.to_string();
        analysis.score = score;
        ClauseReview::new(&clause, analysis)
    }

    #[test]
    fn test_overall_risk_empty() {
        assert_eq!(overall_risk(&[]), 0);
    }

    #[test]
    fn test_overall_risk_mean() {
        let reviews = vec![review("General", 20), review("Penalty", 80)];
        assert_eq!(overall_risk(&reviews), 50);
    }

    #[test]
    fn test_overall_risk_rounds() {
        let reviews = vec![
            review("General", 10),
            review("General", 10),
            review("Penalty", 11),
        ];
        // mean = 10.333... rounds to 10
        assert_eq!(overall_risk(&reviews), 10);

        let reviews = vec![review("General", 10), review("Penalty", 11)];
        // mean = 10.5 rounds to 11 (round half away from zero)
        assert_eq!(overall_risk(&reviews), 11);
    }

    #[test]
    fn test_overall_risk_order_commutative() {
        let forward = vec![review("A", 15), review("B", 45), review("C", 90)];
        let backward = vec![review("C", 90), review("B", 45), review("A", 15)];
        assert_eq!(overall_risk(&forward), overall_risk(&backward));
    }

    #[test]
    fn test_checklist_present_and_missing() {
        let reviews = vec![review("Indemnity", 70), review("Termination", 40)];
        let entries = checklist(&reviews);

        assert_eq!(entries.len(), 6);
        assert!(entries
            .iter()
            .find(|e| e.category == "Indemnity")
            .is_some_and(|e| e.present));
        assert!(entries
            .iter()
            .find(|e| e.category == "Penalty")
            .is_some_and(|e| !e.present));
    }

    #[test]
    fn test_checklist_case_insensitive_substring() {
        let reviews = vec![review("non-compete clause", 50)];
        let entries = checklist(&reviews);
        assert!(entries
            .iter()
            .find(|e| e.category == "Non-Compete")
            .is_some_and(|e| e.present));
    }
}
