//! Priority scoring and plan types.
//!
//! Every queued mission is scored once against the full available budget:
//!
//! ```text
//! roi_normalized = min(1.0, roi / 3.0)
//! fits_budget    = 1.0 if effort <= budget else 0.3
//! efficiency     = 1.0 / (1.0 + effort / 60.0)
//! score          = 0.5 * roi_normalized + 0.3 * fits_budget + 0.2 * efficiency
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::mission::MissionEntry;

pub const ROI_WEIGHT: f64 = 0.5;
pub const FIT_WEIGHT: f64 = 0.3;
pub const EFFICIENCY_WEIGHT: f64 = 0.2;

/// ROI at which the normalized signal saturates.
pub const ROI_CEILING: f64 = 3.0;
pub const OVER_BUDGET_FIT: f64 = 0.3;
pub const EFFICIENCY_HORIZON_MINUTES: f64 = 60.0;

pub const BUDGET_PAUSE_REASON: &str = "exceeds available budget";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub roi_normalized: f64,
    pub fits_budget: f64,
    pub efficiency: f64,
    pub total: f64,
}

impl ScoreBreakdown {
    pub fn for_mission(entry: &MissionEntry, available_budget_minutes: i64) -> Self {
        let effort = entry.effort_minutes();
        let roi_normalized = (entry.roi() / ROI_CEILING).min(1.0);
        let fits_budget = if effort <= available_budget_minutes {
            1.0
        } else {
            OVER_BUDGET_FIT
        };
        let efficiency = 1.0 / (1.0 + effort as f64 / EFFICIENCY_HORIZON_MINUTES);
        let total =
            ROI_WEIGHT * roi_normalized + FIT_WEIGHT * fits_budget + EFFICIENCY_WEIGHT * efficiency;

        Self {
            roi_normalized,
            fits_budget,
            efficiency,
            total,
        }
    }

    pub fn fits(&self) -> bool {
        self.fits_budget >= 1.0
    }

    pub fn describe(&self, roi: f64) -> String {
        format!(
            "roi {:.2} (normalized {:.2}), {}, efficiency {:.2}",
            roi,
            self.roi_normalized,
            if self.fits() {
                "fits budget"
            } else {
                "larger than budget"
            },
            self.efficiency
        )
    }
}

/// Total order used for ranking: higher score first, then smaller effort,
/// then lexicographic id.
pub(crate) fn rank_order(
    a: &(&MissionEntry, ScoreBreakdown),
    b: &(&MissionEntry, ScoreBreakdown),
) -> Ordering {
    b.1.total
        .total_cmp(&a.1.total)
        .then_with(|| a.0.effort_minutes().cmp(&b.0.effort_minutes()))
        .then_with(|| a.0.id().cmp(b.0.id()))
}

/// One admitted mission in a prioritized plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionPriority {
    /// 1-based position in the admitted plan.
    pub rank: usize,
    pub mission_id: String,
    pub description: String,
    pub effort_minutes: i64,
    pub roi: f64,
    pub score: f64,
    pub factors: ScoreBreakdown,
    pub cumulative_effort_minutes: i64,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrioritizationResult {
    pub available_budget_minutes: i64,
    pub ranked: Vec<MissionPriority>,
    /// Ids that failed the budget check, in evaluation order.
    pub budget_paused: Vec<String>,
    pub cumulative_effort_minutes: i64,
    pub rationale: Vec<String>,
}

impl PrioritizationResult {
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty() && self.budget_paused.is_empty()
    }

    pub fn admitted_ids(&self) -> Vec<&str> {
        self.ranked.iter().map(|p| p.mission_id.as_str()).collect()
    }

    pub fn remaining_budget_minutes(&self) -> i64 {
        self.available_budget_minutes - self.cumulative_effort_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, effort: i64, payoff: i64) -> MissionEntry {
        MissionEntry::new(id, format!("mission {}", id), effort, payoff).unwrap()
    }

    #[test]
    fn test_score_formula() {
        let m1 = entry("m1", 30, 120);
        let score = ScoreBreakdown::for_mission(&m1, 300);

        assert!((score.roi_normalized - 1.0).abs() < 1e-9);
        assert!((score.fits_budget - 1.0).abs() < 1e-9);
        assert!((score.efficiency - 2.0 / 3.0).abs() < 1e-9);
        assert!((score.total - 0.9333).abs() < 1e-3);
    }

    #[test]
    fn test_over_budget_fit_penalty() {
        let big = entry("big", 400, 400);
        let score = ScoreBreakdown::for_mission(&big, 300);
        assert!((score.fits_budget - OVER_BUDGET_FIT).abs() < 1e-9);
        assert!(!score.fits());
        assert!(score.describe(big.roi()).contains("larger than budget"));
    }

    #[test]
    fn test_rank_order_tie_breaks() {
        // Same ROI and effort: only the id separates them.
        let a = entry("a", 60, 60);
        let b = entry("b", 60, 60);
        let sa = ScoreBreakdown::for_mission(&a, 100);
        let sb = ScoreBreakdown::for_mission(&b, 100);
        assert_eq!(rank_order(&(&a, sa), &(&b, sb)), Ordering::Less);
        assert_eq!(rank_order(&(&b, sb), &(&a, sa)), Ordering::Greater);
    }

    #[test]
    fn test_rank_order_prefers_smaller_effort_on_equal_score() {
        // Id order says "a" first; effort order says "z" first.
        let a = entry("a", 90, 90);
        let z = entry("z", 30, 30);
        let tied = ScoreBreakdown {
            roi_normalized: 0.5,
            fits_budget: 1.0,
            efficiency: 0.5,
            total: 0.75,
        };
        assert_eq!(rank_order(&(&z, tied), &(&a, tied)), Ordering::Less);
        assert_eq!(rank_order(&(&a, tied), &(&z, tied)), Ordering::Greater);

        let mut candidates = vec![(&a, tied), (&z, tied)];
        candidates.sort_by(rank_order);
        assert_eq!(candidates[0].0.id(), "z");
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert!((ROI_WEIGHT + FIT_WEIGHT + EFFICIENCY_WEIGHT - 1.0).abs() < 1e-9);
    }
}
