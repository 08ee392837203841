use std::fmt;

use serde::{Deserialize, Serialize};

use super::DailyBudget;

const FRESH_UPPER: f64 = 0.20;
const NORMAL_UPPER: f64 = 0.60;
const TIRED_UPPER: f64 = 0.85;

const SIMPLE_MAX_EFFORT: i64 = 30;
const MEDIUM_MAX_EFFORT: i64 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FatigueState {
    Fresh,
    Normal,
    Tired,
    Exhausted,
}

impl FatigueState {
    /// Bands are half-open: a ratio sitting exactly on a boundary belongs to
    /// the more severe state.
    pub fn from_usage_ratio(ratio: f64) -> Self {
        if ratio < FRESH_UPPER {
            Self::Fresh
        } else if ratio < NORMAL_UPPER {
            Self::Normal
        } else if ratio < TIRED_UPPER {
            Self::Tired
        } else {
            // NaN also lands here.
            Self::Exhausted
        }
    }

    pub fn capacity_multiplier(&self) -> f64 {
        match self {
            Self::Fresh => 1.0,
            Self::Normal => 0.85,
            Self::Tired => 0.6,
            Self::Exhausted => 0.3,
        }
    }

    pub fn max_complexity(&self) -> Complexity {
        match self {
            Self::Fresh => Complexity::Complex,
            Self::Normal => Complexity::Medium,
            Self::Tired => Complexity::Simple,
            Self::Exhausted => Complexity::None,
        }
    }

    pub fn quality_impact(&self) -> QualityImpact {
        match self {
            Self::Fresh => QualityImpact {
                error_rate: 1.0,
                decision_quality: 1.0,
                focus: 1.0,
            },
            Self::Normal => QualityImpact {
                error_rate: 1.2,
                decision_quality: 0.9,
                focus: 0.85,
            },
            Self::Tired => QualityImpact {
                error_rate: 1.6,
                decision_quality: 0.7,
                focus: 0.6,
            },
            Self::Exhausted => QualityImpact {
                error_rate: 2.5,
                decision_quality: 0.4,
                focus: 0.3,
            },
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::Fresh => {
                "Fresh: good window for complex, high-leverage missions. Start the hardest work."
            }
            Self::Normal => {
                "Normal: keep going with medium-complexity work; avoid opening large new efforts."
            }
            Self::Tired => {
                "Tired: stick to simple tasks and wrap up in-flight work before switching context."
            }
            Self::Exhausted => {
                "Exhausted: stop accepting new missions. Rest, or hand off anything urgent."
            }
        }
    }
}

impl fmt::Display for FatigueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Fresh => "fresh",
            Self::Normal => "normal",
            Self::Tired => "tired",
            Self::Exhausted => "exhausted",
        };
        write!(f, "{}", s)
    }
}

/// Work complexity tiers. `None` is only meaningful as a ceiling: an exhausted
/// operator accepts no new work at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    None,
    Simple,
    Medium,
    Complex,
}

impl Complexity {
    /// Tier implied by a mission's effort estimate.
    pub fn for_effort(effort_minutes: i64) -> Self {
        if effort_minutes <= SIMPLE_MAX_EFFORT {
            Self::Simple
        } else if effort_minutes <= MEDIUM_MAX_EFFORT {
            Self::Medium
        } else {
            Self::Complex
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::Simple => "simple",
            Self::Medium => "medium",
            Self::Complex => "complex",
        };
        write!(f, "{}", s)
    }
}

/// Multipliers relative to a fresh baseline. `error_rate` grows with
/// severity; `decision_quality` and `focus` shrink.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityImpact {
    pub error_rate: f64,
    pub decision_quality: f64,
    pub focus: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatigueScore {
    pub state: FatigueState,
    pub usage_ratio: f64,
    pub remaining_minutes: u32,
    pub capacity_multiplier: f64,
    pub max_complexity: Complexity,
    pub quality_impact: QualityImpact,
    pub can_accept_new_mission: bool,
    pub recommendation: String,
}

impl FatigueScore {
    /// Whether work of the given tier fits under the current ceiling.
    pub fn accepts(&self, complexity: Complexity) -> bool {
        self.can_accept_new_mission
            && complexity != Complexity::None
            && complexity <= self.max_complexity
    }
}

/// Classifies a budget sample. Pure: equal inputs always produce equal scores.
pub fn compute(budget: &DailyBudget) -> FatigueScore {
    let usage_ratio = budget.usage_ratio();
    let state = FatigueState::from_usage_ratio(usage_ratio);

    FatigueScore {
        state,
        usage_ratio,
        remaining_minutes: budget.remaining_minutes(),
        capacity_multiplier: state.capacity_multiplier(),
        max_complexity: state.max_complexity(),
        quality_impact: state.quality_impact(),
        can_accept_new_mission: state != FatigueState::Exhausted,
        recommendation: state.recommendation().to_string(),
    }
}

/// Discounts an ROI by current capacity. Opt-in for callers; prioritization
/// never applies it on its own.
pub fn adjust_roi(roi: f64, score: &FatigueScore) -> f64 {
    roi * score.capacity_multiplier
}

/// The single hard stop: exhausted operators take no new missions.
pub fn can_accept_new_mission(score: &FatigueScore) -> bool {
    score.state != FatigueState::Exhausted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries_belong_to_higher_severity() {
        assert_eq!(FatigueState::from_usage_ratio(0.0), FatigueState::Fresh);
        assert_eq!(FatigueState::from_usage_ratio(0.199), FatigueState::Fresh);
        assert_eq!(FatigueState::from_usage_ratio(0.20), FatigueState::Normal);
        assert_eq!(FatigueState::from_usage_ratio(0.60), FatigueState::Tired);
        assert_eq!(FatigueState::from_usage_ratio(0.85), FatigueState::Exhausted);
        assert_eq!(FatigueState::from_usage_ratio(1.7), FatigueState::Exhausted);
    }

    #[test]
    fn test_states_ordered_by_severity() {
        assert!(FatigueState::Fresh < FatigueState::Normal);
        assert!(FatigueState::Normal < FatigueState::Tired);
        assert!(FatigueState::Tired < FatigueState::Exhausted);
    }

    #[test]
    fn test_quality_impact_worsens_monotonically() {
        let states = [
            FatigueState::Fresh,
            FatigueState::Normal,
            FatigueState::Tired,
            FatigueState::Exhausted,
        ];
        for pair in states.windows(2) {
            let (better, worse) = (pair[0].quality_impact(), pair[1].quality_impact());
            assert!(worse.error_rate > better.error_rate);
            assert!(worse.decision_quality < better.decision_quality);
            assert!(worse.focus < better.focus);
            assert!(pair[1].capacity_multiplier() < pair[0].capacity_multiplier());
        }
    }

    #[test]
    fn test_complexity_for_effort() {
        assert_eq!(Complexity::for_effort(20), Complexity::Simple);
        assert_eq!(Complexity::for_effort(30), Complexity::Simple);
        assert_eq!(Complexity::for_effort(60), Complexity::Medium);
        assert_eq!(Complexity::for_effort(120), Complexity::Complex);
    }

    #[test]
    fn test_accepts_respects_ceiling() {
        let tired = compute(&DailyBudget::new(100, 70));
        assert_eq!(tired.state, FatigueState::Tired);
        assert!(tired.accepts(Complexity::Simple));
        assert!(!tired.accepts(Complexity::Medium));

        let exhausted = compute(&DailyBudget::new(100, 90));
        assert!(!exhausted.accepts(Complexity::Simple));
        assert!(!can_accept_new_mission(&exhausted));
    }

    #[test]
    fn test_adjust_roi_scales_by_capacity() {
        let normal = compute(&DailyBudget::new(480, 200));
        assert!((adjust_roi(2.0, &normal) - 1.7).abs() < 1e-9);
    }
}
