//! Budget and fatigue model.
//!
//! Stateless classification of daily effort usage:
//! - `DailyBudget`: immutable (total, used) effort sample
//! - `FatigueScore`: state, capacity multiplier, quality impact, recommendation
//! - `compute`, `adjust_roi`, `can_accept_new_mission`: pure helpers

mod budget;
mod score;

pub use budget::DailyBudget;
pub use score::{
    Complexity, FatigueScore, FatigueState, QualityImpact, adjust_roi, can_accept_new_mission,
    compute,
};
