use serde::{Deserialize, Serialize};

/// Effort sample for the current day, in minutes.
///
/// Callers construct a fresh value each time they sample elapsed effort.
/// `used_minutes` may exceed `total_minutes` when the caller reports overage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DailyBudget {
    total_minutes: u32,
    used_minutes: u32,
}

impl DailyBudget {
    pub fn new(total_minutes: u32, used_minutes: u32) -> Self {
        Self {
            total_minutes,
            used_minutes,
        }
    }

    /// Budget with nothing spent yet.
    pub fn fresh(total_minutes: u32) -> Self {
        Self::new(total_minutes, 0)
    }

    pub fn total_minutes(&self) -> u32 {
        self.total_minutes
    }

    pub fn used_minutes(&self) -> u32 {
        self.used_minutes
    }

    pub fn remaining_minutes(&self) -> u32 {
        self.total_minutes.saturating_sub(self.used_minutes)
    }

    /// Fraction of the budget consumed. A zero-sized budget counts as fully used.
    pub fn usage_ratio(&self) -> f64 {
        if self.total_minutes == 0 {
            return 1.0;
        }
        self.used_minutes as f64 / self.total_minutes as f64
    }
}
