use std::sync::Arc;

use parking_lot::Mutex;

use super::engine::MissionOrchestrator;
use super::scoring::PrioritizationResult;
use super::summary::PortfolioSummary;
use crate::error::Result;
use crate::mission::MissionEntry;

/// Thread-safe handle around one orchestrator.
///
/// A single lock guards the whole portfolio: mutations and prioritization
/// (which may pause missions) are serialized, so concurrent activations can
/// never leave two missions active. Queries return owned snapshots.
#[derive(Debug, Clone, Default)]
pub struct SharedOrchestrator {
    inner: Arc<Mutex<MissionOrchestrator>>,
}

impl SharedOrchestrator {
    pub fn new(orchestrator: MissionOrchestrator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(orchestrator)),
        }
    }

    pub fn add_mission(
        &self,
        description: impl Into<String>,
        effort_minutes: i64,
        payoff_minutes: i64,
        id: Option<&str>,
    ) -> Result<MissionEntry> {
        self.inner
            .lock()
            .add_mission(description, effort_minutes, payoff_minutes, id)
    }

    pub fn set_active_mission(&self, id: &str) -> Result<()> {
        self.inner.lock().set_active_mission(id)
    }

    pub fn pause_mission(&self, id: &str, reason: impl Into<String>) -> Result<()> {
        self.inner.lock().pause_mission(id, reason)
    }

    pub fn resume_mission(&self, id: &str) -> Result<()> {
        self.inner.lock().resume_mission(id)
    }

    pub fn prioritize_missions(
        &self,
        available_budget_minutes: i64,
    ) -> Result<PrioritizationResult> {
        self.inner.lock().prioritize_missions(available_budget_minutes)
    }

    pub fn plan_missions(&self, available_budget_minutes: i64) -> Result<PrioritizationResult> {
        self.inner.lock().plan_missions(available_budget_minutes)
    }

    pub fn get_mission(&self, id: &str) -> Option<MissionEntry> {
        self.inner.lock().get_mission(id).cloned()
    }

    pub fn missions(&self) -> Vec<MissionEntry> {
        self.inner.lock().missions().to_vec()
    }

    pub fn get_deferred_good_ideas(&self) -> Vec<MissionEntry> {
        self.inner.lock().get_deferred_good_ideas()
    }

    pub fn get_portfolio_state(&self) -> PortfolioSummary {
        self.inner.lock().get_portfolio_state()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::mission::MissionStatus;

    #[test]
    fn test_concurrent_activation_keeps_single_active() {
        let shared = SharedOrchestrator::default();
        for i in 0..8 {
            shared
                .add_mission(format!("Mission {}", i), 30, 60, Some(&format!("m{}", i)))
                .unwrap();
        }

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let handle = shared.clone();
                thread::spawn(move || {
                    for _ in 0..50 {
                        handle.set_active_mission(&format!("m{}", i)).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let active = shared
            .missions()
            .iter()
            .filter(|m| m.status() == MissionStatus::Active)
            .count();
        assert_eq!(active, 1);
        assert_eq!(shared.missions().len(), 8);
    }
}
