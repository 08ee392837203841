use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::mission::{MissionEntry, MissionStatus};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total: usize,
    pub active: usize,
    pub queued: usize,
    pub paused: usize,
    pub active_mission: Option<String>,
    /// Sum of ROI over active and queued missions.
    pub aggregate_roi: f64,
    pub deferred_good_ideas: Vec<String>,
}

impl PortfolioSummary {
    pub(crate) fn from_missions(missions: &[MissionEntry], deferred: &[MissionEntry]) -> Self {
        let count = |status: MissionStatus| {
            missions
                .iter()
                .filter(|m| m.status() == status)
                .count()
        };

        Self {
            total: missions.len(),
            active: count(MissionStatus::Active),
            queued: count(MissionStatus::Queued),
            paused: count(MissionStatus::Paused),
            active_mission: missions
                .iter()
                .find(|m| m.status().is_active())
                .map(|m| m.id().to_string()),
            aggregate_roi: missions
                .iter()
                .filter(|m| m.status() != MissionStatus::Paused)
                .map(MissionEntry::roi)
                .sum(),
            deferred_good_ideas: deferred.iter().map(|m| m.id().to_string()).collect(),
        }
    }
}

/// Audit entry for a single status change. `from` is `None` on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub mission_id: String,
    pub from: Option<MissionStatus>,
    pub to: MissionStatus,
    pub reason: String,
    pub at: DateTime<Utc>,
}

impl TransitionRecord {
    pub fn new(
        mission_id: impl Into<String>,
        from: Option<MissionStatus>,
        to: MissionStatus,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            mission_id: mission_id.into(),
            from,
            to,
            reason: reason.into(),
            at: Utc::now(),
        }
    }
}
