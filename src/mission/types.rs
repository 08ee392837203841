use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MissionStatus;
use crate::error::{PilotError, Result};
use crate::fatigue::Complexity;

/// Immutable snapshot of a mission. Status changes produce a replacement
/// entry with the same id, effort, payoff and ROI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionEntry {
    id: String,
    description: String,
    effort_minutes: i64,
    payoff_minutes: i64,
    roi: f64,
    status: MissionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pause_reason: Option<String>,
    created_at: DateTime<Utc>,
}

impl MissionEntry {
    /// Validates the estimates and builds a queued entry.
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        effort_minutes: i64,
        payoff_minutes: i64,
    ) -> Result<Self> {
        let id = id.into();
        let description = description.into();

        if effort_minutes <= 0 {
            return Err(PilotError::InvalidMission(format!(
                "{}: effort_minutes must be positive, got {}",
                id, effort_minutes
            )));
        }
        if payoff_minutes < 0 {
            return Err(PilotError::InvalidMission(format!(
                "{}: payoff_minutes must not be negative, got {}",
                id, payoff_minutes
            )));
        }
        if id.trim().is_empty() {
            return Err(PilotError::InvalidMission("id must not be empty".into()));
        }
        if description.trim().is_empty() {
            return Err(PilotError::InvalidMission(format!(
                "{}: description must not be empty",
                id
            )));
        }

        Ok(Self {
            id,
            description,
            effort_minutes,
            payoff_minutes,
            roi: payoff_minutes as f64 / effort_minutes as f64,
            status: MissionStatus::Queued,
            pause_reason: None,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn effort_minutes(&self) -> i64 {
        self.effort_minutes
    }

    pub fn payoff_minutes(&self) -> i64 {
        self.payoff_minutes
    }

    pub fn roi(&self) -> f64 {
        self.roi
    }

    pub fn status(&self) -> MissionStatus {
        self.status
    }

    pub fn pause_reason(&self) -> Option<&str> {
        self.pause_reason.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn complexity(&self) -> Complexity {
        Complexity::for_effort(self.effort_minutes)
    }

    pub fn is_deferred_good_idea(&self) -> bool {
        self.status == MissionStatus::Paused && self.roi > 0.0
    }

    pub(crate) fn activated(&self) -> Self {
        Self {
            status: MissionStatus::Active,
            pause_reason: None,
            ..self.clone()
        }
    }

    pub(crate) fn queued(&self) -> Self {
        Self {
            status: MissionStatus::Queued,
            pause_reason: None,
            ..self.clone()
        }
    }

    pub(crate) fn paused(&self, reason: impl Into<String>) -> Self {
        Self {
            status: MissionStatus::Paused,
            pause_reason: Some(reason.into()),
            ..self.clone()
        }
    }
}
