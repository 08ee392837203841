use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionStatus {
    Active,
    #[default]
    Queued,
    Paused,
}

impl MissionStatus {
    pub fn allowed_transitions(&self) -> &'static [MissionStatus] {
        use MissionStatus::*;
        match self {
            Queued => &[Active, Paused],
            Active => &[Queued, Paused],
            // Re-pausing only replaces the recorded reason.
            Paused => &[Queued, Active, Paused],
        }
    }

    pub fn can_transition_to(&self, target: MissionStatus) -> bool {
        self.allowed_transitions().contains(&target)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    pub fn can_resume(&self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Only queued missions compete for admission.
    pub fn is_schedulable(&self) -> bool {
        matches!(self, Self::Queued)
    }
}

impl fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Active => "active",
            Self::Queued => "queued",
            Self::Paused => "paused",
        };
        write!(f, "{}", s)
    }
}
