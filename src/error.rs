use thiserror::Error;

use crate::mission::MissionStatus;

#[derive(Error, Debug)]
pub enum PilotError {
    #[error("Invalid mission: {0}")]
    InvalidMission(String),

    #[error("Mission already exists: {0}")]
    DuplicateMission(String),

    #[error("Mission not found: {0}")]
    NotFound(String),

    #[error("Invalid state transition for {id}: {from} → {to}")]
    InvalidTransition {
        id: String,
        from: MissionStatus,
        to: MissionStatus,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PilotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_message() {
        let err = PilotError::InvalidTransition {
            id: "m1".into(),
            from: MissionStatus::Queued,
            to: MissionStatus::Queued,
        };
        assert_eq!(
            err.to_string(),
            "Invalid state transition for m1: queued → queued"
        );
    }
}
