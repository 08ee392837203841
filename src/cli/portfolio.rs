use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::MissionConfig;
use crate::error::{PilotError, Result};
use crate::mission::MissionStatus;
use crate::orchestrator::MissionOrchestrator;

/// Mission list supplied by the host, e.g.
///
/// ```toml
/// [[missions]]
/// id = "m1"
/// description = "Ship login form"
/// effort_minutes = 30
/// payoff_minutes = 120
/// status = "active"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioFile {
    #[serde(default)]
    pub missions: Vec<PortfolioMission>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioMission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub description: String,
    pub effort_minutes: i64,
    pub payoff_minutes: i64,
    #[serde(default)]
    pub status: MissionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_reason: Option<String>,
}

impl PortfolioFile {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PilotError::Config(format!(
                "portfolio file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let file: Self = toml::from_str(content)?;
        let active = file
            .missions
            .iter()
            .filter(|m| m.status == MissionStatus::Active)
            .count();
        if active > 1 {
            return Err(PilotError::InvalidArgument(format!(
                "portfolio lists {} active missions; at most one is allowed",
                active
            )));
        }
        Ok(file)
    }

    /// Registers every mission, then applies the declared statuses.
    pub fn into_orchestrator(self, config: MissionConfig) -> Result<MissionOrchestrator> {
        let mut orch = MissionOrchestrator::with_config(config);

        for mission in self.missions {
            let entry = orch.add_mission(
                mission.description,
                mission.effort_minutes,
                mission.payoff_minutes,
                mission.id.as_deref(),
            )?;
            match mission.status {
                MissionStatus::Queued => {}
                MissionStatus::Active => orch.set_active_mission(entry.id())?,
                MissionStatus::Paused => orch.pause_mission(
                    entry.id(),
                    mission
                        .pause_reason
                        .unwrap_or_else(|| "paused in portfolio".to_string()),
                )?,
            }
        }

        debug!(missions = orch.len(), "Portfolio loaded");
        Ok(orch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_build() {
        let content = r#"
[[missions]]
id = "m1"
description = "Ship login form"
effort_minutes = 30
payoff_minutes = 120
status = "active"

[[missions]]
description = "Write docs"
effort_minutes = 45
payoff_minutes = 60

[[missions]]
id = "later"
description = "Migrate CI"
effort_minutes = 120
payoff_minutes = 240
status = "paused"
pause_reason = "waiting for runners"
"#;
        let orch = PortfolioFile::parse(content)
            .unwrap()
            .into_orchestrator(MissionConfig::default())
            .unwrap();

        assert_eq!(orch.active_mission().unwrap().id(), "m1");
        assert_eq!(orch.get_mission("m-001").unwrap().description(), "Write docs");
        assert_eq!(
            orch.get_mission("later").unwrap().pause_reason(),
            Some("waiting for runners")
        );
    }

    #[test]
    fn test_two_active_rejected() {
        let content = r#"
[[missions]]
description = "a"
effort_minutes = 10
payoff_minutes = 10
status = "active"

[[missions]]
description = "b"
effort_minutes = 10
payoff_minutes = 10
status = "active"
"#;
        assert!(matches!(
            PortfolioFile::parse(content),
            Err(PilotError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_invalid_effort_surfaces() {
        let content = r#"
[[missions]]
description = "free lunch"
effort_minutes = 0
payoff_minutes = 10
"#;
        let err = PortfolioFile::parse(content)
            .unwrap()
            .into_orchestrator(MissionConfig::default())
            .unwrap_err();
        assert!(matches!(err, PilotError::InvalidMission(_)));
    }
}
