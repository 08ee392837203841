use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PilotError, Result};

pub const CONFIG_FILE_NAME: &str = "focus-pilot.toml";

/// Host-level settings. Scoring weights and fatigue thresholds are fixed in
/// code and intentionally have no knobs here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PilotConfig {
    pub budget: BudgetConfig,
    pub missions: MissionConfig,
    pub display: DisplayConfig,
}

impl PilotConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads from `path` if given, otherwise from `focus-pilot.toml` in the
    /// working directory, falling back to defaults when neither exists.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) if !p.exists() => Err(PilotError::Config(format!(
                "config file not found: {}",
                p.display()
            ))),
            Some(p) => Self::load(p),
            None => Self::load(&Self::default_path()),
        }
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE_NAME)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let content =
            toml::to_string_pretty(self).map_err(|e| PilotError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| PilotError::Config(e.to_string()))
    }

    /// Validate configuration values for consistency.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.budget.daily_minutes == 0 {
            errors.push("budget.daily_minutes must be greater than 0".to_string());
        }
        if self.missions.id_prefix.trim().is_empty() {
            errors.push("missions.id_prefix must not be empty".to_string());
        }
        if self.missions.id_prefix.chars().any(char::is_whitespace) {
            errors.push("missions.id_prefix must not contain whitespace".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(PilotError::Config(errors.join("; ")))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    /// Total effort available per day when the caller does not pass one.
    pub daily_minutes: u32,
    /// Effort already spent today when the caller does not pass one.
    pub used_minutes: u32,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            daily_minutes: 480,
            used_minutes: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionConfig {
    /// Prefix for generated ids, e.g. `m` gives `m-001`.
    pub id_prefix: String,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            id_prefix: "m".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_rationale: bool,
    pub show_history: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_rationale: true,
            show_history: false,
        }
    }
}
