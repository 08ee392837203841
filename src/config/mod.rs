//! Configuration types and loading.
//!
//! - `PilotConfig`: top-level configuration with validation
//! - `BudgetConfig`, `MissionConfig`, `DisplayConfig`: per-section settings

mod settings;

pub use settings::{BudgetConfig, CONFIG_FILE_NAME, DisplayConfig, MissionConfig, PilotConfig};
