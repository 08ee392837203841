pub mod cli;
pub mod config;
pub mod error;
pub mod fatigue;
pub mod mission;
pub mod orchestrator;
pub mod output;

pub use config::PilotConfig;
pub use error::{PilotError, Result};
pub use fatigue::{DailyBudget, FatigueScore, FatigueState};
pub use mission::{MissionEntry, MissionStatus};
pub use orchestrator::{
    MissionOrchestrator, MissionPriority, PortfolioSummary, PrioritizationResult,
    SharedOrchestrator,
};
