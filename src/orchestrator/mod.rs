//! Mission portfolio orchestration.
//!
//! - `MissionOrchestrator`: lifecycle state machine and budget-constrained ranking
//! - `SharedOrchestrator`: single-lock handle for multi-threaded hosts
//! - `PrioritizationResult`, `MissionPriority`: ranked plan with rationale trail
//! - `PortfolioSummary`, `TransitionRecord`: read-only views for downstream sinks

mod engine;
mod scoring;
mod shared;
mod summary;

pub use engine::MissionOrchestrator;
pub use scoring::{
    BUDGET_PAUSE_REASON, EFFICIENCY_WEIGHT, FIT_WEIGHT, MissionPriority, PrioritizationResult,
    ROI_WEIGHT, ScoreBreakdown,
};
pub use shared::SharedOrchestrator;
pub use summary::{PortfolioSummary, TransitionRecord};
