//! Command-line host around the prioritization core.
//!
//! - `Cli`, `Commands`: CLI argument definitions via clap
//! - `Display`: formatted terminal output
//! - `PortfolioFile`: TOML mission list consumed by `plan`

mod commands;
mod display;
mod portfolio;

pub use commands::{Cli, Commands, ConfigAction, OutputFormat};
pub use display::Display;
pub use portfolio::{PortfolioFile, PortfolioMission};
