use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "focus-pilot")]
#[command(author, version, about = "Fatigue-aware mission prioritizer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Path to config file (default: ./focus-pilot.toml)
    #[arg(long, global = true, env = "FOCUS_PILOT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format for CLI results.
/// - Text: Human-readable text output (default)
/// - Json: Single JSON object
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify today's fatigue from effort spent
    Fatigue {
        /// Total effort budget for the day, in minutes
        #[arg(long)]
        total: Option<u32>,

        /// Effort already spent today, in minutes
        #[arg(long)]
        used: Option<u32>,
    },

    /// Rank missions from a portfolio file against the available budget
    Plan {
        /// Portfolio TOML file with [[missions]] entries
        #[arg(long)]
        portfolio: PathBuf,

        /// Minutes available for this plan (default: remaining daily budget)
        #[arg(long)]
        available: Option<i64>,

        /// Total effort budget for the day, in minutes
        #[arg(long)]
        total: Option<u32>,

        /// Effort already spent today, in minutes
        #[arg(long)]
        used: Option<u32>,

        /// Also show ROI discounted by current fatigue
        #[arg(long)]
        fatigue_adjusted: bool,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show effective configuration
    Show,
    /// Print the config file path in use
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
