use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use focus_pilot::cli::{Cli, Commands, ConfigAction, Display, OutputFormat, PortfolioFile};
use focus_pilot::config::PilotConfig;
use focus_pilot::error::{PilotError, Result};
use focus_pilot::fatigue::{self, DailyBudget};
use focus_pilot::output::{OutputWriter, PlanReport};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Display::new().print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("focus_pilot=debug")
    } else {
        EnvFilter::new("focus_pilot=info")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let writer = OutputWriter::new(cli.output);
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Fatigue { total, used } => {
            let config = PilotConfig::load_or_default(config_path)?;
            cmd_fatigue(&writer, &config, total, used)
        }
        Commands::Plan {
            portfolio,
            available,
            total,
            used,
            fatigue_adjusted,
        } => {
            let config = PilotConfig::load_or_default(config_path)?;
            let budget = budget_from(&config, total, used);
            cmd_plan(
                &writer,
                &config,
                &portfolio,
                available,
                budget,
                fatigue_adjusted,
            )
        }
        Commands::Config { action } => cmd_config(&writer, config_path, &action),
    }
}

fn budget_from(config: &PilotConfig, total: Option<u32>, used: Option<u32>) -> DailyBudget {
    DailyBudget::new(
        total.unwrap_or(config.budget.daily_minutes),
        used.unwrap_or(config.budget.used_minutes),
    )
}

fn cmd_fatigue(
    writer: &OutputWriter,
    config: &PilotConfig,
    total: Option<u32>,
    used: Option<u32>,
) -> Result<()> {
    let score = fatigue::compute(&budget_from(config, total, used));
    writer.emit_fatigue(&score);
    Ok(())
}

fn cmd_plan(
    writer: &OutputWriter,
    config: &PilotConfig,
    portfolio: &Path,
    available: Option<i64>,
    budget: DailyBudget,
    fatigue_adjusted: bool,
) -> Result<()> {
    let score = fatigue::compute(&budget);
    let mut orch = PortfolioFile::load(portfolio)?.into_orchestrator(config.missions.clone())?;

    let (plan, refused) = if fatigue::can_accept_new_mission(&score) {
        let available = available.unwrap_or(i64::from(budget.remaining_minutes()));
        (Some(orch.prioritize_missions(available)?), None)
    } else {
        warn!(state = %score.state, ratio = score.usage_ratio, "Planning refused");
        (
            None,
            Some(format!("No new missions accepted. {}", score.recommendation)),
        )
    };

    let fatigue_adjusted_roi = fatigue_adjusted.then(|| {
        orch.missions()
            .iter()
            .map(|m| (m.id().to_string(), fatigue::adjust_roi(m.roi(), &score)))
            .collect()
    });
    let above_complexity_ceiling = match (&plan, fatigue_adjusted) {
        (Some(plan), true) => Some(
            plan.admitted_ids()
                .into_iter()
                .filter(|id| {
                    orch.get_mission(id)
                        .is_some_and(|m| !score.accepts(m.complexity()))
                })
                .map(str::to_string)
                .collect(),
        ),
        _ => None,
    };

    let report = PlanReport {
        fatigue: score,
        plan,
        refused,
        fatigue_adjusted_roi,
        above_complexity_ceiling,
        deferred_good_ideas: orch.get_deferred_good_ideas(),
        summary: orch.get_portfolio_state(),
        history: config
            .display
            .show_history
            .then(|| orch.history().to_vec()),
    };
    writer.emit_plan(&report, &config.display);
    Ok(())
}

fn cmd_config(
    writer: &OutputWriter,
    config_path: Option<&Path>,
    action: &ConfigAction,
) -> Result<()> {
    let path: PathBuf = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(PilotConfig::default_path);

    match action {
        ConfigAction::Show => {
            let config = PilotConfig::load_or_default(config_path)?;
            match writer.format() {
                OutputFormat::Text => print!("{}", config.to_toml()?),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
            }
        }
        ConfigAction::Path => writer.emit_message(&path.display().to_string()),
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                return Err(PilotError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            PilotConfig::default().save(&path)?;
            if writer.format() == OutputFormat::Text {
                Display::new().print_success(&format!("Wrote {}", path.display()));
            } else {
                writer.emit_message(&format!("Wrote {}", path.display()));
            }
        }
    }
    Ok(())
}
