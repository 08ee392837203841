use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;

use crate::cli::{Display, OutputFormat};
use crate::config::DisplayConfig;
use crate::fatigue::{self, FatigueScore};
use crate::mission::MissionEntry;
use crate::orchestrator::{PortfolioSummary, PrioritizationResult, TransitionRecord};

/// Renders results either as styled text or as a single JSON object.
pub struct OutputWriter {
    format: OutputFormat,
    display: Display,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            display: Display::new(),
        }
    }

    /// Returns the configured output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn emit_fatigue(&self, score: &FatigueScore) {
        match self.format {
            OutputFormat::Text => {
                self.display.print_header("Fatigue");
                self.display.print_fatigue(score);
            }
            OutputFormat::Json => self.write_json(score),
        }
    }

    pub fn emit_plan(&self, report: &PlanReport, display: &DisplayConfig) {
        match self.format {
            OutputFormat::Text => self.print_plan_report(report, display),
            OutputFormat::Json => self.write_json(report),
        }
    }

    /// Emit a simple message.
    pub fn emit_message(&self, message: &str) {
        match self.format {
            OutputFormat::Text => {
                println!("{}", message);
            }
            OutputFormat::Json => {
                let msg = MessageOutput {
                    message: message.to_string(),
                };
                self.write_json(&msg);
            }
        }
    }

    fn print_plan_report(&self, report: &PlanReport, display: &DisplayConfig) {
        self.display.print_header("Mission plan");
        self.display.print_fatigue(&report.fatigue);

        match &report.plan {
            Some(plan) => {
                let score = &report.fatigue;
                let adjust = |roi: f64| fatigue::adjust_roi(roi, score);
                let adjust_ref = report
                    .fatigue_adjusted_roi
                    .as_ref()
                    .map(|_| &adjust as &dyn Fn(f64) -> f64);
                self.display.print_plan(plan, adjust_ref, display.show_rationale);
                let above = report.above_complexity_ceiling.as_deref().unwrap_or_default();
                if !above.is_empty() {
                    self.display.print_warning(&format!(
                        "Above {} complexity ceiling ({}): {}",
                        score.state,
                        score.max_complexity,
                        above.join(", ")
                    ));
                    println!();
                }
            }
            None => {
                if let Some(reason) = &report.refused {
                    self.display.print_warning(reason);
                    println!();
                }
            }
        }

        self.display.print_deferred(&report.deferred_good_ideas);
        self.display.print_summary(&report.summary);

        if let Some(history) = &report.history {
            println!();
            self.display.print_history(history);
        }
    }

    fn write_json<T: Serialize>(&self, value: &T) {
        let mut stdout = io::stdout().lock();
        match serde_json::to_string_pretty(value) {
            Ok(json) => {
                let _ = writeln!(stdout, "{}", json);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize output");
            }
        }
    }
}

/// Everything the `plan` command reports, in one serializable object.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub fatigue: FatigueScore,
    /// `None` when planning was refused.
    pub plan: Option<PrioritizationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refused: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fatigue_adjusted_roi: Option<BTreeMap<String, f64>>,
    /// Admitted missions heavier than the current fatigue state accepts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub above_complexity_ceiling: Option<Vec<String>>,
    pub deferred_good_ideas: Vec<MissionEntry>,
    pub summary: PortfolioSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<TransitionRecord>>,
}

#[derive(Debug, Serialize)]
struct MessageOutput {
    message: String,
}
