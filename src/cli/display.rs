use console::{Style, style};

use crate::fatigue::{FatigueScore, FatigueState};
use crate::mission::MissionEntry;
use crate::orchestrator::{PortfolioSummary, PrioritizationResult, TransitionRecord};

pub struct Display;

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

impl Display {
    pub fn new() -> Self {
        Self
    }

    pub fn print_header(&self, text: &str) {
        println!();
        println!("{}", style(text).bold().cyan());
        println!("{}", style("═".repeat(60)).dim());
        println!();
    }

    pub fn print_fatigue(&self, score: &FatigueScore) {
        let state_style = self.fatigue_style(score.state);

        println!(
            "Fatigue:     {}  ({:.1}% used, {} min left)",
            state_style.apply_to(score.state.to_string()),
            score.usage_ratio * 100.0,
            score.remaining_minutes
        );
        println!("Capacity:    {:.2}x", score.capacity_multiplier);
        println!("Max work:    {}", score.max_complexity);
        println!(
            "Quality:     error rate {:.2}x, decisions {:.2}x, focus {:.2}x",
            score.quality_impact.error_rate,
            score.quality_impact.decision_quality,
            score.quality_impact.focus
        );
        println!("Advice:      {}", style(&score.recommendation).italic());
        println!();
    }

    /// `adjust` maps a raw ROI to the fatigue-discounted one when requested.
    pub fn print_plan(
        &self,
        plan: &PrioritizationResult,
        adjust: Option<&dyn Fn(f64) -> f64>,
        show_rationale: bool,
    ) {
        println!(
            "{} ({} min available)",
            style("Plan").bold(),
            plan.available_budget_minutes
        );

        if plan.ranked.is_empty() {
            println!("  {}", style("Nothing admitted").dim());
        }
        for p in &plan.ranked {
            let roi = match adjust {
                Some(f) => format!("roi {:.2} → {:.2}", p.roi, f(p.roi)),
                None => format!("roi {:.2}", p.roi),
            };
            println!(
                "  {:>2}. {}  {}",
                p.rank,
                style(&p.mission_id).bold(),
                style(&p.description).white()
            );
            println!(
                "      score {:.3}  {}  {} min  (cumulative {} min)",
                p.score, roi, p.effort_minutes, p.cumulative_effort_minutes
            );
        }

        if !plan.budget_paused.is_empty() {
            println!();
            println!(
                "{} {}",
                style("Deferred for budget:").yellow(),
                plan.budget_paused.join(", ")
            );
        }

        if show_rationale {
            println!();
            println!("{}", style("Rationale:").bold());
            for line in &plan.rationale {
                println!("  {} {}", style("•").dim(), line);
            }
        }
        println!();
    }

    pub fn print_deferred(&self, deferred: &[MissionEntry]) {
        if deferred.is_empty() {
            return;
        }
        println!("{}", style("Deferred good ideas:").bold());
        for m in deferred {
            println!(
                "  {}  roi {:.2}  {}",
                style(m.id()).bold(),
                m.roi(),
                style(m.pause_reason().unwrap_or("")).dim()
            );
        }
        println!();
    }

    pub fn print_summary(&self, summary: &PortfolioSummary) {
        println!(
            "Portfolio:   {} total  {} active  {} queued  {} paused  aggregate roi {:.2}",
            summary.total, summary.active, summary.queued, summary.paused, summary.aggregate_roi
        );
        if let Some(active) = &summary.active_mission {
            println!("Active:      {}", style(active).green().bold());
        }
    }

    pub fn print_history(&self, history: &[TransitionRecord]) {
        println!("{}", style("History:").bold());
        for record in history {
            let from = record
                .from
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  {}  {:<10} {} → {}  {}",
                style(record.at.format("%H:%M:%S")).dim(),
                record.mission_id,
                from,
                record.to,
                style(&record.reason).dim()
            );
        }
        println!();
    }

    pub fn print_success(&self, message: &str) {
        println!("{} {}", style("✓").green().bold(), message);
    }

    pub fn print_warning(&self, message: &str) {
        println!("{} {}", style("⚠").yellow().bold(), message);
    }

    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red().bold(), message);
    }

    fn fatigue_style(&self, state: FatigueState) -> Style {
        match state {
            FatigueState::Fresh => Style::new().green().bold(),
            FatigueState::Normal => Style::new().cyan(),
            FatigueState::Tired => Style::new().yellow(),
            FatigueState::Exhausted => Style::new().red().bold(),
        }
    }
}
