use tracing::{debug, info, warn};

use super::scoring::{
    BUDGET_PAUSE_REASON, MissionPriority, PrioritizationResult, ScoreBreakdown, rank_order,
};
use super::summary::{PortfolioSummary, TransitionRecord};
use crate::config::MissionConfig;
use crate::error::{PilotError, Result};
use crate::fatigue::{self, FatigueScore};
use crate::mission::{MissionEntry, MissionStatus};

/// Portfolio manager holding every mission ever registered.
///
/// Enforces the single-active-mission invariant and produces budget-constrained
/// plans. Entries are never removed; status changes replace them in place.
#[derive(Debug, Default)]
pub struct MissionOrchestrator {
    config: MissionConfig,
    missions: Vec<MissionEntry>,
    history: Vec<TransitionRecord>,
    next_seq: u32,
}

impl MissionOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MissionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    // ========== Lifecycle ==========

    pub fn add_mission(
        &mut self,
        description: impl Into<String>,
        effort_minutes: i64,
        payoff_minutes: i64,
        id: Option<&str>,
    ) -> Result<MissionEntry> {
        let (id, seq) = match id {
            Some(id) => (id.to_string(), None),
            None => {
                let (generated, seq) = self.next_generated_id();
                (generated, Some(seq))
            }
        };

        let entry = MissionEntry::new(id, description, effort_minutes, payoff_minutes)?;
        if self.index_of(entry.id()).is_some() {
            return Err(PilotError::DuplicateMission(entry.id().to_string()));
        }
        if let Some(seq) = seq {
            self.next_seq = seq;
        }

        debug!(
            mission_id = %entry.id(),
            effort = entry.effort_minutes(),
            payoff = entry.payoff_minutes(),
            roi = entry.roi(),
            "Mission added"
        );
        self.history.push(TransitionRecord::new(
            entry.id(),
            None,
            entry.status(),
            "created",
        ));
        self.missions.push(entry.clone());
        Ok(entry)
    }

    /// Makes `id` the active mission, demoting any other active mission to
    /// queued first.
    pub fn set_active_mission(&mut self, id: &str) -> Result<()> {
        let idx = self.require(id)?;
        if self.missions[idx].status().is_active() {
            debug!(mission_id = %id, "Mission already active");
            return Ok(());
        }

        if let Some(prev) = self.active_index() {
            let demoted = self.missions[prev].queued();
            let reason = format!("demoted: {} activated", id);
            self.replace(prev, demoted, reason);
        }

        let activated = self.missions[idx].activated();
        self.replace(idx, activated, "activated");
        info!(mission_id = %id, "Active mission set");
        Ok(())
    }

    pub fn pause_mission(&mut self, id: &str, reason: impl Into<String>) -> Result<()> {
        let idx = self.require(id)?;
        let reason = reason.into();
        let paused = self.missions[idx].paused(reason.clone());
        self.replace(idx, paused, reason);
        Ok(())
    }

    pub fn resume_mission(&mut self, id: &str) -> Result<()> {
        let idx = self.require(id)?;
        let current = self.missions[idx].status();
        if !current.can_resume() {
            return Err(PilotError::InvalidTransition {
                id: id.to_string(),
                from: current,
                to: MissionStatus::Queued,
            });
        }

        let resumed = self.missions[idx].queued();
        self.replace(idx, resumed, "resumed");
        Ok(())
    }

    // ========== Queries ==========

    pub fn get_mission(&self, id: &str) -> Option<&MissionEntry> {
        self.missions.iter().find(|m| m.id() == id)
    }

    /// All missions in registration order.
    pub fn missions(&self) -> &[MissionEntry] {
        &self.missions
    }

    pub fn active_mission(&self) -> Option<&MissionEntry> {
        self.missions.iter().find(|m| m.status().is_active())
    }

    pub fn history(&self) -> &[TransitionRecord] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.missions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    /// Paused missions that are still worth doing, best ROI first.
    pub fn get_deferred_good_ideas(&self) -> Vec<MissionEntry> {
        let mut deferred: Vec<MissionEntry> = self
            .missions
            .iter()
            .filter(|m| m.is_deferred_good_idea())
            .cloned()
            .collect();
        deferred.sort_by(|a, b| b.roi().total_cmp(&a.roi()).then_with(|| a.id().cmp(b.id())));
        deferred
    }

    pub fn get_portfolio_state(&self) -> PortfolioSummary {
        PortfolioSummary::from_missions(&self.missions, &self.get_deferred_good_ideas())
    }

    /// ROI of `id` discounted by the caller's fatigue score.
    pub fn fatigue_adjusted_roi(&self, id: &str, score: &FatigueScore) -> Result<f64> {
        let entry = self
            .get_mission(id)
            .ok_or_else(|| PilotError::NotFound(id.to_string()))?;
        Ok(fatigue::adjust_roi(entry.roi(), score))
    }

    // ========== Prioritization ==========

    /// Computes the plan without changing any mission.
    pub fn plan_missions(&self, available_budget_minutes: i64) -> Result<PrioritizationResult> {
        if available_budget_minutes < 0 {
            return Err(PilotError::InvalidArgument(format!(
                "available_budget_minutes must not be negative, got {}",
                available_budget_minutes
            )));
        }
        let budget = available_budget_minutes;

        let mut candidates: Vec<(&MissionEntry, ScoreBreakdown)> = self
            .missions
            .iter()
            .filter(|m| m.status().is_schedulable())
            .map(|m| (m, ScoreBreakdown::for_mission(m, budget)))
            .collect();
        candidates.sort_by(rank_order);

        let mut rationale = Vec::new();
        if let Some(active) = self.active_mission() {
            rationale.push(format!(
                "Active mission {} kept as-is (not re-ranked)",
                active.id()
            ));
        }
        if candidates.is_empty() {
            rationale.push("No queued missions to prioritize".to_string());
            return Ok(PrioritizationResult {
                available_budget_minutes: budget,
                ranked: Vec::new(),
                budget_paused: Vec::new(),
                cumulative_effort_minutes: 0,
                rationale,
            });
        }

        rationale.push(format!(
            "Prioritizing {} queued mission(s) against {} min available",
            candidates.len(),
            budget
        ));

        let mut ranked = Vec::new();
        let mut budget_paused = Vec::new();
        let mut cumulative = 0i64;

        for (entry, factors) in &candidates {
            let effort = entry.effort_minutes();
            let next = cumulative.checked_add(effort).filter(|total| *total <= budget);
            if let Some(total) = next {
                cumulative = total;
                let rank = ranked.len() + 1;
                let line = format!(
                    "#{} {}: score {:.3} = {}; cumulative {}/{} min",
                    rank,
                    entry.id(),
                    factors.total,
                    factors.describe(entry.roi()),
                    cumulative,
                    budget
                );
                rationale.push(line.clone());
                ranked.push(MissionPriority {
                    rank,
                    mission_id: entry.id().to_string(),
                    description: entry.description().to_string(),
                    effort_minutes: effort,
                    roi: entry.roi(),
                    score: factors.total,
                    factors: *factors,
                    cumulative_effort_minutes: cumulative,
                    rationale: line,
                });
            } else {
                rationale.push(format!(
                    "{} paused: {} (score {:.3}, needs {} min, cumulative would be {} > {} min)",
                    entry.id(),
                    BUDGET_PAUSE_REASON,
                    factors.total,
                    effort,
                    i128::from(cumulative) + i128::from(effort),
                    budget
                ));
                budget_paused.push(entry.id().to_string());
            }
        }

        rationale.push(format!(
            "Admitted {} of {} mission(s) using {}/{} min; {} deferred",
            ranked.len(),
            candidates.len(),
            cumulative,
            budget,
            budget_paused.len()
        ));

        Ok(PrioritizationResult {
            available_budget_minutes: budget,
            ranked,
            budget_paused,
            cumulative_effort_minutes: cumulative,
            rationale,
        })
    }

    /// Ranks queued missions and pauses the ones that do not fit the budget.
    pub fn prioritize_missions(
        &mut self,
        available_budget_minutes: i64,
    ) -> Result<PrioritizationResult> {
        let plan = self.plan_missions(available_budget_minutes)?;

        for id in &plan.budget_paused {
            if let Some(idx) = self.index_of(id) {
                let paused = self.missions[idx].paused(BUDGET_PAUSE_REASON);
                self.replace(idx, paused, BUDGET_PAUSE_REASON);
            }
        }

        if !plan.budget_paused.is_empty() {
            warn!(
                paused = ?plan.budget_paused,
                budget = plan.available_budget_minutes,
                "Missions deferred for budget"
            );
        }
        info!(
            admitted = plan.ranked.len(),
            deferred = plan.budget_paused.len(),
            cumulative = plan.cumulative_effort_minutes,
            budget = plan.available_budget_minutes,
            "Prioritization complete"
        );
        Ok(plan)
    }

    // ========== Internals ==========

    fn index_of(&self, id: &str) -> Option<usize> {
        self.missions.iter().position(|m| m.id() == id)
    }

    fn require(&self, id: &str) -> Result<usize> {
        self.index_of(id)
            .ok_or_else(|| PilotError::NotFound(id.to_string()))
    }

    fn active_index(&self) -> Option<usize> {
        self.missions.iter().position(|m| m.status().is_active())
    }

    fn next_generated_id(&self) -> (String, u32) {
        let mut seq = self.next_seq;
        loop {
            seq += 1;
            let candidate = format!("{}-{:03}", self.config.id_prefix, seq);
            if self.index_of(&candidate).is_none() {
                return (candidate, seq);
            }
        }
    }

    fn replace(&mut self, idx: usize, next: MissionEntry, reason: impl Into<String>) {
        let from = self.missions[idx].status();
        let to = next.status();
        debug_assert!(
            from.can_transition_to(to),
            "illegal transition {} → {}",
            from,
            to
        );

        let reason = reason.into();
        debug!(mission_id = %next.id(), %from, %to, reason = %reason, "Mission transition");
        self.history
            .push(TransitionRecord::new(next.id(), Some(from), to, reason));
        self.missions[idx] = next;
    }
}
