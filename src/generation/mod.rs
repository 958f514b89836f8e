// ABOUTME: Plan generation pipeline from inputs to a validated, enriched plan document
// ABOUTME: Defines the async workout generator boundary and the synchronous assembly core
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Plan Generation
//!
//! [`PlanGenerator::generate`] asks a [`WorkoutGenerator`] for one week of
//! free text at a time, parses it, and hands the skeleton to
//! [`PlanGenerator::assemble`]. Assembly is synchronous and deterministic:
//! normalize distances, repair against the targets, enrich, then check the
//! storage constraints.
//!
//! Transport, retries and timeouts for the generator belong to the caller.
//!
//! ## Example
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use stride_core::errors::AppResult;
//! use stride_planner::generation::WorkoutGenerator;
//!
//! struct Canned(String);
//!
//! #[async_trait]
//! impl WorkoutGenerator for Canned {
//!     async fn generate_week(&self, _prompt: &str) -> AppResult<String> {
//!         Ok(self.0.clone())
//!     }
//! }
//! ```

/// Generator output parsing
pub mod parser;
/// Prompt construction
pub mod prompts;

pub use parser::SkeletonParser;

use async_trait::async_trait;
use serde::Serialize;
use stride_core::errors::{AppError, AppResult};
use stride_core::models::{
    EnrichedWeek, PhasePlan, PlanInputs, PlanWarning, SchedulePreferences, WeekSkeleton,
    WeekTarget,
};
use stride_intelligence::{AdjustedTargets, PlanTargets, ProgressivePacing};
use tracing::{debug, info};

use crate::config::PlannerConfig;
use crate::enrichment::WorkoutEnricher;
use crate::fixer::{PlanFixer, RepairAction};
use crate::logging::PlanLogger;
use crate::storage::validate_for_storage;
use crate::workouts::WorkoutCatalogue;

/// External text-generation collaborator
#[async_trait]
pub trait WorkoutGenerator: Send + Sync {
    /// Produce one week of workouts as free text for `prompt`
    ///
    /// # Errors
    ///
    /// Implementations return `GenerationFailed` when the service fails
    async fn generate_week(&self, prompt: &str) -> AppResult<String>;
}

/// The finished plan document handed to the persistence layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    /// Validated inputs the plan was built from
    pub inputs: PlanInputs,
    /// Phase layout
    pub phases: PhasePlan,
    /// Numeric target per week
    pub targets: Vec<WeekTarget>,
    /// Level-adjusted peak mileage and long-run max
    pub adjusted: AdjustedTargets,
    /// Repaired and enriched weeks
    pub weeks: Vec<EnrichedWeek>,
    /// Non-fatal advisories from target computation and repair
    pub warnings: Vec<PlanWarning>,
    /// Repairs applied to the generated skeleton
    pub repairs: Vec<RepairAction>,
}

/// Orchestrates targets, generation, repair and enrichment
#[derive(Debug, Clone)]
pub struct PlanGenerator {
    config: PlannerConfig,
    preferences: SchedulePreferences,
}

impl PlanGenerator {
    /// Create a pipeline for one runner's schedule
    #[must_use]
    pub const fn new(config: PlannerConfig, preferences: SchedulePreferences) -> Self {
        Self {
            config,
            preferences,
        }
    }

    /// Generate a complete plan, one generator call per week
    ///
    /// # Errors
    ///
    /// Propagates generator failures, `GenerationFailed` and
    /// `UnknownWorkoutToken` from parsing, and every assembly error
    pub async fn generate(
        &self,
        inputs: &PlanInputs,
        pacing: ProgressivePacing,
        generator: &dyn WorkoutGenerator,
    ) -> AppResult<GeneratedPlan> {
        let targets = PlanTargets::compute(inputs);
        let catalogue = WorkoutCatalogue::listing();

        let mut skeleton = Vec::with_capacity(targets.weeks.len());
        for target in &targets.weeks {
            let prompt = prompts::week_prompt(target, &self.preferences, &catalogue);
            let text = generator.generate_week(&prompt).await?;
            debug!(
                week = target.week_number,
                chars = text.len(),
                "received generator output"
            );
            skeleton.push(SkeletonParser::parse_week(target.week_number, &text)?);
        }

        self.assemble_with_targets(*inputs, targets, skeleton, pacing)
    }

    /// Turn a settled skeleton into a validated plan
    ///
    /// # Errors
    ///
    /// Returns `GenerationFailed` if a planned week is missing from the
    /// skeleton, `UnknownWorkoutToken` for invalid tokens, and
    /// `PersistenceConstraint` if the result cannot be stored
    pub fn assemble(
        &self,
        inputs: &PlanInputs,
        skeleton: Vec<WeekSkeleton>,
        pacing: ProgressivePacing,
    ) -> AppResult<GeneratedPlan> {
        self.assemble_with_targets(*inputs, PlanTargets::compute(inputs), skeleton, pacing)
    }

    fn assemble_with_targets(
        &self,
        inputs: PlanInputs,
        targets: PlanTargets,
        mut skeleton: Vec<WeekSkeleton>,
        pacing: ProgressivePacing,
    ) -> AppResult<GeneratedPlan> {
        skeleton.sort_by_key(|week| week.week_number);
        skeleton.dedup_by_key(|week| week.week_number);
        if let Some(missing) = targets
            .weeks
            .iter()
            .find(|t| skeleton.iter().all(|w| w.week_number != t.week_number))
        {
            return Err(AppError::generation(format!(
                "Skeleton is missing week {}",
                missing.week_number
            ))
            .with_details(serde_json::json!({ "week_number": missing.week_number })));
        }
        skeleton.retain(|week| week.week_number <= targets.phases.total_weeks);

        let enricher =
            WorkoutEnricher::new(self.config.distances, pacing, targets.phases.total_weeks);
        for week in &mut skeleton {
            enricher.normalize_week(week);
        }

        let fixer = PlanFixer::new(
            self.config.fixer,
            self.preferences.clone(),
            self.config.distances.quality_miles,
        );
        let report = fixer.repair(&mut skeleton, &targets.weeks);

        let weeks = skeleton
            .iter()
            .map(|week| enricher.enrich_week(week))
            .collect::<AppResult<Vec<_>>>()?;

        let mut warnings = targets.warnings;
        warnings.extend(report.warnings);

        let plan = GeneratedPlan {
            inputs,
            phases: targets.phases,
            targets: targets.weeks,
            adjusted: targets.adjusted,
            weeks,
            warnings,
            repairs: report.actions,
        };
        let size = validate_for_storage(&plan, self.config.max_document_bytes)?;
        PlanLogger::log_plan_assembled(plan.weeks.len(), plan.repairs.len(), plan.warnings.len());
        info!(size_bytes = size, "plan ready for storage");
        Ok(plan)
    }
}
