// ABOUTME: End-to-end numeric target computation for one set of plan inputs
// ABOUTME: Runs phases, race calculator, experience adjustment, and projection in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use stride_core::models::{PhasePlan, PlanInputs, PlanWarning, WeekTarget};
use tracing::{info, warn};

use crate::experience::{AdjustedTargets, ExperienceAdjuster};
use crate::phases::PhaseDistributor;
use crate::projector::WeeklyProjector;
use crate::race_calculators::calculator_for;
use crate::race_params::RaceParams;

/// A long run above this share of weekly volume is flagged
const LONG_RUN_VOLUME_SHARE_LIMIT: f64 = 0.5;

/// Every numeric target for a plan, plus advisories
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanTargets {
    /// Phase layout
    pub phases: PhasePlan,
    /// Calculator peak before level adjustment
    pub base_peak_mileage: f64,
    /// Calculator long-run max before level adjustment
    pub base_long_run_max: f64,
    /// Level-adjusted peak and long-run max
    pub adjusted: AdjustedTargets,
    /// One target per week, in order
    pub weeks: Vec<WeekTarget>,
    /// Non-fatal advisories
    pub warnings: Vec<PlanWarning>,
}

impl PlanTargets {
    /// Compute all targets for `inputs`
    ///
    /// Deterministic: identical inputs always produce identical targets.
    #[must_use]
    pub fn compute(inputs: &PlanInputs) -> Self {
        let race = inputs.race_distance();
        let level = inputs.experience_level();
        let total_weeks = inputs.total_weeks();

        let phases = PhaseDistributor::distribute(total_weeks);
        let calculator = calculator_for(race);
        let base_peak_mileage =
            calculator.calculate_peak_mileage(inputs.current_weekly_mileage(), total_weeks);
        let estimate = calculator.calculate_long_run_max(
            inputs.current_long_run(),
            total_weeks,
            base_peak_mileage,
        );
        let adjusted =
            ExperienceAdjuster::apply(race, level, base_peak_mileage, estimate.long_run_max);

        let weeks = WeeklyProjector::new(
            RaceParams::for_race(race),
            &phases,
            inputs.current_weekly_mileage(),
            inputs.current_long_run(),
            adjusted,
        )
        .project();

        let mut warnings: Vec<PlanWarning> = estimate.warning.into_iter().collect();
        for week in &weeks {
            if week.long_run > week.weekly_mileage * LONG_RUN_VOLUME_SHARE_LIMIT {
                warn!(
                    week = week.week_number,
                    long_run = week.long_run,
                    weekly_mileage = week.weekly_mileage,
                    "long run exceeds half of weekly volume"
                );
                warnings.push(PlanWarning::LongRunDominatesVolume {
                    week_number: week.week_number,
                    long_run: week.long_run,
                    weekly_mileage: week.weekly_mileage,
                });
            }
        }

        info!(
            %race,
            %level,
            total_weeks,
            peak = adjusted.peak_mileage,
            long_run_max = adjusted.long_run_max,
            warnings = warnings.len(),
            "computed plan targets"
        );

        Self {
            phases,
            base_peak_mileage,
            base_long_run_max: estimate.long_run_max,
            adjusted,
            weeks,
            warnings,
        }
    }

    /// Target for `week_number`, if it is part of the plan
    #[must_use]
    pub fn week(&self, week_number: u32) -> Option<&WeekTarget> {
        self.weeks.iter().find(|w| w.week_number == week_number)
    }

    /// Largest long run in the plan
    #[must_use]
    pub fn longest_long_run(&self) -> f64 {
        self.weeks.iter().map(|w| w.long_run).fold(0.0, f64::max)
    }
}
