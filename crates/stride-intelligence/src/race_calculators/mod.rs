// ABOUTME: Race-specific peak weekly mileage and maximum long-run calculators
// ABOUTME: Shared growth and capping math lives on the trait; races override only what differs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Per-race calculators
//!
//! Peak mileage compounds the adaptive growth rate over two build weeks per
//! three-week cycle, then caps at the race's ceiling. Long-run max grows
//! linearly from the runner's current long run and caps at the smaller of the
//! race maximum and a share of peak mileage.

mod five_k;
mod half_marathon;
mod marathon;
mod ten_k;

pub use five_k::FiveKCalculator;
pub use half_marathon::HalfMarathonCalculator;
pub use marathon::MarathonCalculator;
pub use ten_k::TenKCalculator;

use serde::Serialize;
use stride_core::constants::plan_limits::{CYCLE_LENGTH_WEEKS, MAX_TOTAL_WEEKS};
use stride_core::models::{PlanWarning, RaceDistance};
use tracing::{debug, warn};

use crate::growth::GrowthRateCalculator;
use crate::phases::PhaseDistributor;
use crate::race_params::RaceParams;

/// Weekly long-run increase used by the standard progression (miles/week)
pub const STANDARD_LONG_RUN_PROGRESSION: f64 = 0.5;

/// Result of a long-run max calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongRunEstimate {
    /// Longest long run the plan should reach (miles, before level adjustment)
    pub long_run_max: f64,
    /// Present when the progression falls short of the race's preparation target
    pub warning: Option<PlanWarning>,
}

/// Race-specific target formulas
pub trait RaceCalculator: Send + Sync {
    /// Static parameter table for this race
    fn params(&self) -> &'static RaceParams;

    /// Weekly long-run increase for a runner starting at `current_long_run`
    fn long_run_progression_rate(&self, _current_long_run: f64, _training_weeks: u32) -> f64 {
        STANDARD_LONG_RUN_PROGRESSION
    }

    /// Peak weekly mileage reachable from `current` within `total_weeks`
    fn calculate_peak_mileage(&self, current: f64, total_weeks: u32) -> f64 {
        let params = self.params();
        let training = PhaseDistributor::training_weeks(total_weeks);
        let cycles = training / CYCLE_LENGTH_WEEKS;
        let rate = GrowthRateCalculator::rate(total_weeks);
        let exponent = i32::try_from(cycles * 2).unwrap_or(i32::MAX);
        let theoretical = (current * (1.0 + rate).powi(exponent)).round();

        if theoretical > params.peak_weekly_mileage_cap {
            debug!(
                race = %params.race,
                before = theoretical,
                after = params.peak_weekly_mileage_cap,
                "capping peak weekly mileage"
            );
            return params.peak_weekly_mileage_cap;
        }
        theoretical
    }

    /// Longest long run reachable from `current_long_run`, capped by race and peak volume
    fn calculate_long_run_max(
        &self,
        current_long_run: f64,
        total_weeks: u32,
        peak_mileage: f64,
    ) -> LongRunEstimate {
        let params = self.params();
        let training = PhaseDistributor::training_weeks(total_weeks);
        let rate = self.long_run_progression_rate(current_long_run, training);
        let theoretical = f64::from(training).mul_add(rate, current_long_run);
        let cap = params
            .long_run_max
            .min(peak_mileage * params.long_run_percentage);

        let long_run_max = if theoretical > cap {
            debug!(
                race = %params.race,
                before = theoretical,
                after = cap,
                "capping long-run max"
            );
            cap
        } else {
            theoretical
        };

        let warning = (long_run_max < params.minimum_preparation_target).then(|| {
            let suggested_weeks = suggested_plan_length(
                current_long_run,
                params.minimum_preparation_target,
                total_weeks,
            );
            warn!(
                race = %params.race,
                target = params.minimum_preparation_target,
                projected = long_run_max,
                suggested_weeks,
                "long-run progression falls short of the preparation target"
            );
            PlanWarning::UnreachableTarget {
                race: params.race,
                target_miles: params.minimum_preparation_target,
                projected_miles: long_run_max,
                suggested_weeks,
            }
        });

        LongRunEstimate {
            long_run_max,
            warning,
        }
    }
}

/// Plan length that reaches `target` at the standard progression, bounded to valid plan lengths
fn suggested_plan_length(current_long_run: f64, target: f64, total_weeks: u32) -> u32 {
    let gap = (target - current_long_run).max(0.0);
    let training_needed = (gap / STANDARD_LONG_RUN_PROGRESSION).ceil() as u32;
    let weeks = training_needed + PhaseDistributor::taper_weeks(training_needed + 2);
    let shortest = total_weeks.saturating_add(1);
    weeks.clamp(shortest, MAX_TOTAL_WEEKS.max(shortest))
}

static FIVE_K_CALCULATOR: FiveKCalculator = FiveKCalculator;
static TEN_K_CALCULATOR: TenKCalculator = TenKCalculator;
static HALF_MARATHON_CALCULATOR: HalfMarathonCalculator = HalfMarathonCalculator;
static MARATHON_CALCULATOR: MarathonCalculator = MarathonCalculator;

/// Calculator for `race`
#[must_use]
pub fn calculator_for(race: RaceDistance) -> &'static dyn RaceCalculator {
    match race {
        RaceDistance::FiveK => &FIVE_K_CALCULATOR,
        RaceDistance::TenK => &TEN_K_CALCULATOR,
        RaceDistance::HalfMarathon => &HALF_MARATHON_CALCULATOR,
        RaceDistance::Marathon => &MARATHON_CALCULATOR,
    }
}
