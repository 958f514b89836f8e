// ABOUTME: Week-by-week projection of weekly mileage, long run, and quality workout sizing
// ABOUTME: Build weeks follow a 3-week load/recovery cycle; the last pre-taper week is the peak week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weekly projection
//!
//! Mileage rises linearly from the starting volume to the adjusted peak with a
//! 10% cutback every third week. Long runs follow the same linear ramp shaped
//! by a build/bump/recover pattern. The final pre-taper week always lands on
//! the adjusted peak and long-run max so the race floor is reached.

use stride_core::constants::plan_limits::CYCLE_LENGTH_WEEKS;
use stride_core::models::{PhasePlan, QualityType, WeekTarget};
use tracing::debug;

use crate::experience::AdjustedTargets;
use crate::race_params::RaceParams;

/// Mileage multiplier applied on every third build week
const CUTBACK_FACTOR: f64 = 0.90;

/// Taper volume drop per taper week
const TAPER_STEP: f64 = 0.20;

/// Taper volume never drops below this share of peak
const TAPER_FLOOR: f64 = 0.40;

/// Long-run shares of long-run max for the final taper weeks, race week last
const TAPER_LONG_RUN_FRACTIONS: [f64; 3] = [0.65, 0.50, 0.35];

/// Bump applied to the second week of each long-run cycle
const LONG_RUN_BUMP: f64 = 1.08;

/// Miles removed from the linear value on recovery long runs
const LONG_RUN_RECOVERY_MILES: f64 = 2.0;

/// Recovery long runs keep at least this share of the linear value
const LONG_RUN_RECOVERY_SHARE: f64 = 0.85;

/// Expands plan-level targets into per-week targets
#[derive(Debug, Clone)]
pub struct WeeklyProjector<'a> {
    params: &'static RaceParams,
    phases: &'a PhasePlan,
    start_mileage: f64,
    start_long_run: f64,
    targets: AdjustedTargets,
}

impl<'a> WeeklyProjector<'a> {
    /// Create a projector; starting values above the adjusted targets are clamped
    #[must_use]
    pub fn new(
        params: &'static RaceParams,
        phases: &'a PhasePlan,
        current_weekly_mileage: f64,
        current_long_run: f64,
        targets: AdjustedTargets,
    ) -> Self {
        let start_mileage = if current_weekly_mileage > targets.peak_mileage {
            debug!(
                before = current_weekly_mileage,
                after = targets.peak_mileage,
                "clamping starting mileage to adjusted peak"
            );
            targets.peak_mileage
        } else {
            current_weekly_mileage
        };
        let start_long_run = if current_long_run > targets.long_run_max {
            debug!(
                before = current_long_run,
                after = targets.long_run_max,
                "clamping starting long run to adjusted max"
            );
            targets.long_run_max
        } else {
            current_long_run
        };

        Self {
            params,
            phases,
            start_mileage,
            start_long_run,
            targets,
        }
    }

    fn training_weeks(&self) -> u32 {
        self.phases.training_weeks()
    }

    /// Planned volume for `week` (whole miles)
    #[must_use]
    pub fn weekly_mileage(&self, week: u32) -> f64 {
        let peak = self.targets.peak_mileage;
        if let Some(k) = self.phases.taper_index(week) {
            let share = TAPER_STEP.mul_add(-f64::from(k), 1.0).max(TAPER_FLOOR);
            let rounded = (peak * share).round();
            // Rounding must not dip below the taper floor
            let floor = (peak * TAPER_FLOOR).ceil();
            if rounded < floor {
                debug!(week, before = rounded, after = floor, "raising taper week to taper floor");
                return floor;
            }
            return rounded;
        }

        let training = self.training_weeks();
        if week >= training {
            return peak;
        }
        let progress = f64::from(week) / f64::from(training.max(1));
        let linear = (peak - self.start_mileage).mul_add(progress, self.start_mileage);
        let mileage = if week % CYCLE_LENGTH_WEEKS == 0 {
            linear * CUTBACK_FACTOR
        } else {
            linear
        };
        let rounded = mileage.round();
        if rounded > peak {
            debug!(week, before = rounded, after = peak, "capping build mileage at peak");
            return peak;
        }
        rounded
    }

    /// Planned long run for `week` (whole miles)
    #[must_use]
    pub fn weekly_long_run(&self, week: u32) -> f64 {
        let max = self.targets.long_run_max;
        if let Some(k) = self.phases.taper_index(week) {
            let taper = self.phases.taper_weeks();
            let offset = TAPER_LONG_RUN_FRACTIONS.len().saturating_sub(taper as usize);
            let slot = (offset + k as usize - 1).min(TAPER_LONG_RUN_FRACTIONS.len() - 1);
            return (max * TAPER_LONG_RUN_FRACTIONS[slot]).round();
        }

        let training = self.training_weeks();
        if week >= training {
            return max;
        }
        let progress = f64::from(week) / f64::from(training.max(1));
        let linear = (max - self.start_long_run).mul_add(progress, self.start_long_run);
        let shaped = match week.saturating_sub(1) % CYCLE_LENGTH_WEEKS {
            0 => linear,
            1 => (linear * LONG_RUN_BUMP).min(max),
            _ => (linear - LONG_RUN_RECOVERY_MILES).max(linear * LONG_RUN_RECOVERY_SHARE),
        };
        let rounded = shaped.round();
        if rounded > max {
            debug!(week, before = rounded, after = max, "capping build long run at max");
            return max;
        }
        rounded
    }

    /// Size of one `quality` workout in a week of `weekly_mileage` (whole miles)
    #[must_use]
    pub fn quality_workout_distance(&self, weekly_mileage: f64, quality: QualityType) -> f64 {
        let bounds = self.params.quality(quality);
        let raw = weekly_mileage * bounds.percentage;
        let clamped = raw.clamp(bounds.min, bounds.max);
        if (clamped - raw).abs() > f64::EPSILON {
            debug!(
                quality = ?quality,
                before = raw,
                after = clamped,
                "clamping quality workout distance to bounds"
            );
        }
        clamped.round()
    }

    /// Targets for every week of the plan in order
    #[must_use]
    pub fn project(&self) -> Vec<WeekTarget> {
        self.phases
            .blocks
            .iter()
            .flat_map(|block| (block.start_week..=block.end_week).map(move |w| (w, block.phase)))
            .map(|(week_number, phase)| {
                let weekly_mileage = self.weekly_mileage(week_number);
                WeekTarget {
                    week_number,
                    phase,
                    weekly_mileage,
                    long_run: self.weekly_long_run(week_number),
                    tempo_distance: self
                        .quality_workout_distance(weekly_mileage, QualityType::Tempo),
                    interval_distance: self
                        .quality_workout_distance(weekly_mileage, QualityType::Interval),
                    hill_distance: self.quality_workout_distance(weekly_mileage, QualityType::Hill),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phases::PhaseDistributor;
    use stride_core::models::{Phase, RaceDistance};

    fn marathon_projection(phases: &PhasePlan) -> WeeklyProjector<'_> {
        WeeklyProjector::new(
            RaceParams::for_race(RaceDistance::Marathon),
            phases,
            25.0,
            6.0,
            AdjustedTargets {
                peak_mileage: 41.0,
                long_run_max: 20.0,
            },
        )
    }

    #[test]
    fn test_peak_week_hits_adjusted_targets() {
        let phases = PhaseDistributor::distribute(19);
        let projector = marathon_projection(&phases);
        assert!((projector.weekly_mileage(17) - 41.0).abs() < f64::EPSILON);
        assert!((projector.weekly_long_run(17) - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_taper_volume_and_long_runs() {
        let phases = PhaseDistributor::distribute(19);
        let projector = marathon_projection(&phases);
        // 41 * 0.8 and 41 * 0.6
        assert!((projector.weekly_mileage(18) - 33.0).abs() < f64::EPSILON);
        assert!((projector.weekly_mileage(19) - 25.0).abs() < f64::EPSILON);
        assert!((projector.weekly_long_run(18) - 10.0).abs() < f64::EPSILON);
        assert!((projector.weekly_long_run(19) - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_race_week_is_raised_to_taper_floor() {
        let phases = PhaseDistributor::distribute(30);
        let projector = marathon_projection(&phases);
        // 41 * 0.4 = 16.4 rounds to 16, below the 17-mile floor
        assert!((projector.weekly_mileage(30) - 17.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_third_week_is_a_cutback() {
        let phases = PhaseDistributor::distribute(19);
        let projector = marathon_projection(&phases);
        assert!(projector.weekly_mileage(3) < projector.weekly_mileage(2));
    }

    #[test]
    fn test_starting_values_above_targets_are_clamped() {
        let phases = PhaseDistributor::distribute(12);
        let projector = WeeklyProjector::new(
            RaceParams::for_race(RaceDistance::FiveK),
            &phases,
            60.0,
            15.0,
            AdjustedTargets {
                peak_mileage: 40.0,
                long_run_max: 10.0,
            },
        );
        for target in projector.project() {
            assert!(target.weekly_mileage <= 40.0);
            assert!(target.long_run <= 10.0);
        }
    }

    #[test]
    fn test_quality_distance_respects_bounds() {
        let phases = PhaseDistributor::distribute(19);
        let projector = marathon_projection(&phases);
        let tempo = |weekly| projector.quality_workout_distance(weekly, QualityType::Tempo);
        assert!((tempo(10.0) - 4.0).abs() < f64::EPSILON);
        assert!((tempo(100.0) - 10.0).abs() < f64::EPSILON);
        assert!((tempo(40.0) - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_project_covers_every_week_in_order() {
        let phases = PhaseDistributor::distribute(19);
        let targets = marathon_projection(&phases).project();
        assert_eq!(targets.len(), 19);
        assert_eq!(targets[0].phase, Phase::Base);
        assert_eq!(targets[18].phase, Phase::Taper);
        assert!(targets.iter().enumerate().all(|(i, t)| t.week_number as usize == i + 1));
    }
}
