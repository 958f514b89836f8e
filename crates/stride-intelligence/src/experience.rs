// ABOUTME: Experience-level multipliers for peak mileage and long-run max
// ABOUTME: Race long-run floors apply after the multiplier and are never reduced by level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use stride_core::models::{ExperienceLevel, RaceDistance};
use tracing::debug;

use crate::race_params::RaceParams;

/// Peak and long-run targets after level adjustment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdjustedTargets {
    /// Peak weekly mileage (miles)
    pub peak_mileage: f64,
    /// Longest long run in the plan (miles)
    pub long_run_max: f64,
}

/// Applies experience multipliers and race floors
pub struct ExperienceAdjuster;

impl ExperienceAdjuster {
    /// Multiplier applied to peak weekly mileage
    #[must_use]
    pub const fn peak_multiplier(level: ExperienceLevel) -> f64 {
        match level {
            ExperienceLevel::Beginner => 0.80,
            ExperienceLevel::Intermediate => 1.00,
            ExperienceLevel::Advanced => 1.15,
        }
    }

    /// Multiplier applied to long-run max
    #[must_use]
    pub const fn long_run_multiplier(level: ExperienceLevel) -> f64 {
        match level {
            ExperienceLevel::Beginner => 0.95,
            ExperienceLevel::Intermediate => 1.00,
            ExperienceLevel::Advanced => 1.10,
        }
    }

    /// Adjust calculator output for `level`, enforcing the race's long-run floor
    #[must_use]
    pub fn apply(
        race: RaceDistance,
        level: ExperienceLevel,
        base_peak: f64,
        base_long_run: f64,
    ) -> AdjustedTargets {
        let floor = RaceParams::for_race(race).long_run_floor;
        let peak_mileage = (base_peak * Self::peak_multiplier(level)).round();
        let scaled_long_run = (base_long_run * Self::long_run_multiplier(level)).round();

        let long_run_max = if scaled_long_run < floor {
            debug!(
                %race,
                %level,
                before = scaled_long_run,
                after = floor,
                "raising long-run max to race floor"
            );
            floor
        } else {
            scaled_long_run
        };

        AdjustedTargets {
            peak_mileage,
            long_run_max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beginner_marathon_floor_overrides_multiplier() {
        let adjusted = ExperienceAdjuster::apply(
            RaceDistance::Marathon,
            ExperienceLevel::Beginner,
            51.0,
            18.75,
        );
        assert!((adjusted.peak_mileage - 41.0).abs() < f64::EPSILON);
        assert!((adjusted.long_run_max - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_advanced_multiplier_can_exceed_floor() {
        let adjusted = ExperienceAdjuster::apply(
            RaceDistance::HalfMarathon,
            ExperienceLevel::Advanced,
            40.0,
            14.0,
        );
        assert!((adjusted.peak_mileage - 46.0).abs() < f64::EPSILON);
        assert!((adjusted.long_run_max - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_floor_holds_for_every_level() {
        for race in RaceDistance::ALL {
            let floor = RaceParams::for_race(race).long_run_floor;
            for level in ExperienceLevel::ALL {
                let adjusted = ExperienceAdjuster::apply(race, level, 30.0, 1.0);
                assert!(adjusted.long_run_max >= floor);
            }
        }
    }
}
