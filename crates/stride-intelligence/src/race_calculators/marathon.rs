// ABOUTME: Marathon race calculator with an accelerated long-run progression
// ABOUTME: Low-mileage starters progress up to 0.75 mi/week so the 20 mile long run stays reachable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use stride_core::models::RaceDistance;

use super::{RaceCalculator, STANDARD_LONG_RUN_PROGRESSION};
use crate::race_params::RaceParams;

/// Fastest weekly long-run increase the marathon progression allows
const MAX_LONG_RUN_PROGRESSION: f64 = 0.75;

/// Marathon calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct MarathonCalculator;

impl RaceCalculator for MarathonCalculator {
    fn params(&self) -> &'static RaceParams {
        RaceParams::for_race(RaceDistance::Marathon)
    }

    fn long_run_progression_rate(&self, current_long_run: f64, training_weeks: u32) -> f64 {
        let floor = self.params().long_run_floor;
        let required = (floor - current_long_run).max(0.0) / f64::from(training_weeks.max(1));
        required
            .max(STANDARD_LONG_RUN_PROGRESSION)
            .clamp(STANDARD_LONG_RUN_PROGRESSION, MAX_LONG_RUN_PROGRESSION)
    }
}
