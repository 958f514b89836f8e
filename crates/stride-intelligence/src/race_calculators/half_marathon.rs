// ABOUTME: Half-marathon race calculator using the standard long-run progression
// ABOUTME: Long runs top out at 14 miles or 35% of peak volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use stride_core::models::RaceDistance;

use super::RaceCalculator;
use crate::race_params::RaceParams;

/// Half-marathon calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct HalfMarathonCalculator;

impl RaceCalculator for HalfMarathonCalculator {
    fn params(&self) -> &'static RaceParams {
        RaceParams::for_race(RaceDistance::HalfMarathon)
    }
}
