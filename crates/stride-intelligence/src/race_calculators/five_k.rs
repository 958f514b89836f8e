// ABOUTME: 5K race calculator using the standard long-run progression
// ABOUTME: Lowest volume ceiling; long runs top out at 10 miles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use stride_core::models::RaceDistance;

use super::RaceCalculator;
use crate::race_params::RaceParams;

/// 5K calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct FiveKCalculator;

impl RaceCalculator for FiveKCalculator {
    fn params(&self) -> &'static RaceParams {
        RaceParams::for_race(RaceDistance::FiveK)
    }
}
