// ABOUTME: 10K race calculator using the standard long-run progression
// ABOUTME: Long runs top out at 12 miles or 30% of peak volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use stride_core::models::RaceDistance;

use super::RaceCalculator;
use crate::race_params::RaceParams;

/// 10K calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct TenKCalculator;

impl RaceCalculator for TenKCalculator {
    fn params(&self) -> &'static RaceParams {
        RaceParams::for_race(RaceDistance::TenK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_volume_runner_gets_preparation_warning() {
        // cap = min(12, 20 * 0.30) = 6, below the 8 mile target
        let estimate = TenKCalculator.calculate_long_run_max(4.0, 12, 20.0);
        assert!((estimate.long_run_max - 6.0).abs() < f64::EPSILON);
        assert!(estimate.warning.is_some());
    }
}
