// ABOUTME: Adaptive weekly mileage growth rate derived from plan length
// ABOUTME: Short plans grow faster; the rate falls linearly from 10% at 12 weeks to 4% at 28 weeks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Plans this short or shorter use the maximum rate
const FAST_GROWTH_MAX_WEEKS: u32 = 12;

/// Plans this long or longer use the minimum rate
const SLOW_GROWTH_MIN_WEEKS: u32 = 28;

/// Weekly growth for short plans
const MAX_GROWTH_RATE: f64 = 0.10;

/// Weekly growth for long plans
const MIN_GROWTH_RATE: f64 = 0.04;

/// Weekly growth rate model
pub struct GrowthRateCalculator;

impl GrowthRateCalculator {
    /// Weekly growth rate for a plan of `total_weeks`
    ///
    /// Pure and monotonically non-increasing in `total_weeks`.
    #[must_use]
    pub fn rate(total_weeks: u32) -> f64 {
        if total_weeks <= FAST_GROWTH_MAX_WEEKS {
            return MAX_GROWTH_RATE;
        }
        if total_weeks >= SLOW_GROWTH_MIN_WEEKS {
            return MIN_GROWTH_RATE;
        }
        let span = f64::from(SLOW_GROWTH_MIN_WEEKS - FAST_GROWTH_MAX_WEEKS);
        let progress = f64::from(total_weeks - FAST_GROWTH_MAX_WEEKS) / span;
        (MIN_GROWTH_RATE - MAX_GROWTH_RATE).mul_add(progress, MAX_GROWTH_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert!((GrowthRateCalculator::rate(10) - 0.10).abs() < 1e-12);
        assert!((GrowthRateCalculator::rate(12) - 0.10).abs() < 1e-12);
        assert!((GrowthRateCalculator::rate(28) - 0.04).abs() < 1e-12);
        assert!((GrowthRateCalculator::rate(30) - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_midpoint_is_linear() {
        assert!((GrowthRateCalculator::rate(20) - 0.07).abs() < 1e-12);
    }

    #[test]
    fn test_monotonically_non_increasing() {
        for weeks in 1..40 {
            assert!(GrowthRateCalculator::rate(weeks + 1) <= GrowthRateCalculator::rate(weeks));
        }
    }
}
