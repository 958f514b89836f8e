// ABOUTME: Static per-race configuration for mileage caps, long-run limits, and quality sizing
// ABOUTME: Immutable enum-keyed tables; the long-run floor is non-negotiable for every level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Race parameter tables
//!
//! References:
//! - Daniels, J. (2013). "Daniels' Running Formula" (3rd ed.). Human Kinetics.
//! - Pfitzinger, P. & Douglas, S. (2009). "Advanced Marathoning" (2nd ed.).

use serde::Serialize;
use stride_core::models::{QualityType, RaceDistance};

/// Share of weekly volume for one quality workout, with hard bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityBounds {
    /// Fraction of weekly mileage
    pub percentage: f64,
    /// Smallest prescription (miles)
    pub min: f64,
    /// Largest prescription (miles)
    pub max: f64,
}

/// Static configuration for one race distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RaceParams {
    /// Race this table belongs to
    pub race: RaceDistance,
    /// Absolute ceiling on peak weekly mileage before level adjustment
    pub peak_weekly_mileage_cap: f64,
    /// Longest long run the calculator will prescribe before level adjustment
    pub long_run_max: f64,
    /// Long run every plan must reach, regardless of experience level
    pub long_run_floor: f64,
    /// Maximum long run as a fraction of peak weekly mileage
    pub long_run_percentage: f64,
    /// Long run below which the plan is flagged as under-prepared
    pub minimum_preparation_target: f64,
    /// Tempo sizing
    pub tempo: QualityBounds,
    /// Interval sizing
    pub interval: QualityBounds,
    /// Hill sizing
    pub hill: QualityBounds,
}

impl RaceParams {
    /// Table for `race`
    #[must_use]
    pub const fn for_race(race: RaceDistance) -> &'static Self {
        match race {
            RaceDistance::FiveK => &FIVE_K,
            RaceDistance::TenK => &TEN_K,
            RaceDistance::HalfMarathon => &HALF_MARATHON,
            RaceDistance::Marathon => &MARATHON,
        }
    }

    /// Sizing bounds for a quality workout kind
    #[must_use]
    pub const fn quality(&self, quality: QualityType) -> &QualityBounds {
        match quality {
            QualityType::Tempo => &self.tempo,
            QualityType::Interval => &self.interval,
            QualityType::Hill => &self.hill,
        }
    }
}

const FIVE_K: RaceParams = RaceParams {
    race: RaceDistance::FiveK,
    peak_weekly_mileage_cap: 40.0,
    long_run_max: 10.0,
    long_run_floor: 5.0,
    long_run_percentage: 0.30,
    minimum_preparation_target: 6.0,
    tempo: QualityBounds {
        percentage: 0.12,
        min: 2.0,
        max: 5.0,
    },
    interval: QualityBounds {
        percentage: 0.12,
        min: 2.0,
        max: 5.0,
    },
    hill: QualityBounds {
        percentage: 0.08,
        min: 1.0,
        max: 4.0,
    },
};

const TEN_K: RaceParams = RaceParams {
    race: RaceDistance::TenK,
    peak_weekly_mileage_cap: 45.0,
    long_run_max: 12.0,
    long_run_floor: 7.0,
    long_run_percentage: 0.30,
    minimum_preparation_target: 8.0,
    tempo: QualityBounds {
        percentage: 0.14,
        min: 3.0,
        max: 6.0,
    },
    interval: QualityBounds {
        percentage: 0.12,
        min: 2.0,
        max: 5.0,
    },
    hill: QualityBounds {
        percentage: 0.08,
        min: 2.0,
        max: 4.0,
    },
};

const HALF_MARATHON: RaceParams = RaceParams {
    race: RaceDistance::HalfMarathon,
    peak_weekly_mileage_cap: 50.0,
    long_run_max: 14.0,
    long_run_floor: 12.0,
    long_run_percentage: 0.35,
    minimum_preparation_target: 12.0,
    tempo: QualityBounds {
        percentage: 0.15,
        min: 3.0,
        max: 8.0,
    },
    interval: QualityBounds {
        percentage: 0.10,
        min: 3.0,
        max: 6.0,
    },
    hill: QualityBounds {
        percentage: 0.08,
        min: 2.0,
        max: 5.0,
    },
};

const MARATHON: RaceParams = RaceParams {
    race: RaceDistance::Marathon,
    peak_weekly_mileage_cap: 70.0,
    long_run_max: 22.0,
    long_run_floor: 20.0,
    long_run_percentage: 0.40,
    minimum_preparation_target: 20.0,
    tempo: QualityBounds {
        percentage: 0.15,
        min: 4.0,
        max: 10.0,
    },
    interval: QualityBounds {
        percentage: 0.10,
        min: 3.0,
        max: 7.0,
    },
    hill: QualityBounds {
        percentage: 0.08,
        min: 2.0,
        max: 6.0,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floors_match_race_requirements() {
        assert!((RaceParams::for_race(RaceDistance::Marathon).long_run_floor - 20.0).abs() < 1e-9);
        assert!(
            (RaceParams::for_race(RaceDistance::HalfMarathon).long_run_floor - 12.0).abs() < 1e-9
        );
        assert!((RaceParams::for_race(RaceDistance::TenK).long_run_floor - 7.0).abs() < 1e-9);
        assert!((RaceParams::for_race(RaceDistance::FiveK).long_run_floor - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_tables_are_internally_consistent() {
        for race in RaceDistance::ALL {
            let params = RaceParams::for_race(race);
            assert_eq!(params.race, race);
            assert!(params.long_run_floor <= params.long_run_max);
            for quality in QualityType::ALL {
                let bounds = params.quality(quality);
                assert!(bounds.min <= bounds.max);
                assert!(bounds.percentage > 0.0 && bounds.percentage < 0.5);
            }
        }
    }
}
