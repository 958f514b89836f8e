// ABOUTME: Non-fatal advisories returned alongside a generated plan
// ABOUTME: Covers unreachable preparation targets, skipped repairs, and volume imbalances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use super::race::RaceDistance;

/// Advisory attached to a plan; never aborts generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanWarning {
    /// The plan cannot reach the race's minimum long-run preparation target
    /// through normal progression; the caller may suggest a longer plan
    UnreachableTarget {
        /// Target race
        race: RaceDistance,
        /// Minimum preparation long run (miles)
        target_miles: f64,
        /// Long run the progression reaches on its own (miles)
        projected_miles: f64,
        /// Plan length that would reach the target at the standard rate
        suggested_weeks: u32,
    },
    /// The repair pass declined to rescale a week outside the allowed band
    RepairSkipped {
        /// Week that was left unchanged
        week_number: u32,
        /// Realized total (miles)
        actual: f64,
        /// Target total (miles)
        target: f64,
        /// Rescale ratio that would have been required
        ratio: f64,
    },
    /// The long run is larger than the rest of the week combined
    LongRunDominatesVolume {
        /// Affected week
        week_number: u32,
        /// Long run (miles)
        long_run: f64,
        /// Weekly volume (miles)
        weekly_mileage: f64,
    },
}

impl fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnreachableTarget {
                race,
                target_miles,
                projected_miles,
                suggested_weeks,
            } => write!(
                f,
                "{race} plan progresses to a {projected_miles:.1} mi long run, short of the {target_miles:.0} mi preparation target; consider {suggested_weeks}+ weeks"
            ),
            Self::RepairSkipped {
                week_number,
                actual,
                target,
                ratio,
            } => write!(
                f,
                "week {week_number}: {actual:.1} mi vs {target:.1} mi target needs ratio {ratio:.2}, left unchanged"
            ),
            Self::LongRunDominatesVolume {
                week_number,
                long_run,
                weekly_mileage,
            } => write!(
                f,
                "week {week_number}: {long_run:.0} mi long run exceeds half of {weekly_mileage:.0} mi weekly volume"
            ),
        }
    }
}
