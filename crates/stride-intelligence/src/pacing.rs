// ABOUTME: Pace collaborator contract, VDOT-backed pace provider, and progressive pace blending
// ABOUTME: Week-specific paces move linearly from current fitness toward goal fitness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use stride_core::errors::AppResult;
use stride_core::models::{PaceRange, PaceSet, RacePerformance, TargetPace};
use tracing::debug;

use crate::algorithms::VdotAlgorithm;

/// Source of structured training paces for a reference performance
pub trait PaceProvider: Send + Sync {
    /// Paces derived from `performance`
    ///
    /// # Errors
    ///
    /// Returns an error when the performance cannot be converted to paces.
    fn pace_set(&self, performance: &RacePerformance) -> AppResult<PaceSet>;
}

/// VDOT intensity shares for each training zone
mod intensity {
    /// Fast end of the easy band
    pub const EASY_FAST: f64 = 0.74;
    /// Slow end of the easy band
    pub const EASY_SLOW: f64 = 0.59;
    /// Marathon race pace
    pub const MARATHON: f64 = 0.80;
    /// Lactate threshold
    pub const THRESHOLD: f64 = 0.86;
    /// VO2max intervals
    pub const INTERVAL: f64 = 0.98;
}

/// Pace provider built on the VDOT model
#[derive(Debug, Clone, Copy, Default)]
pub struct VdotPaceProvider {
    algorithm: VdotAlgorithm,
}

impl VdotPaceProvider {
    /// Provider using `algorithm` to score performances
    #[must_use]
    pub const fn new(algorithm: VdotAlgorithm) -> Self {
        Self { algorithm }
    }

    fn pace_at(vdot: f64, fraction: f64) -> AppResult<f64> {
        let velocity = VdotAlgorithm::velocity_at_fraction(vdot, fraction)?;
        Ok(VdotAlgorithm::seconds_per_mile(velocity))
    }
}

impl PaceProvider for VdotPaceProvider {
    fn pace_set(&self, performance: &RacePerformance) -> AppResult<PaceSet> {
        let vdot = self
            .algorithm
            .calculate_vdot(performance.distance_meters, performance.time_seconds)?;
        debug!(vdot, algorithm = self.algorithm.name(), "derived VDOT for pace set");

        Ok(PaceSet {
            easy: PaceRange {
                min: Self::pace_at(vdot, intensity::EASY_FAST)?,
                max: Self::pace_at(vdot, intensity::EASY_SLOW)?,
            },
            threshold: TargetPace {
                pace: Self::pace_at(vdot, intensity::THRESHOLD)?,
            },
            interval: TargetPace {
                pace: Self::pace_at(vdot, intensity::INTERVAL)?,
            },
            marathon: TargetPace {
                pace: Self::pace_at(vdot, intensity::MARATHON)?,
            },
        })
    }
}

/// Blends current-fitness paces toward goal paces across a plan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressivePacing {
    /// Paces for current fitness
    pub current: PaceSet,
    /// Paces for goal fitness
    pub goal: PaceSet,
}

impl ProgressivePacing {
    /// Create a blender from two pace sets
    #[must_use]
    pub const fn new(current: PaceSet, goal: PaceSet) -> Self {
        Self { current, goal }
    }

    /// Resolve both pace sets through `provider`
    ///
    /// # Errors
    ///
    /// Propagates provider failures.
    pub fn from_performances(
        provider: &dyn PaceProvider,
        current: &RacePerformance,
        goal: &RacePerformance,
    ) -> AppResult<Self> {
        Ok(Self::new(provider.pace_set(current)?, provider.pace_set(goal)?))
    }

    /// Paces for `week` of a `total_weeks` plan, blended by `week / total_weeks`
    #[must_use]
    pub fn paces_for_week(&self, week: u32, total_weeks: u32) -> PaceSet {
        let fraction = f64::from(week) / f64::from(total_weeks.max(1));
        self.current.blend(&self.goal, fraction)
    }
}
