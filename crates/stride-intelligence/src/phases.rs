// ABOUTME: Splits a plan into contiguous Base/Build/Peak/Taper week ranges
// ABOUTME: Build absorbs rounding drift; short plans clamp Build at zero instead of going negative
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use stride_core::constants::plan_limits::{
    LONG_TAPER_THRESHOLD_WEEKS, LONG_TAPER_WEEKS, SHORT_TAPER_WEEKS,
};
use stride_core::models::{Phase, PhaseBlock, PhasePlan};
use tracing::debug;

/// Share of the pre-taper weeks given to each phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhasePercentages {
    /// Base share
    pub base: f64,
    /// Build share (informational; Build absorbs the remainder)
    pub build: f64,
    /// Peak share
    pub peak: f64,
}

/// Plans at or below this length use the compressed split
const SHORT_PLAN_MAX_WEEKS: u32 = 14;

/// Plans at or above this length use the base-heavy split
const LONG_PLAN_MIN_WEEKS: u32 = 24;

const SHORT_PLAN_SPLIT: PhasePercentages = PhasePercentages {
    base: 0.25,
    build: 0.55,
    peak: 0.20,
};

const STANDARD_PLAN_SPLIT: PhasePercentages = PhasePercentages {
    base: 0.30,
    build: 0.50,
    peak: 0.20,
};

const LONG_PLAN_SPLIT: PhasePercentages = PhasePercentages {
    base: 0.35,
    build: 0.45,
    peak: 0.20,
};

/// Periodization week distributor
pub struct PhaseDistributor;

impl PhaseDistributor {
    /// Taper length for a plan of `total_weeks`
    #[must_use]
    pub const fn taper_weeks(total_weeks: u32) -> u32 {
        let taper = if total_weeks >= LONG_TAPER_THRESHOLD_WEEKS {
            LONG_TAPER_WEEKS
        } else {
            SHORT_TAPER_WEEKS
        };
        if taper > total_weeks {
            total_weeks
        } else {
            taper
        }
    }

    /// Weeks before the taper
    #[must_use]
    pub const fn training_weeks(total_weeks: u32) -> u32 {
        total_weeks - Self::taper_weeks(total_weeks)
    }

    /// Phase split used for a plan of `total_weeks`
    #[must_use]
    pub const fn percentages(total_weeks: u32) -> PhasePercentages {
        if total_weeks <= SHORT_PLAN_MAX_WEEKS {
            SHORT_PLAN_SPLIT
        } else if total_weeks >= LONG_PLAN_MIN_WEEKS {
            LONG_PLAN_SPLIT
        } else {
            STANDARD_PLAN_SPLIT
        }
    }

    /// Distribute `total_weeks` into contiguous phase blocks
    ///
    /// A zero-week plan degrades to a single one-week Base block. Zero-length
    /// phases are omitted from the result.
    #[must_use]
    pub fn distribute(total_weeks: u32) -> PhasePlan {
        if total_weeks == 0 {
            debug!("zero-week plan requested, falling back to a single Base week");
            return PhasePlan {
                total_weeks: 1,
                blocks: vec![PhaseBlock {
                    phase: Phase::Base,
                    start_week: 1,
                    end_week: 1,
                }],
            };
        }

        let taper = Self::taper_weeks(total_weeks);
        let training = total_weeks - taper;
        let split = Self::percentages(total_weeks);

        let base = (f64::from(training) * split.base).round() as u32;
        let mut peak = (f64::from(training) * split.peak).round() as u32;
        let base = base.min(training);
        if base + peak > training {
            debug!(
                training_weeks = training,
                base_weeks = base,
                peak_before = peak,
                peak_after = training - base,
                "build length would be negative, clamping to zero weeks"
            );
            peak = training - base;
        }
        let build = training - base - peak;

        let mut blocks = Vec::with_capacity(4);
        let mut next_week = 1;
        for (phase, weeks) in [
            (Phase::Base, base),
            (Phase::Build, build),
            (Phase::Peak, peak),
            (Phase::Taper, taper),
        ] {
            if weeks == 0 {
                continue;
            }
            blocks.push(PhaseBlock {
                phase,
                start_week: next_week,
                end_week: next_week + weeks - 1,
            });
            next_week += weeks;
        }

        debug!(
            total_weeks,
            base, build, peak, taper, "distributed plan phases"
        );

        PhasePlan {
            total_weeks,
            blocks,
        }
    }
}
