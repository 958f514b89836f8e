// ABOUTME: Plan-wide constants for input validation, distance defaults, and storage limits
// ABOUTME: Values shared by the intelligence crate and the enrichment/repair pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Accepted plan-length window
pub mod plan_limits {
    /// Shortest supported plan (weeks)
    pub const MIN_TOTAL_WEEKS: u32 = 10;

    /// Longest supported plan (weeks)
    pub const MAX_TOTAL_WEEKS: u32 = 30;

    /// Plans at or beyond this length taper for three weeks instead of two
    pub const LONG_TAPER_THRESHOLD_WEEKS: u32 = 20;

    /// Taper length for plans shorter than `LONG_TAPER_THRESHOLD_WEEKS`
    pub const SHORT_TAPER_WEEKS: u32 = 2;

    /// Taper length for plans at or beyond `LONG_TAPER_THRESHOLD_WEEKS`
    pub const LONG_TAPER_WEEKS: u32 = 3;

    /// Length of a build/recovery micro-cycle (weeks)
    pub const CYCLE_LENGTH_WEEKS: u32 = 3;
}

/// Type-based distance fallbacks used when neither the skeleton nor its text
/// carries a usable distance
pub mod distance_defaults {
    /// Tempo, interval and hill sessions (miles)
    pub const QUALITY_MILES: f64 = 4.0;

    /// Easy runs, long runs and cross-training (miles or equivalence miles)
    pub const EASY_MILES: f64 = 3.0;

    /// Shortest distance a rescaled running workout may shrink to (miles)
    pub const MIN_WORKOUT_MILES: f64 = 2.0;

    /// Ceiling for long runs synthesized by the repair pass (miles)
    pub const SYNTHESIZED_LONG_RUN_CAP_MILES: f64 = 20.0;
}

/// Persistence collaborator limits
pub mod storage {
    /// Per-document size limit of the plan store (bytes)
    pub const MAX_DOCUMENT_BYTES: usize = 1_048_576;
}
