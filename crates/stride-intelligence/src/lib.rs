// ABOUTME: Deterministic plan-math engine for endurance training schedules
// ABOUTME: Phases, growth rate, race calculators, experience adjustment, projection, and pacing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Stride Intelligence
//!
//! Pure, synchronous plan math. Every function here is a deterministic
//! function of its arguments, so whole-plan generation can be retried safely.
//!
//! The pipeline, leaves first:
//!
//! 1. [`phases::PhaseDistributor`] splits the plan into Base/Build/Peak/Taper
//! 2. [`growth::GrowthRateCalculator`] picks the weekly growth rate
//! 3. [`race_calculators`] derive peak mileage and long-run max per race
//! 4. [`experience::ExperienceAdjuster`] applies level multipliers and floors
//! 5. [`projector::WeeklyProjector`] expands the targets week by week
//!
//! [`targets::PlanTargets`] runs all five steps for one set of inputs.

/// Static per-race configuration tables
pub mod race_params;

/// Base/Build/Peak/Taper week distribution
pub mod phases;

/// Adaptive weekly growth rate
pub mod growth;

/// Per-race peak mileage and long-run calculators
pub mod race_calculators;

/// Experience-level multipliers with long-run floors
pub mod experience;

/// Week-by-week projection of mileage, long runs, and quality sizing
pub mod projector;

/// Running performance algorithms (VDOT)
pub mod algorithms;

/// Pace collaborator contract and progressive pace blending
pub mod pacing;

/// End-to-end target computation for one plan
pub mod targets;

pub use experience::{AdjustedTargets, ExperienceAdjuster};
pub use growth::GrowthRateCalculator;
pub use pacing::{PaceProvider, ProgressivePacing, VdotPaceProvider};
pub use phases::PhaseDistributor;
pub use projector::WeeklyProjector;
pub use race_calculators::{calculator_for, LongRunEstimate, RaceCalculator};
pub use race_params::RaceParams;
pub use targets::PlanTargets;

