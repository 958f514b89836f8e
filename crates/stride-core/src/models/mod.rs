// ABOUTME: Core data models for training-plan generation
// ABOUTME: Re-exports plan inputs, phases, week targets, workouts, paces, and warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! This module contains the data structures that flow through the plan engine:
//!
//! - `PlanInputs`: the immutable, fully-specified request (built via `PlanInputs::builder`)
//! - `PhasePlan` / `WeekTarget`: the numeric plan computed from the inputs
//! - `Workout` / `WeekSkeleton`: semi-trusted daily workouts from the generator
//! - `EnrichedWorkout`: workouts hydrated with structure and paces
//! - `PaceSet`: the pace bundle exchanged with the pace collaborator
//! - `PlanWarning`: non-fatal advisories returned alongside a plan

mod inputs;
mod pace;
mod plan;
mod race;
mod warnings;
mod workout;

pub use inputs::{PlanInputs, PlanInputsBuilder, PlanInputsDraft};
pub use pace::{PaceRange, PaceSet, RacePerformance, TargetPace};
pub use plan::{Phase, PhaseBlock, PhasePlan, WeekTarget};
pub use race::{ExperienceLevel, QualityType, RaceDistance};
pub use warnings::PlanWarning;
pub use workout::{
    DistanceSource, EnrichedWeek, EnrichedWorkout, FullWorkoutDetails, SchedulePreferences,
    WeekSkeleton, Workout, WorkoutSegment, WorkoutType,
};
