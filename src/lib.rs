// ABOUTME: Library entry point for the Stride training-plan generator
// ABOUTME: Wires catalogue, generation boundary, enrichment, repair, storage checks, config, and logging
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # Stride Planner
//!
//! Builds week-by-week endurance training plans. The numeric targets come
//! from [`stride_intelligence`]; this crate turns an externally generated
//! workout skeleton into a plan that agrees with them.
//!
//! ## Pipeline
//!
//! 1. [`stride_intelligence::PlanTargets`] computes phases and per-week targets
//! 2. [`generation::WorkoutGenerator`] writes each week as free text
//! 3. [`generation::SkeletonParser`] turns the text into typed workouts
//! 4. [`enrichment::WorkoutEnricher`] normalizes distances
//! 5. [`fixer::PlanFixer`] repairs the skeleton against the targets
//! 6. [`enrichment::WorkoutEnricher`] attaches templates and week paces
//! 7. [`storage::validate_for_storage`] checks the store's limits
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::Weekday;
//! use stride_core::errors::AppResult;
//! use stride_core::models::{
//!     ExperienceLevel, PlanInputs, RaceDistance, RacePerformance, SchedulePreferences,
//!     WeekSkeleton,
//! };
//! use stride_intelligence::{ProgressivePacing, VdotPaceProvider};
//! use stride_planner::config::PlannerConfig;
//! use stride_planner::generation::PlanGenerator;
//!
//! fn build(skeleton: Vec<WeekSkeleton>) -> AppResult<()> {
//!     let inputs = PlanInputs::builder()
//!         .current_weekly_mileage(25.0)
//!         .current_long_run(6.0)
//!         .total_weeks(19)
//!         .race_distance(RaceDistance::Marathon)
//!         .experience_level(ExperienceLevel::Beginner)
//!         .build()?;
//!     let current = RacePerformance { distance_meters: 5000.0, time_seconds: 1500.0 };
//!     let goal = RacePerformance { distance_meters: 5000.0, time_seconds: 1380.0 };
//!     let pacing =
//!         ProgressivePacing::from_performances(&VdotPaceProvider::default(), &current, &goal)?;
//!     let preferences = SchedulePreferences::new(vec![Weekday::Tue, Weekday::Thu], Weekday::Sun);
//!     let plan = PlanGenerator::new(*PlannerConfig::global(), preferences)
//!         .assemble(&inputs, skeleton, pacing)?;
//!     println!("{} weeks, {} repairs", plan.weeks.len(), plan.repairs.len());
//!     Ok(())
//! }
//! ```

/// Planner configuration from environment variables
pub mod config;

/// Distance normalization and workout hydration
pub mod enrichment;

/// Repair passes for generated skeletons
pub mod fixer;

/// Generator boundary and plan assembly
pub mod generation;

/// Structured logging setup
pub mod logging;

/// Storage-constraint validation and plan output
pub mod storage;

/// Workout tokens, template catalogue, and prescriptions
pub mod workouts;

pub use generation::{GeneratedPlan, PlanGenerator, WorkoutGenerator};
pub use stride_core::errors::{AppError, AppResult, ErrorCode};
