// ABOUTME: Core types and constants for the Stride training-plan engine
// ABOUTME: Foundation crate with error handling, plan models, workout models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Stride Core
//!
//! Foundation crate providing shared types and constants for the Stride
//! training-plan engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Plan-wide limits and distance defaults
//! - **models**: Plan inputs, phases, week targets, workouts, paces, and warnings

/// Unified error handling system with standard error codes
pub mod errors;

/// Plan-wide constants organized by domain
pub mod constants;

/// Core data models (`PlanInputs`, `WeekTarget`, `Workout`, `PaceSet`, etc.)
pub mod models;
