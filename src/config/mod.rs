// ABOUTME: Configuration module for planner tolerances, distance fallbacks, and storage limits
// ABOUTME: Environment-driven with validation and a process-wide immutable instance
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Planner configuration
//!
//! The only process-wide state in the planner. Loaded once through
//! [`PlannerConfig::global`] and never mutated afterwards; callers that need
//! different tolerances (tests, the CLI) build their own instance.

/// Planner configuration and validation
pub mod planner_config;

pub use planner_config::{ConfigError, DistanceDefaults, FixerConfig, PlannerConfig};
