// ABOUTME: Planner configuration covering repair tolerances, distance defaults, and storage limits
// ABOUTME: Defaults come from constants; STRIDE_* environment variables override and are validated
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use stride_core::constants::{distance_defaults, storage};
use stride_core::errors::AppError;
use thiserror::Error;
use tracing::warn;

/// Configuration error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Two related values are out of order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A single value is outside its allowed bounds
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string())
    }
}

/// Tolerances for the plan repair pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixerConfig {
    /// Weekly totals less than this many miles from target are left alone
    pub mileage_tolerance_miles: f64,
    /// Smallest `target / actual` ratio the rescale will apply
    pub min_rescale_ratio: f64,
    /// Largest `target / actual` ratio the rescale will apply
    pub max_rescale_ratio: f64,
    /// Long runs within this many miles of target are left alone
    pub long_run_tolerance_miles: f64,
    /// Rescaled workouts never drop below this distance (miles)
    pub min_workout_miles: f64,
    /// Cap for synthesized long runs (miles)
    pub synthesized_long_run_cap_miles: f64,
}

impl Default for FixerConfig {
    fn default() -> Self {
        Self {
            mileage_tolerance_miles: 2.0,
            min_rescale_ratio: 0.7,
            max_rescale_ratio: 1.3,
            long_run_tolerance_miles: 1.0,
            min_workout_miles: distance_defaults::MIN_WORKOUT_MILES,
            synthesized_long_run_cap_miles: distance_defaults::SYNTHESIZED_LONG_RUN_CAP_MILES,
        }
    }
}

/// Fallback distances used when a workout carries no usable distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceDefaults {
    /// Tempo, interval and hill sessions (miles)
    pub quality_miles: f64,
    /// Easy, long and bike sessions (miles)
    pub easy_miles: f64,
}

impl Default for DistanceDefaults {
    fn default() -> Self {
        Self {
            quality_miles: distance_defaults::QUALITY_MILES,
            easy_miles: distance_defaults::EASY_MILES,
        }
    }
}

/// Complete planner configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Repair pass tolerances
    pub fixer: FixerConfig,
    /// Distance fallbacks
    pub distances: DistanceDefaults,
    /// Largest serialized plan document accepted by the store (bytes)
    pub max_document_bytes: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            fixer: FixerConfig::default(),
            distances: DistanceDefaults::default(),
            max_document_bytes: storage::MAX_DOCUMENT_BYTES,
        }
    }
}

/// Global configuration singleton
static PLANNER_CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

fn env_override<T: FromStr>(name: &'static str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(raw) = env::var(name) {
        *target = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {name}: '{raw}'")))?;
    }
    Ok(())
}

impl PlannerConfig {
    /// Get the global configuration instance
    ///
    /// Loaded once from the environment; invalid settings fall back to defaults.
    pub fn global() -> &'static Self {
        PLANNER_CONFIG.get_or_init(|| {
            Self::from_env().unwrap_or_else(|e| {
                warn!("Failed to load planner config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from `STRIDE_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or validation fails
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        env_override(
            "STRIDE_MILEAGE_TOLERANCE_MILES",
            &mut self.fixer.mileage_tolerance_miles,
        )?;
        env_override("STRIDE_MIN_RESCALE_RATIO", &mut self.fixer.min_rescale_ratio)?;
        env_override("STRIDE_MAX_RESCALE_RATIO", &mut self.fixer.max_rescale_ratio)?;
        env_override(
            "STRIDE_LONG_RUN_TOLERANCE_MILES",
            &mut self.fixer.long_run_tolerance_miles,
        )?;
        env_override("STRIDE_MIN_WORKOUT_MILES", &mut self.fixer.min_workout_miles)?;
        env_override(
            "STRIDE_SYNTHESIZED_LONG_RUN_CAP_MILES",
            &mut self.fixer.synthesized_long_run_cap_miles,
        )?;
        env_override("STRIDE_QUALITY_DEFAULT_MILES", &mut self.distances.quality_miles)?;
        env_override("STRIDE_EASY_DEFAULT_MILES", &mut self.distances.easy_miles)?;
        env_override("STRIDE_MAX_DOCUMENT_BYTES", &mut self.max_document_bytes)?;
        Ok(())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fixer = &self.fixer;
        if fixer.min_rescale_ratio.is_nan()
            || fixer.min_rescale_ratio <= 0.0
            || fixer.min_rescale_ratio > 1.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "min_rescale_ratio must be in (0, 1]",
            ));
        }
        if fixer.max_rescale_ratio.is_nan() || fixer.max_rescale_ratio < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_rescale_ratio must be >= 1",
            ));
        }
        if fixer.min_rescale_ratio >= fixer.max_rescale_ratio {
            return Err(ConfigError::InvalidRange(
                "min_rescale_ratio must be < max_rescale_ratio",
            ));
        }
        for (value, message) in [
            (
                fixer.mileage_tolerance_miles,
                "mileage_tolerance_miles must be >= 0",
            ),
            (
                fixer.long_run_tolerance_miles,
                "long_run_tolerance_miles must be >= 0",
            ),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::ValueOutOfRange(message));
            }
        }
        for (value, message) in [
            (fixer.min_workout_miles, "min_workout_miles must be > 0"),
            (
                fixer.synthesized_long_run_cap_miles,
                "synthesized_long_run_cap_miles must be > 0",
            ),
            (self.distances.quality_miles, "quality_miles must be > 0"),
            (self.distances.easy_miles, "easy_miles must be > 0"),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(message));
            }
        }
        if self.max_document_bytes == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_document_bytes must be > 0",
            ));
        }
        Ok(())
    }
}
