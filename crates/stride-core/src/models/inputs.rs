// ABOUTME: Immutable plan inputs with a required-fields builder that fails at construction
// ABOUTME: Missing fields are fatal configuration errors; nothing is ever defaulted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::race::{ExperienceLevel, RaceDistance};
use crate::constants::plan_limits::{MAX_TOTAL_WEEKS, MIN_TOTAL_WEEKS};
use crate::errors::{AppError, AppResult};

/// Fully validated inputs for one plan generation request
///
/// Instances can only be created through [`PlanInputs::builder`] or
/// `TryFrom<PlanInputsDraft>`, so every downstream calculation can rely on all
/// fields being present and in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanInputs {
    current_weekly_mileage: f64,
    current_long_run: f64,
    total_weeks: u32,
    race_distance: RaceDistance,
    experience_level: ExperienceLevel,
}

impl PlanInputs {
    /// Start building plan inputs
    #[must_use]
    pub fn builder() -> PlanInputsBuilder {
        PlanInputsBuilder::default()
    }

    /// Current weekly volume (miles)
    #[must_use]
    pub const fn current_weekly_mileage(&self) -> f64 {
        self.current_weekly_mileage
    }

    /// Current longest run (miles)
    #[must_use]
    pub const fn current_long_run(&self) -> f64 {
        self.current_long_run
    }

    /// Plan length (weeks), within `[10, 30]`
    #[must_use]
    pub const fn total_weeks(&self) -> u32 {
        self.total_weeks
    }

    /// Target race
    #[must_use]
    pub const fn race_distance(&self) -> RaceDistance {
        self.race_distance
    }

    /// Runner experience level
    #[must_use]
    pub const fn experience_level(&self) -> ExperienceLevel {
        self.experience_level
    }
}

/// Builder enforcing that every plan input is supplied
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct PlanInputsBuilder {
    current_weekly_mileage: Option<f64>,
    current_long_run: Option<f64>,
    total_weeks: Option<u32>,
    race_distance: Option<RaceDistance>,
    experience_level: Option<ExperienceLevel>,
}

impl PlanInputsBuilder {
    /// Set current weekly mileage
    pub fn current_weekly_mileage(mut self, miles: f64) -> Self {
        self.current_weekly_mileage = Some(miles);
        self
    }

    /// Set current long run
    pub fn current_long_run(mut self, miles: f64) -> Self {
        self.current_long_run = Some(miles);
        self
    }

    /// Set plan length
    pub fn total_weeks(mut self, weeks: u32) -> Self {
        self.total_weeks = Some(weeks);
        self
    }

    /// Set race distance
    pub fn race_distance(mut self, race: RaceDistance) -> Self {
        self.race_distance = Some(race);
        self
    }

    /// Set experience level
    pub fn experience_level(mut self, level: ExperienceLevel) -> Self {
        self.experience_level = Some(level);
        self
    }

    /// Validate and build the inputs
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` naming the first absent field, or
    /// `ValueOutOfRange` when mileage is not positive or the plan length is
    /// outside `[10, 30]` weeks.
    pub fn build(self) -> AppResult<PlanInputs> {
        let current_weekly_mileage = self
            .current_weekly_mileage
            .ok_or_else(|| AppError::missing_field("current_weekly_mileage"))?;
        let current_long_run = self
            .current_long_run
            .ok_or_else(|| AppError::missing_field("current_long_run"))?;
        let total_weeks = self
            .total_weeks
            .ok_or_else(|| AppError::missing_field("total_weeks"))?;
        let race_distance = self
            .race_distance
            .ok_or_else(|| AppError::missing_field("race_distance"))?;
        let experience_level = self
            .experience_level
            .ok_or_else(|| AppError::missing_field("experience_level"))?;

        if !current_weekly_mileage.is_finite() || current_weekly_mileage <= 0.0 {
            return Err(AppError::out_of_range(
                "current_weekly_mileage",
                format!("Current weekly mileage must be positive, got {current_weekly_mileage}"),
            ));
        }
        if !current_long_run.is_finite() || current_long_run <= 0.0 {
            return Err(AppError::out_of_range(
                "current_long_run",
                format!("Current long run must be positive, got {current_long_run}"),
            ));
        }
        if !(MIN_TOTAL_WEEKS..=MAX_TOTAL_WEEKS).contains(&total_weeks) {
            return Err(AppError::out_of_range(
                "total_weeks",
                format!(
                    "Plan length must be between {MIN_TOTAL_WEEKS} and {MAX_TOTAL_WEEKS} weeks, got {total_weeks}"
                ),
            ));
        }

        Ok(PlanInputs {
            current_weekly_mileage,
            current_long_run,
            total_weeks,
            race_distance,
            experience_level,
        })
    }
}

/// Unvalidated inputs as delivered by the onboarding collaborator
///
/// Every field is optional on the wire; conversion into [`PlanInputs`] fails on
/// the first missing one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanInputsDraft {
    /// Current weekly mileage
    pub current_weekly_mileage: Option<f64>,
    /// Current long run
    pub current_long_run: Option<f64>,
    /// Plan length in weeks
    pub total_weeks: Option<u32>,
    /// Race distance
    pub race_distance: Option<RaceDistance>,
    /// Experience level
    pub experience_level: Option<ExperienceLevel>,
}

impl TryFrom<PlanInputsDraft> for PlanInputs {
    type Error = AppError;

    fn try_from(draft: PlanInputsDraft) -> Result<Self, Self::Error> {
        let mut builder = Self::builder();
        builder.current_weekly_mileage = draft.current_weekly_mileage;
        builder.current_long_run = draft.current_long_run;
        builder.total_weeks = draft.total_weeks;
        builder.race_distance = draft.race_distance;
        builder.experience_level = draft.experience_level;
        builder.build()
    }
}
