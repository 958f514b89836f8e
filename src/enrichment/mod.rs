// ABOUTME: Workout enrichment: text normalization, distance resolution, and template hydration
// ABOUTME: Normalize runs before repair; enrich attaches structure and week-specific paces afterwards
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Workout enrichment
//!
//! Two passes over a generated skeleton:
//!
//! 1. [`WorkoutEnricher::normalize_week`] fixes unit typos and resolves every
//!    workout's distance so the repair pass works on real numbers.
//! 2. [`WorkoutEnricher::enrich_week`] resolves each workout's template token,
//!    blends paces for the week, and expands the template into segments.

/// Ordered distance resolution
pub mod distance;
/// Typo correction and mile parsing
pub mod text;

pub use distance::{DistanceResolver, STANDARD_ORDER};
pub use text::{fix_distance_typos, format_miles, parse_distance, rewrite_distance_mentions};

use stride_core::errors::AppResult;
use stride_core::models::{
    DistanceSource, EnrichedWeek, EnrichedWorkout, FullWorkoutDetails, WeekSkeleton, Workout,
};
use stride_intelligence::ProgressivePacing;
use tracing::debug;

use crate::config::DistanceDefaults;
use crate::workouts::{WorkoutCatalogue, WorkoutCategory, WorkoutToken};

fn round_tenth(miles: f64) -> f64 {
    (miles * 10.0).round() / 10.0
}

/// Normalizes and hydrates generated workouts
#[derive(Debug, Clone)]
pub struct WorkoutEnricher {
    resolver: DistanceResolver,
    pacing: ProgressivePacing,
    total_weeks: u32,
}

impl WorkoutEnricher {
    /// Enricher for a plan of `total_weeks` using `pacing` for week paces
    #[must_use]
    pub fn new(defaults: DistanceDefaults, pacing: ProgressivePacing, total_weeks: u32) -> Self {
        Self {
            resolver: DistanceResolver::new(defaults),
            pacing,
            total_weeks,
        }
    }

    /// Distance resolver in use
    #[must_use]
    pub const fn resolver(&self) -> &DistanceResolver {
        &self.resolver
    }

    /// Fix typos and resolve the distance of one workout in place
    pub fn normalize_workout(&self, workout: &mut Workout) {
        workout.name = fix_distance_typos(&workout.name);
        workout.description = fix_distance_typos(&workout.description);
        let (distance, source) = self.resolver.resolve(workout);
        workout.distance = round_tenth(distance);
        workout.distance_source = Some(source);
    }

    /// Normalize every workout of a week in place
    pub fn normalize_week(&self, week: &mut WeekSkeleton) {
        for workout in &mut week.workouts {
            self.normalize_workout(workout);
        }
    }

    /// Template token for `workout`, falling back to the first template of its type
    ///
    /// Returns `None` for rest days.
    ///
    /// # Errors
    ///
    /// Returns `UnknownWorkoutToken` if the workout carries an unparseable token
    pub fn token_for(workout: &Workout) -> AppResult<Option<WorkoutToken>> {
        let Some(category) = WorkoutCategory::for_workout_type(workout.workout_type) else {
            return Ok(None);
        };
        let Some(raw) = workout.workout_id.as_deref() else {
            return Ok(Some(WorkoutToken::first(category)));
        };
        let token = WorkoutToken::parse(raw)?;
        if token.category == category {
            Ok(Some(token))
        } else {
            debug!(
                token = %token,
                workout_type = %workout.workout_type,
                "token category does not match workout type, using first template"
            );
            Ok(Some(WorkoutToken::first(category)))
        }
    }

    /// Attach full details to one workout of `week_number`
    ///
    /// # Errors
    ///
    /// Returns `UnknownWorkoutToken` if the workout's token is invalid
    pub fn enrich_workout(
        &self,
        workout: &Workout,
        week_number: u32,
    ) -> AppResult<EnrichedWorkout> {
        let Some(token) = Self::token_for(workout)? else {
            return Ok(EnrichedWorkout {
                workout: workout.clone(),
                full_workout_details: None,
            });
        };
        let template = WorkoutCatalogue::template(token)?;
        let paces = self.pacing.paces_for_week(week_number, self.total_weeks);
        let prescribed = template.prescription.prescribe(workout.distance, &paces);

        Ok(EnrichedWorkout {
            workout: workout.clone(),
            full_workout_details: Some(FullWorkoutDetails {
                template_id: token.to_string(),
                title: template.title.to_owned(),
                structure: prescribed.structure,
                paces,
                safety_notes: prescribed.safety_notes,
                total_distance: workout.distance,
                distance_source: workout.distance_source.unwrap_or(DistanceSource::Explicit),
            }),
        })
    }

    /// Enrich every workout of a repaired week
    ///
    /// # Errors
    ///
    /// Returns `UnknownWorkoutToken` if any workout's token is invalid
    pub fn enrich_week(&self, week: &WeekSkeleton) -> AppResult<EnrichedWeek> {
        let workouts = week
            .workouts
            .iter()
            .map(|workout| self.enrich_workout(workout, week.week_number))
            .collect::<AppResult<Vec<_>>>()?;
        Ok(EnrichedWeek {
            week_number: week.week_number,
            workouts,
            total_distance: round_tenth(week.total_distance()),
        })
    }
}
