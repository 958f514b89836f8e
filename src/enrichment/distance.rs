// ABOUTME: Ordered distance resolution for skeleton workouts
// ABOUTME: Explicit value, then text mention, then a per-type default; rest days are always zero
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use stride_core::models::{DistanceSource, Workout, WorkoutType};
use tracing::debug;

use super::text::parse_distance;
use crate::config::DistanceDefaults;

/// Resolution order applied to every workout
pub const STANDARD_ORDER: [DistanceSource; 3] = [
    DistanceSource::Explicit,
    DistanceSource::ParsedFromText,
    DistanceSource::TypeDefault,
];

/// Resolves a workout's distance by trying strategies in order
#[derive(Debug, Clone)]
pub struct DistanceResolver {
    order: Vec<DistanceSource>,
    defaults: DistanceDefaults,
}

impl DistanceResolver {
    /// Resolver using [`STANDARD_ORDER`]
    #[must_use]
    pub fn new(defaults: DistanceDefaults) -> Self {
        Self::with_order(defaults, STANDARD_ORDER.to_vec())
    }

    /// Resolver with a custom strategy order
    ///
    /// The type default always runs last if it is not in `order`, so resolution
    /// never fails.
    #[must_use]
    pub fn with_order(defaults: DistanceDefaults, mut order: Vec<DistanceSource>) -> Self {
        if !order.contains(&DistanceSource::TypeDefault) {
            order.push(DistanceSource::TypeDefault);
        }
        Self { order, defaults }
    }

    /// Strategy order in effect
    #[must_use]
    pub fn order(&self) -> &[DistanceSource] {
        &self.order
    }

    /// Distance for `workout` and which strategy produced it
    #[must_use]
    pub fn resolve(&self, workout: &Workout) -> (f64, DistanceSource) {
        if workout.is_rest() {
            return (0.0, DistanceSource::TypeDefault);
        }
        for strategy in &self.order {
            if let Some(distance) = self.try_strategy(*strategy, workout) {
                debug!(
                    day = %workout.day,
                    workout_type = %workout.workout_type,
                    distance,
                    source = ?strategy,
                    "resolved workout distance"
                );
                return (distance, *strategy);
            }
        }
        (self.type_default(workout.workout_type), DistanceSource::TypeDefault)
    }

    fn try_strategy(&self, strategy: DistanceSource, workout: &Workout) -> Option<f64> {
        match strategy {
            DistanceSource::Explicit => {
                (workout.distance.is_finite() && workout.distance > 0.0).then_some(workout.distance)
            }
            DistanceSource::ParsedFromText => {
                parse_distance(&workout.description).or_else(|| parse_distance(&workout.name))
            }
            DistanceSource::TypeDefault => Some(self.type_default(workout.workout_type)),
            DistanceSource::Repaired => None,
        }
    }

    /// Fallback distance for a workout type
    #[must_use]
    pub fn type_default(&self, workout_type: WorkoutType) -> f64 {
        match workout_type {
            WorkoutType::Rest => 0.0,
            t if t.is_quality() => self.defaults.quality_miles,
            _ => self.defaults.easy_miles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn resolver() -> DistanceResolver {
        DistanceResolver::new(DistanceDefaults::default())
    }

    #[test]
    fn test_explicit_wins() {
        let workout = Workout::new(Weekday::Mon, WorkoutType::Easy, 5.0).described("Easy 7 miles");
        assert_eq!(resolver().resolve(&workout), (5.0, DistanceSource::Explicit));
    }

    #[test]
    fn test_text_used_when_distance_missing() {
        let workout = Workout::new(Weekday::Mon, WorkoutType::Easy, 0.0).described("Easy 7 miles");
        assert_eq!(resolver().resolve(&workout), (7.0, DistanceSource::ParsedFromText));
    }

    #[test]
    fn test_type_defaults() {
        let tempo = Workout::new(Weekday::Tue, WorkoutType::Tempo, 0.0);
        assert_eq!(resolver().resolve(&tempo), (4.0, DistanceSource::TypeDefault));
        let bike = Workout::new(Weekday::Wed, WorkoutType::Bike, 0.0);
        assert_eq!(resolver().resolve(&bike), (3.0, DistanceSource::TypeDefault));
        let rest = Workout::new(Weekday::Fri, WorkoutType::Rest, 4.0);
        assert_eq!(resolver().resolve(&rest), (0.0, DistanceSource::TypeDefault));
    }

    #[test]
    fn test_custom_order_keeps_default_last() {
        let resolver = DistanceResolver::with_order(
            DistanceDefaults::default(),
            vec![DistanceSource::ParsedFromText],
        );
        assert_eq!(resolver.order().last(), Some(&DistanceSource::TypeDefault));
        let workout = Workout::new(Weekday::Mon, WorkoutType::Easy, 5.0).described("Easy 7 miles");
        assert_eq!(resolver.resolve(&workout), (7.0, DistanceSource::ParsedFromText));
    }
}
