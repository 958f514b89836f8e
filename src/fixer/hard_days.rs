// ABOUTME: Repair pass that puts a quality session on every designated hard day
// ABOUTME: Prefers swapping with a misplaced quality day so the weekly total is preserved
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use chrono::Weekday;
use stride_core::models::{DistanceSource, SchedulePreferences, WeekSkeleton, Workout, WorkoutType};

use super::RepairAction;
use crate::enrichment::format_miles;
use crate::workouts::{WorkoutCategory, WorkoutToken};

/// Exchange everything but the day between two workouts
pub(super) fn swap_content(week: &mut WeekSkeleton, a: usize, b: usize) {
    if a == b {
        return;
    }
    let (day_a, day_b) = (week.workouts[a].day, week.workouts[b].day);
    week.workouts.swap(a, b);
    week.workouts[a].day = day_a;
    week.workouts[b].day = day_b;
}

/// Replace the workout on `day` (or add one) with `workout`
pub(super) fn put_on_day(week: &mut WeekSkeleton, workout: Workout) {
    match week.workouts.iter().position(|w| w.day == workout.day) {
        Some(index) => week.workouts[index] = workout,
        None => week.workouts.push(workout),
    }
}

fn synthesized_quality(
    day: Weekday,
    workout_type: WorkoutType,
    distance: f64,
    source: DistanceSource,
) -> Workout {
    let (name, detail) = match workout_type {
        WorkoutType::Interval => ("Interval Session", "with repeats at interval pace"),
        _ => ("Tempo Run", "with sustained running at threshold pace"),
    };
    let token = WorkoutCategory::for_workout_type(workout_type)
        .map(|category| WorkoutToken::first(category).to_string());
    let mut workout = Workout::new(day, workout_type, distance)
        .named(name)
        .described(format!("{} miles {detail}", format_miles(distance)));
    workout.workout_id = token;
    workout.distance_source = Some(source);
    workout
}

/// Ensure every hard day holds a tempo, interval, or hill session
pub fn fix_hard_days_violations(
    week: &mut WeekSkeleton,
    preferences: &SchedulePreferences,
    quality_default_miles: f64,
) -> Vec<RepairAction> {
    let mut actions = Vec::new();

    for &hard_day in &preferences.hard_days {
        let current = week.workouts.iter().position(|w| w.day == hard_day);
        let needs_quality = current.is_none_or(|i| {
            matches!(
                week.workouts[i].workout_type,
                WorkoutType::Easy | WorkoutType::Rest
            )
        });
        if !needs_quality {
            continue;
        }

        let donor = week.workouts.iter().position(|w| {
            w.workout_type.is_quality() && !preferences.is_hard_day(w.day)
        });

        match (current, donor) {
            (Some(index), Some(donor)) => {
                let from_day = week.workouts[donor].day;
                swap_content(week, index, donor);
                actions.push(RepairAction::HardDaySwapped {
                    week_number: week.week_number,
                    hard_day,
                    from_day,
                });
            }
            _ => {
                let has_tempo = week
                    .workouts
                    .iter()
                    .any(|w| w.workout_type == WorkoutType::Tempo);
                let workout_type = if has_tempo {
                    WorkoutType::Interval
                } else {
                    WorkoutType::Tempo
                };
                let existing = current.map_or(0.0, |i| week.workouts[i].distance);
                let (distance, source) = if existing > 0.0 {
                    (existing, DistanceSource::Explicit)
                } else {
                    (quality_default_miles, DistanceSource::TypeDefault)
                };
                put_on_day(week, synthesized_quality(hard_day, workout_type, distance, source));
                actions.push(RepairAction::HardDaySynthesized {
                    week_number: week.week_number,
                    day: hard_day,
                    workout_type,
                    distance,
                });
            }
        }
    }

    actions
}
