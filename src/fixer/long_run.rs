// ABOUTME: Repair passes for long-run presence, placement, and magnitude
// ABOUTME: One long run per non-final week on the designated day; resizing rebalances the week
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use stride_core::models::{DistanceSource, SchedulePreferences, WeekSkeleton, Workout, WorkoutType};
use tracing::debug;

use super::hard_days::{put_on_day, swap_content};
use super::mileage::{rescale_workouts, set_distance};
use super::RepairAction;
use crate::enrichment::format_miles;
use crate::workouts::{WorkoutCategory, WorkoutToken};

/// Long run of `week`, if any
#[must_use]
pub fn long_run_distance(week: &WeekSkeleton) -> Option<f64> {
    week.workouts
        .iter()
        .find(|w| w.is_long_run())
        .map(|w| w.distance)
}

fn synthesized_long_run(
    week: &WeekSkeleton,
    preferences: &SchedulePreferences,
    distance: f64,
) -> Workout {
    let mut workout = Workout::new(preferences.long_run_day, WorkoutType::LongRun, distance)
        .named("Long Run")
        .described(format!("{} miles at easy, conversational pace", format_miles(distance)));
    workout.workout_id = Some(WorkoutToken::first(WorkoutCategory::LongRun).to_string());
    workout.distance_source = Some(DistanceSource::Repaired);
    debug!(
        week = week.week_number,
        distance, "synthesizing missing long run"
    );
    workout
}

fn downgrade_to_easy(workout: &mut Workout) {
    workout.workout_type = WorkoutType::Easy;
    workout.name = "Easy Run".to_owned();
    workout.workout_id = Some(WorkoutToken::first(WorkoutCategory::Easy).to_string());
}

/// Ensure exactly one long run, on the designated day
///
/// `previous_long_run` is the prior week's long run; when absent the week's
/// target long run seeds the synthesized distance. The final week is left alone.
pub fn fix_missing_long_runs(
    week: &mut WeekSkeleton,
    preferences: &SchedulePreferences,
    previous_long_run: Option<f64>,
    target_long_run: f64,
    synthesized_cap_miles: f64,
    is_final_week: bool,
) -> Vec<RepairAction> {
    let mut actions = Vec::new();
    if is_final_week {
        return actions;
    }
    let long_run_day = preferences.long_run_day;

    let on_day = week
        .workouts
        .iter()
        .position(|w| w.day == long_run_day && w.is_long_run());
    let elsewhere = week.workouts.iter().position(|w| w.is_long_run());

    match (on_day, elsewhere) {
        (Some(_), _) => {}
        (None, Some(index)) => match week.workouts.iter().position(|w| w.day == long_run_day) {
            Some(target) => {
                let from_day = week.workouts[index].day;
                swap_content(week, target, index);
                actions.push(RepairAction::LongRunMoved {
                    week_number: week.week_number,
                    from_day,
                    to_day: long_run_day,
                });
            }
            None => {
                let from_day = week.workouts[index].day;
                week.workouts[index].day = long_run_day;
                actions.push(RepairAction::LongRunMoved {
                    week_number: week.week_number,
                    from_day,
                    to_day: long_run_day,
                });
            }
        },
        (None, None) => {
            let seed = previous_long_run.map_or(target_long_run, |previous| previous + 1.0);
            let distance = seed.min(synthesized_cap_miles);
            put_on_day(week, synthesized_long_run(week, preferences, distance));
            actions.push(RepairAction::LongRunSynthesized {
                week_number: week.week_number,
                day: long_run_day,
                distance,
            });
        }
    }

    let week_number = week.week_number;
    for workout in &mut week.workouts {
        if workout.is_long_run() && workout.day != long_run_day {
            downgrade_to_easy(workout);
            actions.push(RepairAction::LongRunDowngraded {
                week_number,
                day: workout.day,
            });
        }
    }

    actions
}

/// Force the long run to the week's target when it is off by more than `tolerance_miles`
///
/// The other running workouts absorb the change so the weekly total holds,
/// none dropping below `min_workout_miles`.
pub fn fix_long_run_distances(
    week: &mut WeekSkeleton,
    target_long_run: f64,
    tolerance_miles: f64,
    min_workout_miles: f64,
) -> Option<RepairAction> {
    let index = week.workouts.iter().position(Workout::is_long_run)?;
    let from = week.workouts[index].distance;
    if (from - target_long_run).abs() <= tolerance_miles {
        return None;
    }

    set_distance(&mut week.workouts[index], target_long_run);

    let others: Vec<usize> = week
        .workouts
        .iter()
        .enumerate()
        .filter(|(i, w)| *i != index && !w.is_rest())
        .map(|(i, _)| i)
        .collect();
    let others_sum: f64 = others.iter().map(|&i| week.workouts[i].distance).sum();
    let rebalanced = others_sum - (target_long_run - from);
    debug!(
        week = week.week_number,
        before = others_sum,
        after = rebalanced,
        "rebalancing week around adjusted long run"
    );
    rescale_workouts(week, &others, rebalanced, min_workout_miles);

    Some(RepairAction::LongRunAdjusted {
        week_number: week.week_number,
        from,
        to: target_long_run,
    })
}
