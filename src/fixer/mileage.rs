// ABOUTME: Repair pass that rescales a week's workouts toward its mileage target
// ABOUTME: Refuses ratios outside the configured band; shared rescale helper keeps a 2 mi floor
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use stride_core::models::{DistanceSource, PlanWarning, WeekSkeleton, Workout};
use tracing::debug;

use super::RepairAction;
use crate::config::FixerConfig;
use crate::enrichment::rewrite_distance_mentions;
use crate::logging::PlanLogger;

/// Result of the mileage pass for one week
#[derive(Debug, Clone, PartialEq)]
pub enum MileageOutcome {
    /// Already within tolerance
    Unchanged,
    /// Distances were rescaled
    Rescaled(RepairAction),
    /// Ratio outside the allowed band; week left as-is
    Skipped(PlanWarning),
}

fn round_tenth(miles: f64) -> f64 {
    (miles * 10.0).round() / 10.0
}

/// Set a repaired distance and rewrite matching mentions in the text
pub(super) fn set_distance(workout: &mut Workout, new: f64) {
    let old = workout.distance;
    workout.distance = new;
    workout.distance_source = Some(DistanceSource::Repaired);
    workout.name = rewrite_distance_mentions(&workout.name, old, new);
    workout.description = rewrite_distance_mentions(&workout.description, old, new);
}

fn floored(week_number: u32, miles: f64, floor: f64) -> f64 {
    if miles < floor {
        debug!(
            week = week_number,
            before = miles,
            after = floor,
            "raising rescaled workout to minimum distance"
        );
        floor
    } else {
        miles
    }
}

/// Index of the longest workout among `indices`; earliest wins ties
fn largest_of(week: &WeekSkeleton, indices: &[usize]) -> Option<usize> {
    let mut largest: Option<usize> = None;
    for &index in indices {
        let longer = largest
            .is_none_or(|best| week.workouts[index].distance > week.workouts[best].distance);
        if longer {
            largest = Some(index);
        }
    }
    largest
}

/// Scale the workouts at `indices` so they sum to `target_sum`
///
/// Each workout keeps at least `floor` miles and is rounded to 0.1 mi; the
/// rounding residual lands on the largest of them (earliest wins ties).
pub(super) fn rescale_workouts(
    week: &mut WeekSkeleton,
    indices: &[usize],
    target_sum: f64,
    floor: f64,
) {
    let current: f64 = indices.iter().map(|&i| week.workouts[i].distance).sum();
    if current <= 0.0 {
        return;
    }
    let ratio = target_sum / current;
    let week_number = week.week_number;

    for &index in indices {
        let workout = &mut week.workouts[index];
        let scaled = floored(week_number, workout.distance * ratio, floor);
        set_distance(workout, round_tenth(scaled));
    }

    let Some(largest) = largest_of(week, indices) else {
        return;
    };
    let scaled_sum: f64 = indices.iter().map(|&i| week.workouts[i].distance).sum();
    let residual = round_tenth(target_sum - scaled_sum);
    if residual.abs() > f64::EPSILON {
        let workout = &mut week.workouts[largest];
        let old = workout.distance;
        let new = round_tenth(floored(week_number, old + residual, floor));
        debug!(
            week = week_number,
            residual, old, new, "absorbing rescale residual on largest workout"
        );
        set_distance(workout, new);
    }
}

/// Rescale non-rest workouts so the week sums to `target_weekly`
///
/// Weeks less than `mileage_tolerance_miles` away from target are left alone.
pub fn fix_mileage_mismatches(
    week: &mut WeekSkeleton,
    target_weekly: f64,
    config: &FixerConfig,
) -> MileageOutcome {
    let actual = week.total_distance();
    if (actual - target_weekly).abs() < config.mileage_tolerance_miles {
        return MileageOutcome::Unchanged;
    }

    let ratio = if actual > 0.0 {
        target_weekly / actual
    } else {
        0.0
    };
    if ratio < config.min_rescale_ratio || ratio > config.max_rescale_ratio {
        let warning = PlanWarning::RepairSkipped {
            week_number: week.week_number,
            actual,
            target: target_weekly,
            ratio,
        };
        PlanLogger::log_warning(&warning);
        return MileageOutcome::Skipped(warning);
    }

    let running: Vec<usize> = week
        .workouts
        .iter()
        .enumerate()
        .filter(|(_, w)| !w.is_rest())
        .map(|(i, _)| i)
        .collect();
    rescale_workouts(week, &running, target_weekly, config.min_workout_miles);

    MileageOutcome::Rescaled(RepairAction::MileageRescaled {
        week_number: week.week_number,
        from: actual,
        to: week.total_distance(),
        ratio,
    })
}
