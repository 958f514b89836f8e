// ABOUTME: Repair pass that forces generated week skeletons back onto the computed targets
// ABOUTME: Runs long-run presence, hard-day, mileage, and long-run size passes in a fixed order
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Plan Fixer
//!
//! Generated skeletons are semi-trusted. Each pass repairs one class of
//! defect and reports what it changed. A pass that would need an extreme
//! correction leaves the week alone and records a [`PlanWarning`] instead,
//! so a repair never makes a week worse than the generator left it.

/// Hard-day placement
pub mod hard_days;
/// Long-run presence and size
pub mod long_run;
/// Weekly total rescaling
pub mod mileage;

use chrono::Weekday;
use serde::Serialize;
use std::fmt;
use stride_core::models::{PlanWarning, SchedulePreferences, WeekSkeleton, WeekTarget, WorkoutType};

use crate::config::FixerConfig;
use crate::logging::PlanLogger;

pub use hard_days::fix_hard_days_violations;
pub use long_run::{fix_long_run_distances, fix_missing_long_runs, long_run_distance};
pub use mileage::{fix_mileage_mismatches, MileageOutcome};

/// One change applied by the repair pass
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RepairAction {
    /// A quality session was swapped onto a hard day
    HardDaySwapped {
        /// Week repaired
        week_number: u32,
        /// Designated hard day
        hard_day: Weekday,
        /// Day the quality session came from
        from_day: Weekday,
    },
    /// A quality session was created on a hard day
    HardDaySynthesized {
        /// Week repaired
        week_number: u32,
        /// Designated hard day
        day: Weekday,
        /// Session type created
        workout_type: WorkoutType,
        /// Session distance (miles)
        distance: f64,
    },
    /// A long run was created on the long-run day
    LongRunSynthesized {
        /// Week repaired
        week_number: u32,
        /// Long-run day
        day: Weekday,
        /// Long-run distance (miles)
        distance: f64,
    },
    /// The long run was moved onto the long-run day
    LongRunMoved {
        /// Week repaired
        week_number: u32,
        /// Original day
        from_day: Weekday,
        /// Long-run day
        to_day: Weekday,
    },
    /// An extra long run became an easy run
    LongRunDowngraded {
        /// Week repaired
        week_number: u32,
        /// Day of the downgraded run
        day: Weekday,
    },
    /// Every non-rest workout was scaled toward the weekly target
    MileageRescaled {
        /// Week repaired
        week_number: u32,
        /// Total before (miles)
        from: f64,
        /// Total after (miles)
        to: f64,
        /// Applied ratio
        ratio: f64,
    },
    /// The long run was set to the week's target
    LongRunAdjusted {
        /// Week repaired
        week_number: u32,
        /// Distance before (miles)
        from: f64,
        /// Distance after (miles)
        to: f64,
    },
}

impl RepairAction {
    /// Week the action applies to
    #[must_use]
    pub const fn week_number(&self) -> u32 {
        match self {
            Self::HardDaySwapped { week_number, .. }
            | Self::HardDaySynthesized { week_number, .. }
            | Self::LongRunSynthesized { week_number, .. }
            | Self::LongRunMoved { week_number, .. }
            | Self::LongRunDowngraded { week_number, .. }
            | Self::MileageRescaled { week_number, .. }
            | Self::LongRunAdjusted { week_number, .. } => *week_number,
        }
    }

    /// Short machine-friendly name
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::HardDaySwapped { .. } => "hard_day_swapped",
            Self::HardDaySynthesized { .. } => "hard_day_synthesized",
            Self::LongRunSynthesized { .. } => "long_run_synthesized",
            Self::LongRunMoved { .. } => "long_run_moved",
            Self::LongRunDowngraded { .. } => "long_run_downgraded",
            Self::MileageRescaled { .. } => "mileage_rescaled",
            Self::LongRunAdjusted { .. } => "long_run_adjusted",
        }
    }
}

impl fmt::Display for RepairAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HardDaySwapped {
                hard_day, from_day, ..
            } => write!(f, "moved quality session from {from_day} to {hard_day}"),
            Self::HardDaySynthesized {
                day,
                workout_type,
                distance,
                ..
            } => write!(f, "added {distance:.1} mi {workout_type} on {day}"),
            Self::LongRunSynthesized { day, distance, .. } => {
                write!(f, "added {distance:.1} mi long run on {day}")
            }
            Self::LongRunMoved {
                from_day, to_day, ..
            } => write!(f, "moved long run from {from_day} to {to_day}"),
            Self::LongRunDowngraded { day, .. } => {
                write!(f, "downgraded extra long run on {day} to easy")
            }
            Self::MileageRescaled {
                from, to, ratio, ..
            } => write!(f, "rescaled week from {from:.1} to {to:.1} mi (x{ratio:.2})"),
            Self::LongRunAdjusted { from, to, .. } => {
                write!(f, "long run {from:.1} -> {to:.1} mi")
            }
        }
    }
}

/// Everything the repair pass changed or declined to change
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RepairReport {
    /// Applied repairs in order
    pub actions: Vec<RepairAction>,
    /// Repairs that were declined
    pub warnings: Vec<PlanWarning>,
}

impl RepairReport {
    fn record(&mut self, action: RepairAction) {
        PlanLogger::log_repair(action.week_number(), action.kind(), &action.to_string());
        self.actions.push(action);
    }

    /// Whether nothing was changed or declined
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.actions.is_empty() && self.warnings.is_empty()
    }
}

/// Applies every repair pass to a generated plan
#[derive(Debug, Clone)]
pub struct PlanFixer {
    config: FixerConfig,
    preferences: SchedulePreferences,
    quality_default_miles: f64,
}

impl PlanFixer {
    /// Create a fixer for one runner's schedule
    #[must_use]
    pub const fn new(
        config: FixerConfig,
        preferences: SchedulePreferences,
        quality_default_miles: f64,
    ) -> Self {
        Self {
            config,
            preferences,
            quality_default_miles,
        }
    }

    /// Repair `weeks` in place against `targets`
    ///
    /// Weeks are processed in order so a synthesized long run can build on the
    /// previous week's repaired long run. The last week is treated as race week.
    pub fn repair(&self, weeks: &mut [WeekSkeleton], targets: &[WeekTarget]) -> RepairReport {
        let mut report = RepairReport::default();
        let final_week = weeks.iter().map(|w| w.week_number).max().unwrap_or(0);
        let mut previous_long_run: Option<f64> = None;

        for week in weeks.iter_mut() {
            let target = targets.iter().find(|t| t.week_number == week.week_number);

            let target_long_run = target
                .map_or(self.config.synthesized_long_run_cap_miles, |t| t.long_run);
            for action in fix_missing_long_runs(
                week,
                &self.preferences,
                previous_long_run,
                target_long_run,
                self.config.synthesized_long_run_cap_miles,
                week.week_number == final_week,
            ) {
                report.record(action);
            }

            // Long-run moves can leave an easy run on a hard day
            for action in
                fix_hard_days_violations(week, &self.preferences, self.quality_default_miles)
            {
                report.record(action);
            }

            if let Some(target) = target {
                match fix_mileage_mismatches(week, target.weekly_mileage, &self.config) {
                    MileageOutcome::Unchanged => {}
                    MileageOutcome::Rescaled(action) => report.record(action),
                    MileageOutcome::Skipped(warning) => report.warnings.push(warning),
                }
                if let Some(action) = fix_long_run_distances(
                    week,
                    target.long_run,
                    self.config.long_run_tolerance_miles,
                    self.config.min_workout_miles,
                ) {
                    report.record(action);
                }
            }

            if let Some(distance) = long_run_distance(week) {
                previous_long_run = Some(distance);
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::models::{Phase, Workout};

    fn target(week_number: u32, weekly: f64, long_run: f64) -> WeekTarget {
        WeekTarget {
            week_number,
            phase: Phase::Build,
            weekly_mileage: weekly,
            long_run,
            tempo_distance: 5.0,
            interval_distance: 4.0,
            hill_distance: 3.0,
        }
    }

    fn fixer() -> PlanFixer {
        PlanFixer::new(
            FixerConfig::default(),
            SchedulePreferences::new(vec![Weekday::Tue], Weekday::Sun),
            4.0,
        )
    }

    #[test]
    fn test_clean_week_produces_clean_report() {
        let mut weeks = vec![WeekSkeleton {
            week_number: 1,
            workouts: vec![
                Workout::new(Weekday::Mon, WorkoutType::Easy, 4.0),
                Workout::new(Weekday::Tue, WorkoutType::Tempo, 5.0),
                Workout::new(Weekday::Thu, WorkoutType::Easy, 5.0),
                Workout::new(Weekday::Sun, WorkoutType::LongRun, 10.0),
            ],
        }];
        let before = weeks.clone();
        let report = fixer().repair(&mut weeks, &[target(1, 24.0, 10.0)]);
        assert!(report.is_clean());
        assert_eq!(weeks, before);
    }

    #[test]
    fn test_synthesized_long_run_builds_on_previous_week() {
        let mut weeks = vec![
            WeekSkeleton {
                week_number: 1,
                workouts: vec![
                    Workout::new(Weekday::Tue, WorkoutType::Tempo, 4.0),
                    Workout::new(Weekday::Sun, WorkoutType::LongRun, 8.0),
                ],
            },
            WeekSkeleton {
                week_number: 2,
                workouts: vec![Workout::new(Weekday::Tue, WorkoutType::Tempo, 4.0)],
            },
            WeekSkeleton {
                week_number: 3,
                workouts: vec![Workout::new(Weekday::Tue, WorkoutType::Tempo, 3.0)],
            },
        ];
        let report = fixer().repair(&mut weeks, &[]);
        assert_eq!(long_run_distance(&weeks[1]), Some(9.0));
        assert_eq!(long_run_distance(&weeks[2]), None, "race week is left alone");
        assert_eq!(report.actions.len(), 1);
    }

    #[test]
    fn test_action_display_and_kind() {
        let action = RepairAction::LongRunAdjusted {
            week_number: 3,
            from: 14.0,
            to: 16.0,
        };
        assert_eq!(action.kind(), "long_run_adjusted");
        assert_eq!(action.to_string(), "long run 14.0 -> 16.0 mi");
        assert_eq!(action.week_number(), 3);
    }
}
