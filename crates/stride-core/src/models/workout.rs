// ABOUTME: Daily workout models for generated skeletons and enriched output
// ABOUTME: Workouts come from a semi-trusted generator and are repaired before enrichment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::pace::PaceSet;

/// Kind of daily workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Conversational aerobic run
    Easy,
    /// Threshold run
    Tempo,
    /// VO2max repeats
    Interval,
    /// Hill repeats
    #[serde(alias = "hills")]
    Hill,
    /// Weekly long run
    #[serde(alias = "longRun", alias = "long")]
    LongRun,
    /// Day off
    Rest,
    /// Cross-training ride, counted in equivalence miles
    #[serde(alias = "cross_training")]
    Bike,
}

impl WorkoutType {
    /// Tempo, interval and hill sessions
    #[must_use]
    pub const fn is_quality(self) -> bool {
        matches!(self, Self::Tempo | Self::Interval | Self::Hill)
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Tempo => write!(f, "tempo"),
            Self::Interval => write!(f, "interval"),
            Self::Hill => write!(f, "hill"),
            Self::LongRun => write!(f, "long_run"),
            Self::Rest => write!(f, "rest"),
            Self::Bike => write!(f, "bike"),
        }
    }
}

/// A single day of a generated week skeleton
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Day of the week
    pub day: Weekday,
    /// Workout kind
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    /// Distance in miles (equivalence miles for bike); zero when unknown
    #[serde(default)]
    pub distance: f64,
    /// Short display name
    #[serde(default)]
    pub name: String,
    /// Free-text description from the generator
    #[serde(default)]
    pub description: String,
    /// Catalogue token such as `tempo_1`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_id: Option<String>,
    /// How `distance` was resolved; set during normalization
    #[serde(skip)]
    pub distance_source: Option<DistanceSource>,
}

impl Workout {
    /// Create a workout with empty text fields
    #[must_use]
    pub fn new(day: Weekday, workout_type: WorkoutType, distance: f64) -> Self {
        Self {
            day,
            workout_type,
            distance,
            name: String::new(),
            description: String::new(),
            workout_id: None,
            distance_source: None,
        }
    }

    /// Set the display name
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the description
    #[must_use]
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the catalogue token
    #[must_use]
    pub fn with_workout_id(mut self, workout_id: impl Into<String>) -> Self {
        self.workout_id = Some(workout_id.into());
        self
    }

    /// Whether this is a rest day
    #[must_use]
    pub fn is_rest(&self) -> bool {
        self.workout_type == WorkoutType::Rest
    }

    /// Whether this is the long run
    #[must_use]
    pub fn is_long_run(&self) -> bool {
        self.workout_type == WorkoutType::LongRun
    }
}

/// All workouts generated for one week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSkeleton {
    /// 1-based week number
    pub week_number: u32,
    /// Daily workouts in generator order
    pub workouts: Vec<Workout>,
}

impl WeekSkeleton {
    /// Sum of all workout distances (miles and equivalence miles)
    #[must_use]
    pub fn total_distance(&self) -> f64 {
        self.workouts.iter().map(|w| w.distance).sum()
    }

    /// Workout scheduled on `day`, if any
    #[must_use]
    pub fn workout_on(&self, day: Weekday) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.day == day)
    }
}

/// Runner scheduling preferences from onboarding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePreferences {
    /// Days that must hold a quality session
    pub hard_days: Vec<Weekday>,
    /// Day reserved for the long run
    pub long_run_day: Weekday,
}

impl SchedulePreferences {
    /// Create preferences; every field is explicit
    #[must_use]
    pub const fn new(hard_days: Vec<Weekday>, long_run_day: Weekday) -> Self {
        Self {
            hard_days,
            long_run_day,
        }
    }

    /// Whether `day` is a designated hard day
    #[must_use]
    pub fn is_hard_day(&self, day: Weekday) -> bool {
        self.hard_days.contains(&day)
    }
}

/// Where a workout's final distance came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceSource {
    /// Numeric distance supplied by the skeleton
    Explicit,
    /// Extracted from the workout's name or description
    ParsedFromText,
    /// Type-based fallback
    TypeDefault,
    /// Chosen by the repair pass
    Repaired,
}

/// One segment of a prescribed workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSegment {
    /// Segment label such as "Warm-up" or "6 x 800m"
    pub label: String,
    /// Segment distance in miles
    pub distance: f64,
    /// Target pace text
    pub pace: String,
    /// Recovery between repeats, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery: Option<String>,
}

/// Concrete structure attached to a workout by the enricher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullWorkoutDetails {
    /// Catalogue token that produced this prescription
    pub template_id: String,
    /// Template title
    pub title: String,
    /// Ordered segments
    pub structure: Vec<WorkoutSegment>,
    /// Week-specific blended paces
    pub paces: PaceSet,
    /// Safety guidance
    pub safety_notes: Vec<String>,
    /// Total prescribed distance (miles)
    pub total_distance: f64,
    /// Provenance of the distance
    pub distance_source: DistanceSource,
}

/// A workout plus its enrichment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedWorkout {
    /// The repaired skeleton workout
    #[serde(flatten)]
    pub workout: Workout,
    /// Prescription details; absent for rest days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_workout_details: Option<FullWorkoutDetails>,
}

/// One week of the finished plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedWeek {
    /// 1-based week number
    pub week_number: u32,
    /// Enriched workouts
    pub workouts: Vec<EnrichedWorkout>,
    /// Realized total distance
    pub total_distance: f64,
}
