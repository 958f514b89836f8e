// ABOUTME: Static workout template catalogue addressed by category and index
// ABOUTME: Each template pairs display text with a prescription recipe used by the enricher
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::fmt::Write;
use stride_core::errors::{AppError, AppResult};

use super::prescription::{PaceZone, Prescription};
use super::token::{WorkoutCategory, WorkoutToken};

/// One catalogue entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutTemplate {
    /// Display title
    pub title: &'static str,
    /// One-line description shown to the generator
    pub summary: &'static str,
    /// Structure recipe
    pub prescription: Prescription,
}

const EASY: &[WorkoutTemplate] = &[
    WorkoutTemplate {
        title: "Easy Run",
        summary: "Conversational aerobic running",
        prescription: Prescription::Steady {
            zone: PaceZone::Easy,
            strides: 0,
        },
    },
    WorkoutTemplate {
        title: "Recovery Run",
        summary: "Very relaxed running the day after a hard effort",
        prescription: Prescription::Steady {
            zone: PaceZone::Recovery,
            strides: 0,
        },
    },
    WorkoutTemplate {
        title: "Easy Run with Strides",
        summary: "Easy running finished with short relaxed accelerations",
        prescription: Prescription::Steady {
            zone: PaceZone::Easy,
            strides: 6,
        },
    },
];

const TEMPO: &[WorkoutTemplate] = &[
    WorkoutTemplate {
        title: "Continuous Tempo",
        summary: "Sustained comfortably-hard running at threshold",
        prescription: Prescription::ContinuousTempo,
    },
    WorkoutTemplate {
        title: "Cruise Intervals",
        summary: "Mile repeats at threshold with short jog recoveries",
        prescription: Prescription::CruiseIntervals {
            rep_miles: 1.0,
            recovery: "1:00 jog",
        },
    },
    WorkoutTemplate {
        title: "Progression Tempo",
        summary: "Marathon pace building into threshold",
        prescription: Prescription::Progression,
    },
];

const INTERVAL: &[WorkoutTemplate] = &[
    WorkoutTemplate {
        title: "800m Repeats",
        summary: "Half-mile repeats at VO2max pace",
        prescription: Prescription::Repeats {
            rep_meters: 800,
            recovery: "400m jog",
        },
    },
    WorkoutTemplate {
        title: "1000m Repeats",
        summary: "Kilometer repeats at VO2max pace",
        prescription: Prescription::Repeats {
            rep_meters: 1000,
            recovery: "400m jog",
        },
    },
    WorkoutTemplate {
        title: "Mile Repeats",
        summary: "Longer VO2max repeats for race-specific strength",
        prescription: Prescription::Repeats {
            rep_meters: 1609,
            recovery: "3:00 jog",
        },
    },
];

const HILL: &[WorkoutTemplate] = &[
    WorkoutTemplate {
        title: "Short Hill Repeats",
        summary: "Powerful 60-90 second climbs with jog-down recovery",
        prescription: Prescription::HillRepeats {
            seconds: 90,
            recovery: "jog down",
        },
    },
    WorkoutTemplate {
        title: "Long Hill Repeats",
        summary: "Sustained 3 minute climbs at strong effort",
        prescription: Prescription::HillRepeats {
            seconds: 180,
            recovery: "jog down",
        },
    },
];

const LONG_RUN: &[WorkoutTemplate] = &[
    WorkoutTemplate {
        title: "Steady Long Run",
        summary: "Relaxed endurance running at easy pace",
        prescription: Prescription::LongRun { finish_share: 0.0 },
    },
    WorkoutTemplate {
        title: "Long Run with Marathon-Pace Finish",
        summary: "Easy running closing with a marathon-pace segment",
        prescription: Prescription::LongRun { finish_share: 0.25 },
    },
    WorkoutTemplate {
        title: "Progressive Long Run",
        summary: "Each third a little faster than the last",
        prescription: Prescription::ProgressiveLongRun,
    },
];

const CROSS_TRAINING: &[WorkoutTemplate] = &[
    WorkoutTemplate {
        title: "Easy Spin",
        summary: "Low-impact aerobic ride, counted in equivalence miles",
        prescription: Prescription::Ride { surges: 0 },
    },
    WorkoutTemplate {
        title: "Bike Surges",
        summary: "Aerobic ride with short strong surges",
        prescription: Prescription::Ride { surges: 5 },
    },
];

/// Read-only template catalogue
pub struct WorkoutCatalogue;

impl WorkoutCatalogue {
    /// Templates for `category` in index order
    #[must_use]
    pub const fn templates(category: WorkoutCategory) -> &'static [WorkoutTemplate] {
        match category {
            WorkoutCategory::Easy => EASY,
            WorkoutCategory::Tempo => TEMPO,
            WorkoutCategory::Interval => INTERVAL,
            WorkoutCategory::Hill => HILL,
            WorkoutCategory::LongRun => LONG_RUN,
            WorkoutCategory::CrossTraining => CROSS_TRAINING,
        }
    }

    /// Template addressed by `token`
    ///
    /// # Errors
    ///
    /// Returns `UnknownWorkoutToken` if the token does not address a template
    pub fn template(token: WorkoutToken) -> AppResult<&'static WorkoutTemplate> {
        Self::templates(token.category)
            .get(token.index.get())
            .ok_or_else(|| AppError::unknown_token(token.to_string()))
    }

    /// Total number of templates
    #[must_use]
    pub fn len() -> usize {
        WorkoutCategory::ALL
            .iter()
            .map(|category| Self::templates(*category).len())
            .sum()
    }

    /// Catalogue listing, one `token: Title - summary` line per template
    #[must_use]
    pub fn listing() -> String {
        let mut listing = String::new();
        for category in WorkoutCategory::ALL {
            for (index, template) in Self::templates(category).iter().enumerate() {
                // Writing to a String cannot fail
                let _ = writeln!(
                    listing,
                    "{}_{index}: {} - {}",
                    category.prefix(),
                    template.title,
                    template.summary
                );
            }
        }
        listing
    }
}
