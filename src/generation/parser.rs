// ABOUTME: Parses free-text generator output into a typed week skeleton
// ABOUTME: Accepts "<Day>: [WORKOUT_ID: token] Name - description" and "<Day>: Rest" lines
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use chrono::Weekday;
use regex::Regex;
use std::sync::LazyLock;
use stride_core::errors::{AppError, AppResult};
use stride_core::models::{WeekSkeleton, Workout, WorkoutType};
use tracing::debug;

use crate::workouts::WorkoutToken;

/// `Monday: [WORKOUT_ID: tempo_1] Cruise Intervals - 6 miles with 3 x 1 mile`
static WORKOUT_LINE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*[-*]?\s*\**(?P<day>mon|tue|wed|thu|fri|sat|sun)[a-z]*\**\s*:\s*(?:\[\s*workout_id\s*:\s*(?P<token>[a-z_]+\d+)\s*\]\s*)?(?P<rest>.*)$",
    )
    .ok()
});

/// Generator output parser
pub struct SkeletonParser;

impl SkeletonParser {
    /// Parse one week of generator output
    ///
    /// Lines that do not start with a weekday are ignored. A day line without
    /// a token is accepted only when it names a rest day. Distances stay at
    /// zero; normalization resolves them from the text.
    ///
    /// # Errors
    ///
    /// Returns `GenerationFailed` for empty output or a week with no
    /// recognizable day lines, and `UnknownWorkoutToken` when a token does not
    /// address a catalogue template.
    pub fn parse_week(week_number: u32, text: &str) -> AppResult<WeekSkeleton> {
        if text.trim().is_empty() {
            return Err(AppError::generation(format!(
                "Generator returned empty output for week {week_number}"
            )));
        }
        let pattern = WORKOUT_LINE
            .as_ref()
            .ok_or_else(|| AppError::internal("Workout line pattern failed to compile"))?;

        let mut workouts = Vec::new();
        for line in text.lines() {
            let Some(captures) = pattern.captures(line) else {
                continue;
            };
            let Some(day) = captures.name("day").and_then(|m| parse_day(m.as_str())) else {
                continue;
            };
            let rest = captures.name("rest").map_or("", |m| m.as_str()).trim();

            let workout = match captures.name("token") {
                Some(raw) => Some(Self::workout_from_token(day, raw.as_str(), rest)?),
                None if is_rest_line(rest) => {
                    Some(Workout::new(day, WorkoutType::Rest, 0.0).named("Rest"))
                }
                None => {
                    debug!(
                        week = week_number,
                        line, "ignoring day line without workout token"
                    );
                    None
                }
            };
            if let Some(workout) = workout {
                workouts.push(workout);
            }
        }

        if workouts.is_empty() {
            return Err(AppError::generation(format!(
                "No workouts could be parsed for week {week_number}"
            ))
            .with_details(serde_json::json!({ "week_number": week_number })));
        }
        debug!(
            week = week_number,
            workouts = workouts.len(),
            "parsed generator output"
        );
        Ok(WeekSkeleton {
            week_number,
            workouts,
        })
    }

    fn workout_from_token(day: Weekday, raw_token: &str, rest: &str) -> AppResult<Workout> {
        let token = WorkoutToken::parse(raw_token)?;
        let (name, description) = match rest.split_once(" - ") {
            Some((name, description)) => (name.trim(), description.trim()),
            None => (rest, ""),
        };
        Ok(Workout::new(day, token.category.workout_type(), 0.0)
            .named(name)
            .described(description)
            .with_workout_id(token.to_string()))
    }
}

fn parse_day(raw: &str) -> Option<Weekday> {
    raw.parse().ok()
}

fn is_rest_line(rest: &str) -> bool {
    let lower = rest.to_lowercase();
    lower.starts_with("rest") || lower.starts_with("off")
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::errors::ErrorCode;

    const SAMPLE: &str = "Week 3 plan:\n\
        Monday: Rest\n\
        Tuesday: [WORKOUT_ID: tempo_1] Cruise Intervals - 6 miles with 3 x 1 mile at threshold\n\
        Wednesday: [WORKOUT_ID: easy_0] Easy Run - 4 miless conversational\n\
        Thursday: [WORKOUT_ID: interval_0] 800m Repeats - 5 mi total\n\
        Saturday: [WORKOUT_ID: bike_0] Easy Spin - 6 equivalence miles\n\
        Sunday: [WORKOUT_ID: long_run_0] Long Run - 12 miles steady\n";

    #[test]
    fn test_parses_sample_week() {
        let week = SkeletonParser::parse_week(3, SAMPLE).unwrap();
        assert_eq!(week.week_number, 3);
        assert_eq!(week.workouts.len(), 6);
        assert!(week.workout_on(Weekday::Mon).unwrap().is_rest());
        let tuesday = week.workout_on(Weekday::Tue).unwrap();
        assert_eq!(tuesday.workout_type, WorkoutType::Tempo);
        assert_eq!(tuesday.name, "Cruise Intervals");
        assert_eq!(tuesday.description, "6 miles with 3 x 1 mile at threshold");
        assert!(tuesday.distance.abs() < f64::EPSILON);
        assert_eq!(tuesday.workout_id.as_deref(), Some("tempo_1"));
        let saturday = week.workout_on(Weekday::Sat).unwrap();
        assert_eq!(saturday.workout_type, WorkoutType::Bike);
        assert!(week.workout_on(Weekday::Sun).unwrap().is_long_run());
    }

    #[test]
    fn test_empty_output_fails_generation() {
        let error = SkeletonParser::parse_week(1, "   \n").unwrap_err();
        assert_eq!(error.code, ErrorCode::GenerationFailed);
    }

    #[test]
    fn test_prose_without_days_fails_generation() {
        let error = SkeletonParser::parse_week(1, "I cannot help with that.").unwrap_err();
        assert_eq!(error.code, ErrorCode::GenerationFailed);
    }

    #[test]
    fn test_unknown_token_fails_week() {
        let error = SkeletonParser::parse_week(2, "Tuesday: [WORKOUT_ID: tempo_9] Mystery - 5 miles")
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::UnknownWorkoutToken);
    }

    #[test]
    fn test_markdown_bullets_are_accepted() {
        let week = SkeletonParser::parse_week(1, "- **Tue**: [WORKOUT_ID: hills_0] Short Hills - 5 miles")
            .unwrap();
        assert_eq!(week.workouts[0].workout_type, WorkoutType::Hill);
    }
}
