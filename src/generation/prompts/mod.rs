// ABOUTME: Prompt text for the weekly workout generator, loaded at compile time
// ABOUTME: Combines the system instructions, the template catalogue, and one week's targets
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Generator Prompts
//!
//! The static instructions live in markdown next to this file so they can be
//! edited without touching code.

use std::fmt::Write;
use stride_core::models::{SchedulePreferences, WeekTarget};

use crate::enrichment::format_miles;

/// Instructions shared by every week request
pub const PLAN_SYSTEM_PROMPT: &str = include_str!("plan_system.md");

/// Build the request text for one week
///
/// `catalogue` is the token listing produced by `WorkoutCatalogue::listing`.
#[must_use]
pub fn week_prompt(
    target: &WeekTarget,
    preferences: &SchedulePreferences,
    catalogue: &str,
) -> String {
    let hard_days = preferences
        .hard_days
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let mut prompt = String::with_capacity(PLAN_SYSTEM_PROMPT.len() + catalogue.len() + 512);
    prompt.push_str(PLAN_SYSTEM_PROMPT);
    prompt.push_str("\n## Workout catalogue\n\n");
    prompt.push_str(catalogue);
    prompt.push_str("\n\n## This week\n\n");
    // Writing to a String cannot fail
    let _ = writeln!(prompt, "- Week: {} ({} phase)", target.week_number, target.phase);
    let _ = writeln!(
        prompt,
        "- Weekly total: {} miles",
        format_miles(target.weekly_mileage)
    );
    let _ = writeln!(
        prompt,
        "- Long run: {} miles on {}",
        format_miles(target.long_run),
        preferences.long_run_day
    );
    let _ = writeln!(prompt, "- Hard days: {hard_days}");
    let _ = writeln!(
        prompt,
        "- Quality sizes: tempo {} mi, intervals {} mi, hills {} mi",
        format_miles(target.tempo_distance),
        format_miles(target.interval_distance),
        format_miles(target.hill_distance)
    );
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use stride_core::models::Phase;

    #[test]
    fn test_week_prompt_includes_targets_and_catalogue() {
        let target = WeekTarget {
            week_number: 7,
            phase: Phase::Build,
            weekly_mileage: 32.0,
            long_run: 13.0,
            tempo_distance: 5.0,
            interval_distance: 3.0,
            hill_distance: 3.0,
        };
        let preferences = SchedulePreferences::new(vec![Weekday::Tue, Weekday::Thu], Weekday::Sun);
        let prompt = week_prompt(&target, &preferences, "tempo_0: Continuous Tempo - steady");
        assert!(prompt.starts_with(PLAN_SYSTEM_PROMPT));
        assert!(prompt.contains("tempo_0: Continuous Tempo"));
        assert!(prompt.contains("- Week: 7 (Build phase)"));
        assert!(prompt.contains("- Weekly total: 32 miles"));
        assert!(prompt.contains("- Long run: 13 miles on Sun"));
        assert!(prompt.contains("- Hard days: Tue, Thu"));
    }
}
