// ABOUTME: Integration tests for plan target computation across every race, length, and level
// ABOUTME: Covers long-run floors, caps, phase coverage, taper shape, and the named scenarios
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use stride_core::errors::ErrorCode;
use stride_core::models::{
    ExperienceLevel, Phase, PlanInputs, PlanInputsDraft, PlanWarning, RaceDistance,
};
use stride_intelligence::{GrowthRateCalculator, PhaseDistributor, PlanTargets, RaceParams};

fn inputs(
    weekly: f64,
    long_run: f64,
    weeks: u32,
    race: RaceDistance,
    level: ExperienceLevel,
) -> PlanInputs {
    PlanInputs::builder()
        .current_weekly_mileage(weekly)
        .current_long_run(long_run)
        .total_weeks(weeks)
        .race_distance(race)
        .experience_level(level)
        .build()
        .unwrap()
}

/// Every supported combination with a modest starting base
fn grid() -> impl Iterator<Item = (RaceDistance, u32, ExperienceLevel, PlanTargets)> {
    RaceDistance::ALL.into_iter().flat_map(|race| {
        (10..=30).flat_map(move |weeks| {
            ExperienceLevel::ALL.into_iter().map(move |level| {
                let targets = PlanTargets::compute(&inputs(20.0, 5.0, weeks, race, level));
                (race, weeks, level, targets)
            })
        })
    })
}

#[test]
fn test_long_run_floor_reached_for_every_combination() {
    for (race, weeks, level, targets) in grid() {
        let floor = RaceParams::for_race(race).long_run_floor;
        let longest = targets.longest_long_run();
        assert!(
            longest >= floor,
            "{race} {weeks}w {level}: longest long run {longest} below floor {floor}"
        );
    }
}

#[test]
fn test_weeks_respect_adjusted_caps() {
    for (race, weeks, level, targets) in grid() {
        for week in &targets.weeks {
            assert!(
                week.weekly_mileage <= targets.adjusted.peak_mileage,
                "{race} {weeks}w {level} week {}: {} > peak {}",
                week.week_number,
                week.weekly_mileage,
                targets.adjusted.peak_mileage
            );
            assert!(
                week.long_run <= targets.adjusted.long_run_max,
                "{race} {weeks}w {level} week {}: long run {} > max {}",
                week.week_number,
                week.long_run,
                targets.adjusted.long_run_max
            );
        }
    }
}

#[test]
fn test_phase_plans_cover_every_supported_length() {
    for weeks in 10..=30 {
        let plan = PhaseDistributor::distribute(weeks);
        assert!(plan.covers_all_weeks(), "{weeks} weeks not covered");
        let taper = plan.blocks.last().unwrap();
        assert_eq!(taper.phase, Phase::Taper);
        assert!((2..=3).contains(&taper.len()));
        assert_eq!(taper.end_week, weeks);
    }
}

#[test]
fn test_taper_is_non_increasing_and_above_floor() {
    for (race, weeks, level, targets) in grid() {
        let peak = targets.adjusted.peak_mileage;
        let taper: Vec<f64> = targets
            .weeks
            .iter()
            .filter(|w| w.phase == Phase::Taper)
            .map(|w| w.weekly_mileage)
            .collect();
        assert!(!taper.is_empty());
        for pair in taper.windows(2) {
            assert!(pair[1] <= pair[0], "{race} {weeks}w {level}: taper rises {pair:?}");
        }
        for miles in &taper {
            assert!(*miles >= peak * 0.4, "{race} {weeks}w {level}: {miles} below 40% of {peak}");
        }
    }
}

#[test]
fn test_one_target_per_week_in_order() {
    for (_, weeks, _, targets) in grid() {
        let numbers: Vec<u32> = targets.weeks.iter().map(|w| w.week_number).collect();
        assert_eq!(numbers, (1..=weeks).collect::<Vec<_>>());
    }
}

#[test]
fn test_growth_rate_endpoints_and_monotonicity() {
    assert!((GrowthRateCalculator::rate(12) - 0.10).abs() < 1e-12);
    assert!((GrowthRateCalculator::rate(28) - 0.04).abs() < 1e-12);
    for weeks in 12..28 {
        assert!(GrowthRateCalculator::rate(weeks + 1) <= GrowthRateCalculator::rate(weeks));
    }
}

#[test]
fn test_beginner_marathon_scenario_reaches_twenty_miles() {
    let targets = PlanTargets::compute(&inputs(
        25.0,
        6.0,
        19,
        RaceDistance::Marathon,
        ExperienceLevel::Beginner,
    ));
    assert!(targets.longest_long_run() >= 20.0);
    assert!(targets
        .warnings
        .iter()
        .any(|w| matches!(w, PlanWarning::UnreachableTarget { .. })));
}

#[test]
fn test_half_marathon_scenario() {
    let race: RaceDistance = "Half Marathon".parse().unwrap();
    for level in ExperienceLevel::ALL {
        let targets = PlanTargets::compute(&inputs(20.0, 5.0, 16, race, level));
        assert!(targets.longest_long_run() >= 12.0, "{level}");
        assert!(targets.adjusted.peak_mileage <= 60.0, "{level}");
    }
}

#[test]
fn test_identical_inputs_are_deterministic() {
    let request = inputs(30.0, 8.0, 22, RaceDistance::TenK, ExperienceLevel::Advanced);
    assert_eq!(PlanTargets::compute(&request), PlanTargets::compute(&request));
}

#[test]
fn test_missing_field_is_fatal() {
    let draft: PlanInputsDraft = serde_json::from_str(
        r#"{"currentWeeklyMileage": 20, "currentLongRun": 5, "raceDistance": "Marathon", "experienceLevel": "beginner"}"#,
    )
    .unwrap();
    let error = PlanInputs::try_from(draft).unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
}
