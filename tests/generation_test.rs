// ABOUTME: End-to-end tests for plan generation with a scripted workout generator
// ABOUTME: Covers prompt flow, parse failures, repair results, enrichment, and storage output
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use async_trait::async_trait;
use chrono::Weekday;
use std::sync::atomic::{AtomicU32, Ordering};
use std::fs;
use std::sync::Mutex;
use stride_core::errors::{AppError, AppResult, ErrorCode};
use stride_core::models::{
    ExperienceLevel, PlanInputs, RaceDistance, RacePerformance, SchedulePreferences, WorkoutType,
};
use stride_intelligence::{ProgressivePacing, VdotPaceProvider};
use stride_planner::config::PlannerConfig;
use stride_planner::generation::{GeneratedPlan, PlanGenerator, WorkoutGenerator};
use stride_planner::storage::{save_plan, validate_for_storage};

const WEEK_TEXT: &str = "\
Monday: Rest
Tuesday: [WORKOUT_ID: tempo_0] Continuous Tempo - 5 miles with 3 miles at threshold
Wednesday: [WORKOUT_ID: easy_0] Easy Run - 4 miless conversational
Thursday: [WORKOUT_ID: interval_1] 1000m Repeats - 5 mi total
Friday: Rest
Saturday: [WORKOUT_ID: bike_0] Easy Spin - 5 equivalance miles
Sunday: [WORKOUT_ID: long_run_0] Steady Long Run - 10 miles
";

/// Returns the same week every time and remembers the prompts it saw
struct ScriptedGenerator {
    calls: AtomicU32,
    prompts: Mutex<Vec<String>>,
    text: &'static str,
}

impl ScriptedGenerator {
    fn new(text: &'static str) -> Self {
        Self {
            calls: AtomicU32::new(0),
            prompts: Mutex::new(Vec::new()),
            text,
        }
    }
}

#[async_trait]
impl WorkoutGenerator for ScriptedGenerator {
    async fn generate_week(&self, prompt: &str) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_owned());
        Ok(self.text.to_owned())
    }
}

struct FailingGenerator;

#[async_trait]
impl WorkoutGenerator for FailingGenerator {
    async fn generate_week(&self, _prompt: &str) -> AppResult<String> {
        Err(AppError::generation("upstream timed out"))
    }
}

fn inputs() -> PlanInputs {
    PlanInputs::builder()
        .current_weekly_mileage(25.0)
        .current_long_run(6.0)
        .total_weeks(12)
        .race_distance(RaceDistance::HalfMarathon)
        .experience_level(ExperienceLevel::Intermediate)
        .build()
        .unwrap()
}

fn pacing() -> ProgressivePacing {
    ProgressivePacing::from_performances(
        &VdotPaceProvider::default(),
        &RacePerformance {
            distance_meters: 5000.0,
            time_seconds: 1500.0,
        },
        &RacePerformance {
            distance_meters: 5000.0,
            time_seconds: 1380.0,
        },
    )
    .unwrap()
}

fn generator() -> PlanGenerator {
    PlanGenerator::new(
        PlannerConfig::default(),
        SchedulePreferences::new(vec![Weekday::Tue, Weekday::Thu], Weekday::Sun),
    )
}

async fn generated_plan() -> (GeneratedPlan, ScriptedGenerator) {
    let scripted = ScriptedGenerator::new(WEEK_TEXT);
    let plan = generator()
        .generate(&inputs(), pacing(), &scripted)
        .await
        .unwrap();
    (plan, scripted)
}

#[tokio::test]
async fn test_one_generator_call_per_week() {
    let (plan, scripted) = generated_plan().await;
    assert_eq!(scripted.calls.load(Ordering::SeqCst), 12);
    assert_eq!(plan.weeks.len(), 12);
    let prompts = scripted.prompts.lock().unwrap();
    assert!(prompts[0].contains("- Week: 1 (Base phase)"));
    assert!(prompts[11].contains("(Taper phase)"));
    assert!(prompts[0].contains("long_run_0:"));
}

#[tokio::test]
async fn test_generated_plan_matches_long_run_targets() {
    let (plan, _) = generated_plan().await;
    for (week, target) in plan.weeks.iter().zip(&plan.targets) {
        let long_runs: Vec<_> = week
            .workouts
            .iter()
            .filter(|w| w.workout.is_long_run())
            .collect();
        assert_eq!(long_runs.len(), 1, "week {}", week.week_number);
        assert_eq!(long_runs[0].workout.day, Weekday::Sun);
        assert!(
            (long_runs[0].workout.distance - target.long_run).abs() <= 1.0,
            "week {}: {} vs {}",
            week.week_number,
            long_runs[0].workout.distance,
            target.long_run
        );
    }
}

#[tokio::test]
async fn test_typos_are_fixed_and_distances_parsed() {
    let (plan, _) = generated_plan().await;
    let first = &plan.weeks[0];
    let wednesday = first
        .workouts
        .iter()
        .find(|w| w.workout.day == Weekday::Wed)
        .unwrap();
    assert_eq!(wednesday.workout.workout_type, WorkoutType::Easy);
    assert!(!wednesday.workout.description.contains("miless"));
    let saturday = first
        .workouts
        .iter()
        .find(|w| w.workout.day == Weekday::Sat)
        .unwrap();
    assert!(saturday.workout.description.contains("equivalence"));
    assert!(saturday.workout.distance > 0.0);
}

#[tokio::test]
async fn test_workouts_are_enriched_except_rest() {
    let (plan, _) = generated_plan().await;
    for week in &plan.weeks {
        for enriched in &week.workouts {
            if enriched.workout.is_rest() {
                assert!(enriched.full_workout_details.is_none());
            } else {
                let details = enriched.full_workout_details.as_ref().unwrap();
                assert!(!details.structure.is_empty());
                assert!((details.total_distance - enriched.workout.distance).abs() < 1e-9);
            }
        }
    }
}

#[tokio::test]
async fn test_paces_get_faster_through_the_plan() {
    let (plan, _) = generated_plan().await;
    let threshold = |week: usize| {
        plan.weeks[week]
            .workouts
            .iter()
            .find_map(|w| w.full_workout_details.as_ref())
            .unwrap()
            .paces
            .threshold
            .pace
    };
    assert!(threshold(11) < threshold(0));
}

#[tokio::test]
async fn test_empty_generator_output_fails_generation() {
    let scripted = ScriptedGenerator::new("  ");
    let error = generator()
        .generate(&inputs(), pacing(), &scripted)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::GenerationFailed);
    assert_eq!(scripted.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unknown_token_fails_generation() {
    let scripted = ScriptedGenerator::new("Tuesday: [WORKOUT_ID: fartlek_0] Fartlek - 5 miles");
    let error = generator()
        .generate(&inputs(), pacing(), &scripted)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::UnknownWorkoutToken);
}

#[tokio::test]
async fn test_generator_errors_propagate() {
    let error = generator()
        .generate(&inputs(), pacing(), &FailingGenerator)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::GenerationFailed);
    assert!(error.code.is_retryable());
}

#[tokio::test]
async fn test_generation_is_idempotent() {
    let (a, _) = generated_plan().await;
    let (b, _) = generated_plan().await;
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_plan_is_storable_and_saved() {
    let (plan, _) = generated_plan().await;
    let size = validate_for_storage(&plan, PlannerConfig::default().max_document_bytes).unwrap();
    assert!(size > 0);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.json");
    save_plan(&plan, size, &path).unwrap();
    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["weeks"].as_array().unwrap().len(), 12);
    assert_eq!(saved["inputs"]["total_weeks"], 12);

    let error = validate_for_storage(&plan, size - 1).unwrap_err();
    assert_eq!(error.code, ErrorCode::PersistenceConstraint);
}

#[test]
fn test_missing_week_in_skeleton_fails() {
    let error = generator()
        .assemble(&inputs(), Vec::new(), pacing())
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::GenerationFailed);
}
