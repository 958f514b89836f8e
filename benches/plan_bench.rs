// ABOUTME: Criterion benchmarks for plan target computation, repair, and assembly
// ABOUTME: Measures the synchronous pipeline across plan lengths and race distances
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Criterion benchmarks for the planning pipeline.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::Weekday;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stride_core::models::{
    ExperienceLevel, PaceRange, PaceSet, PlanInputs, RaceDistance, SchedulePreferences,
    TargetPace, WeekSkeleton,
};
use stride_intelligence::{PlanTargets, ProgressivePacing};
use stride_planner::config::PlannerConfig;
use stride_planner::generation::{PlanGenerator, SkeletonParser};

const WEEK_TEXT: &str = "\
Monday: Rest
Tuesday: [WORKOUT_ID: tempo_1] Cruise Intervals - 6 miles with 3 x 1 mile at threshold
Wednesday: [WORKOUT_ID: easy_0] Easy Run - 5 miles
Thursday: [WORKOUT_ID: interval_0] 800m Repeats - 5 miles
Friday: Rest
Saturday: [WORKOUT_ID: easy_2] Easy Run with Strides - 4 miles
Sunday: [WORKOUT_ID: long_run_0] Steady Long Run - 12 miles
";

fn inputs(weeks: u32, race: RaceDistance) -> PlanInputs {
    PlanInputs::builder()
        .current_weekly_mileage(25.0)
        .current_long_run(6.0)
        .total_weeks(weeks)
        .race_distance(race)
        .experience_level(ExperienceLevel::Intermediate)
        .build()
        .unwrap()
}

fn pace_set(threshold: f64) -> PaceSet {
    PaceSet {
        easy: PaceRange {
            min: threshold + 90.0,
            max: threshold + 150.0,
        },
        threshold: TargetPace { pace: threshold },
        interval: TargetPace {
            pace: threshold - 30.0,
        },
        marathon: TargetPace {
            pace: threshold + 30.0,
        },
    }
}

fn skeleton(weeks: u32) -> Vec<WeekSkeleton> {
    (1..=weeks)
        .map(|week| SkeletonParser::parse_week(week, WEEK_TEXT).unwrap())
        .collect()
}

fn bench_plan_targets(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_targets");
    for race in RaceDistance::ALL {
        group.bench_with_input(BenchmarkId::new("compute_20_weeks", race), &race, |b, race| {
            let inputs = inputs(20, *race);
            b.iter(|| PlanTargets::compute(black_box(&inputs)));
        });
    }
    group.finish();
}

fn bench_skeleton_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("skeleton_parser");
    group.bench_function("parse_week", |b| {
        b.iter(|| SkeletonParser::parse_week(black_box(3), black_box(WEEK_TEXT)));
    });
    group.finish();
}

fn bench_plan_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_assembly");
    let generator = PlanGenerator::new(
        PlannerConfig::default(),
        SchedulePreferences::new(vec![Weekday::Tue, Weekday::Thu], Weekday::Sun),
    );
    let pacing = ProgressivePacing::new(pace_set(480.0), pace_set(450.0));

    for weeks in [10_u32, 20, 30] {
        let inputs = inputs(weeks, RaceDistance::Marathon);
        let weeks_skeleton = skeleton(weeks);
        group.throughput(Throughput::Elements(u64::from(weeks)));
        group.bench_with_input(
            BenchmarkId::new("assemble_marathon", weeks),
            &weeks_skeleton,
            |b, weeks_skeleton| {
                b.iter(|| {
                    generator.assemble(
                        black_box(&inputs),
                        weeks_skeleton.clone(),
                        black_box(pacing),
                    )
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_plan_targets,
    bench_skeleton_parsing,
    bench_plan_assembly
);
criterion_main!(benches);
