// ABOUTME: Command-line front end for computing plan targets and assembling generated plans
// ABOUTME: Prints plan documents to stdout; logs go to stderr
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Week table for a 19-week beginner marathon plan
//! stride-cli targets --weekly 25 --long-run 6 --weeks 19 --race marathon --level beginner
//!
//! # Same table as JSON
//! stride-cli targets --weekly 25 --long-run 6 --weeks 19 --race marathon --level beginner --format json
//!
//! # Training paces from a 25:00 5K
//! stride-cli paces --distance-meters 5000 --time-seconds 1500
//!
//! # Repair and enrich a generated skeleton
//! stride-cli assemble --weekly 25 --long-run 6 --weeks 19 --race marathon --level beginner \
//!     --skeleton weeks.json --paces paces.json --hard-days tue,thu --long-run-day sun
//! ```

use anyhow::{Context, Result};
use chrono::Weekday;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use stride_core::models::{
    ExperienceLevel, PaceSet, PlanInputs, RaceDistance, RacePerformance, SchedulePreferences,
    WeekSkeleton,
};
use stride_intelligence::{PaceProvider, PlanTargets, ProgressivePacing, VdotPaceProvider};
use stride_planner::config::PlannerConfig;
use stride_planner::generation::PlanGenerator;
use stride_planner::logging::LoggingConfig;
use stride_planner::storage::{save_plan, write_plan};
use stride_planner::workouts::WorkoutCatalogue;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "stride-cli",
    about = "Stride training-plan engine",
    long_about = "Compute week-by-week training targets and turn generated workout skeletons into validated plans."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Args)]
struct PlanArgs {
    /// Current weekly mileage (miles)
    #[arg(long)]
    weekly: f64,

    /// Current long run (miles)
    #[arg(long)]
    long_run: f64,

    /// Plan length (10-30 weeks)
    #[arg(long)]
    weeks: u32,

    /// Race distance: 5k, 10k, half, marathon
    #[arg(long)]
    race: RaceDistance,

    /// Experience level: beginner, intermediate, advanced
    #[arg(long)]
    level: ExperienceLevel,
}

impl PlanArgs {
    fn inputs(&self) -> Result<PlanInputs> {
        Ok(PlanInputs::builder()
            .current_weekly_mileage(self.weekly)
            .current_long_run(self.long_run)
            .total_weeks(self.weeks)
            .race_distance(self.race)
            .experience_level(self.level)
            .build()?)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Print the per-week target table
    Targets {
        #[command(flatten)]
        plan: PlanArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print training paces for a race result
    Paces {
        /// Race distance (meters)
        #[arg(long)]
        distance_meters: f64,

        /// Finishing time (seconds)
        #[arg(long)]
        time_seconds: f64,
    },

    /// List workout template tokens
    Catalogue,

    /// Repair and enrich a generated skeleton, then print the plan document
    Assemble {
        #[command(flatten)]
        plan: PlanArgs,

        /// JSON array of week skeletons
        #[arg(long)]
        skeleton: PathBuf,

        /// JSON object with `current` and `goal` pace sets
        #[arg(long)]
        paces: PathBuf,

        /// Comma-separated hard days, e.g. tue,thu
        #[arg(long, value_delimiter = ',', required = true)]
        hard_days: Vec<Weekday>,

        /// Long-run day
        #[arg(long)]
        long_run_day: Weekday,

        /// Write the plan here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Pace file layout for `assemble`
#[derive(Deserialize)]
struct PaceFile {
    current: PaceSet,
    goal: PaceSet,
}

fn print_targets(targets: &PlanTargets, format: OutputFormat) -> Result<()> {
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, targets)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(
                out,
                "peak {:.0} mi/week, long run max {:.0} mi",
                targets.adjusted.peak_mileage, targets.adjusted.long_run_max
            )?;
            writeln!(
                out,
                "{:>4}  {:<6} {:>6} {:>5} {:>5} {:>5} {:>5}",
                "week", "phase", "miles", "long", "tempo", "intv", "hill"
            )?;
            for week in &targets.weeks {
                writeln!(
                    out,
                    "{:>4}  {:<6} {:>6.0} {:>5.0} {:>5.0} {:>5.0} {:>5.0}",
                    week.week_number,
                    week.phase.to_string(),
                    week.weekly_mileage,
                    week.long_run,
                    week.tempo_distance,
                    week.interval_distance,
                    week.hill_distance
                )?;
            }
            for warning in &targets.warnings {
                writeln!(out, "warning: {warning}")?;
            }
        }
    }
    Ok(())
}

fn print_paces(distance_meters: f64, time_seconds: f64) -> Result<()> {
    let paces = VdotPaceProvider::default().pace_set(&RacePerformance {
        distance_meters,
        time_seconds,
    })?;
    let mut out = io::stdout().lock();
    writeln!(
        out,
        "easy      {} - {}",
        PaceSet::format_pace(paces.easy.min),
        PaceSet::format_pace(paces.easy.max)
    )?;
    writeln!(out, "marathon  {}", PaceSet::format_pace(paces.marathon.pace))?;
    writeln!(out, "threshold {}", PaceSet::format_pace(paces.threshold.pace))?;
    writeln!(out, "interval  {}", PaceSet::format_pace(paces.interval.pace))?;
    Ok(())
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

fn assemble(
    plan: &PlanArgs,
    skeleton: &Path,
    paces: &Path,
    preferences: SchedulePreferences,
    output: Option<&Path>,
) -> Result<()> {
    let inputs = plan.inputs()?;
    let weeks: Vec<WeekSkeleton> = read_json(skeleton)?;
    let pace_file: PaceFile = read_json(paces)?;
    let config = *PlannerConfig::global();

    let generated = PlanGenerator::new(config, preferences).assemble(
        &inputs,
        weeks,
        ProgressivePacing::new(pace_file.current, pace_file.goal),
    )?;

    match output {
        Some(path) => save_plan(&generated, config.max_document_bytes, path)?,
        None => write_plan(&generated, config.max_document_bytes, io::stdout().lock())?,
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    match cli.command {
        Command::Targets { plan, format } => {
            let targets = PlanTargets::compute(&plan.inputs()?);
            print_targets(&targets, format)?;
        }
        Command::Paces {
            distance_meters,
            time_seconds,
        } => print_paces(distance_meters, time_seconds)?,
        Command::Catalogue => {
            writeln!(io::stdout().lock(), "{}", WorkoutCatalogue::listing())?;
        }
        Command::Assemble {
            plan,
            skeleton,
            paces,
            hard_days,
            long_run_day,
            output,
        } => {
            let preferences = SchedulePreferences::new(hard_days, long_run_day);
            assemble(&plan, &skeleton, &paces, preferences, output.as_deref())?;
            info!("plan assembled");
        }
    }
    Ok(())
}
