// ABOUTME: Tests for environment-driven planner and logging configuration
// ABOUTME: Serialized because each test mutates process environment variables
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use stride_planner::config::{ConfigError, PlannerConfig};
use stride_planner::logging::{LogFormat, LoggingConfig};

const PLANNER_VARS: [&str; 9] = [
    "STRIDE_MILEAGE_TOLERANCE_MILES",
    "STRIDE_MIN_RESCALE_RATIO",
    "STRIDE_MAX_RESCALE_RATIO",
    "STRIDE_LONG_RUN_TOLERANCE_MILES",
    "STRIDE_MIN_WORKOUT_MILES",
    "STRIDE_SYNTHESIZED_LONG_RUN_CAP_MILES",
    "STRIDE_QUALITY_DEFAULT_MILES",
    "STRIDE_EASY_DEFAULT_MILES",
    "STRIDE_MAX_DOCUMENT_BYTES",
];

fn clear_planner_vars() {
    for name in PLANNER_VARS {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_planner_vars();
    let config = PlannerConfig::from_env().unwrap();
    assert_eq!(config, PlannerConfig::default());
    assert!((config.fixer.mileage_tolerance_miles - 2.0).abs() < f64::EPSILON);
    assert!((config.fixer.min_rescale_ratio - 0.7).abs() < f64::EPSILON);
    assert!((config.fixer.max_rescale_ratio - 1.3).abs() < f64::EPSILON);
    assert!((config.distances.quality_miles - 4.0).abs() < f64::EPSILON);
    assert!((config.distances.easy_miles - 3.0).abs() < f64::EPSILON);
    assert_eq!(config.max_document_bytes, 1_048_576);
}

#[test]
#[serial]
fn test_environment_overrides_apply() {
    clear_planner_vars();
    env::set_var("STRIDE_MAX_RESCALE_RATIO", "1.5");
    env::set_var("STRIDE_EASY_DEFAULT_MILES", " 4 ");
    env::set_var("STRIDE_MAX_DOCUMENT_BYTES", "2048");
    let config = PlannerConfig::from_env().unwrap();
    clear_planner_vars();

    assert!((config.fixer.max_rescale_ratio - 1.5).abs() < f64::EPSILON);
    assert!((config.distances.easy_miles - 4.0).abs() < f64::EPSILON);
    assert_eq!(config.max_document_bytes, 2048);
}

#[test]
#[serial]
fn test_unparseable_value_is_rejected() {
    clear_planner_vars();
    env::set_var("STRIDE_MIN_WORKOUT_MILES", "two");
    let error = PlannerConfig::from_env().unwrap_err();
    clear_planner_vars();
    assert!(matches!(error, ConfigError::Parse(message) if message.contains("STRIDE_MIN_WORKOUT_MILES")));
}

#[test]
#[serial]
fn test_inverted_rescale_band_is_rejected() {
    clear_planner_vars();
    env::set_var("STRIDE_MIN_RESCALE_RATIO", "1.0");
    env::set_var("STRIDE_MAX_RESCALE_RATIO", "1.0");
    let error = PlannerConfig::from_env().unwrap_err();
    clear_planner_vars();
    assert!(matches!(error, ConfigError::InvalidRange(_)));
}

#[test]
#[serial]
fn test_zero_document_limit_is_rejected() {
    clear_planner_vars();
    env::set_var("STRIDE_MAX_DOCUMENT_BYTES", "0");
    let error = PlannerConfig::from_env().unwrap_err();
    clear_planner_vars();
    assert!(matches!(error, ConfigError::ValueOutOfRange(_)));
}

#[test]
#[serial]
fn test_logging_config_from_environment() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("RUST_LOG", "debug");
    env::set_var("SERVICE_NAME", "stride-test");
    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("RUST_LOG");
    env::remove_var("SERVICE_NAME");

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, "debug");
    assert_eq!(config.service_name, "stride-test");
}

#[test]
#[serial]
fn test_unknown_log_format_falls_back_to_compact() {
    env::set_var("LOG_FORMAT", "xml");
    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    assert_eq!(config.format, LogFormat::Compact);
}
