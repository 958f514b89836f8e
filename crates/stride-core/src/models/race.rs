// ABOUTME: Race distance, experience level, and quality workout type enumerations
// ABOUTME: Defines parsing and display implementations for onboarding-facing values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Target race distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaceDistance {
    /// 5 kilometres
    #[serde(rename = "5K", alias = "5k")]
    FiveK,
    /// 10 kilometres
    #[serde(rename = "10K", alias = "10k")]
    TenK,
    /// 21.1 kilometres
    #[serde(
        rename = "Half",
        alias = "Half Marathon",
        alias = "half_marathon",
        alias = "half"
    )]
    HalfMarathon,
    /// 42.2 kilometres
    #[serde(rename = "Marathon", alias = "marathon")]
    Marathon,
}

impl RaceDistance {
    /// All supported race distances, shortest first
    pub const ALL: [Self; 4] = [Self::FiveK, Self::TenK, Self::HalfMarathon, Self::Marathon];

    /// Race distance in meters
    #[must_use]
    pub const fn meters(self) -> f64 {
        match self {
            Self::FiveK => 5_000.0,
            Self::TenK => 10_000.0,
            Self::HalfMarathon => 21_097.5,
            Self::Marathon => 42_195.0,
        }
    }

    /// Display label used in prompts and reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FiveK => "5K",
            Self::TenK => "10K",
            Self::HalfMarathon => "Half Marathon",
            Self::Marathon => "Marathon",
        }
    }
}

impl fmt::Display for RaceDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RaceDistance {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "5k" => Ok(Self::FiveK),
            "10k" => Ok(Self::TenK),
            "half" | "half marathon" => Ok(Self::HalfMarathon),
            "marathon" | "full" | "full marathon" => Ok(Self::Marathon),
            _ => Err(AppError::invalid_input(format!(
                "Unknown race distance: '{s}'. Valid options: 5K, 10K, Half Marathon, Marathon"
            ))),
        }
    }
}

/// Runner experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// New to structured training
    Beginner,
    /// Has completed structured plans before
    Intermediate,
    /// High-volume, experienced racer
    Advanced,
}

impl ExperienceLevel {
    /// All experience levels
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(AppError::invalid_input(format!(
                "Unknown experience level: '{other}'. Valid options: beginner, intermediate, advanced"
            ))),
        }
    }
}

/// Quality workout kinds sized by the weekly projector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityType {
    /// Sustained threshold running
    Tempo,
    /// VO2max repeats
    Interval,
    /// Hill repeats
    Hill,
}

impl QualityType {
    /// All quality workout kinds
    pub const ALL: [Self; 3] = [Self::Tempo, Self::Interval, Self::Hill];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_race_distance_parsing_variants() {
        assert_eq!("5K".parse::<RaceDistance>().unwrap(), RaceDistance::FiveK);
        assert_eq!("10k".parse::<RaceDistance>().unwrap(), RaceDistance::TenK);
        assert_eq!(
            "Half Marathon".parse::<RaceDistance>().unwrap(),
            RaceDistance::HalfMarathon
        );
        assert_eq!(
            "half_marathon".parse::<RaceDistance>().unwrap(),
            RaceDistance::HalfMarathon
        );
        assert_eq!(
            "Marathon".parse::<RaceDistance>().unwrap(),
            RaceDistance::Marathon
        );
        assert!("ultra".parse::<RaceDistance>().is_err());
    }

    #[test]
    fn test_race_distance_serde_aliases() {
        let half: RaceDistance = serde_json::from_str("\"Half Marathon\"").unwrap();
        assert_eq!(half, RaceDistance::HalfMarathon);
        assert_eq!(serde_json::to_string(&RaceDistance::FiveK).unwrap(), "\"5K\"");
    }

    #[test]
    fn test_experience_level_round_trip_display() {
        for level in ExperienceLevel::ALL {
            assert_eq!(level.to_string().parse::<ExperienceLevel>().unwrap(), level);
        }
    }
}
