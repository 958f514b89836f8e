// ABOUTME: Validated workout tokens such as `tempo_2` that reference catalogue templates
// ABOUTME: Unknown categories and out-of-range indexes are rejected at the parse boundary
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use stride_core::errors::{AppError, AppResult};
use stride_core::models::WorkoutType;

use super::catalogue::WorkoutCatalogue;

/// Template family a token refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutCategory {
    /// Aerobic runs
    Easy,
    /// Threshold sessions
    Tempo,
    /// VO2max repeats
    Interval,
    /// Hill repeats
    Hill,
    /// Weekly long runs
    LongRun,
    /// Bike sessions counted in equivalence miles
    CrossTraining,
}

impl WorkoutCategory {
    /// Every category in catalogue order
    pub const ALL: [Self; 6] = [
        Self::Easy,
        Self::Tempo,
        Self::Interval,
        Self::Hill,
        Self::LongRun,
        Self::CrossTraining,
    ];

    /// Token prefix, e.g. `long_run`
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Tempo => "tempo",
            Self::Interval => "interval",
            Self::Hill => "hills",
            Self::LongRun => "long_run",
            Self::CrossTraining => "bike",
        }
    }

    /// Workout type produced by templates of this category
    #[must_use]
    pub const fn workout_type(self) -> WorkoutType {
        match self {
            Self::Easy => WorkoutType::Easy,
            Self::Tempo => WorkoutType::Tempo,
            Self::Interval => WorkoutType::Interval,
            Self::Hill => WorkoutType::Hill,
            Self::LongRun => WorkoutType::LongRun,
            Self::CrossTraining => WorkoutType::Bike,
        }
    }

    /// Category for a workout type; rest days have none
    #[must_use]
    pub const fn for_workout_type(workout_type: WorkoutType) -> Option<Self> {
        match workout_type {
            WorkoutType::Easy => Some(Self::Easy),
            WorkoutType::Tempo => Some(Self::Tempo),
            WorkoutType::Interval => Some(Self::Interval),
            WorkoutType::Hill => Some(Self::Hill),
            WorkoutType::LongRun => Some(Self::LongRun),
            WorkoutType::Bike => Some(Self::CrossTraining),
            WorkoutType::Rest => None,
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        let normalized = prefix.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "easy" | "recovery" => Some(Self::Easy),
            "tempo" | "threshold" => Some(Self::Tempo),
            "interval" | "intervals" => Some(Self::Interval),
            "hills" | "hill" => Some(Self::Hill),
            "long_run" | "longrun" | "long" => Some(Self::LongRun),
            "bike" | "cross_training" => Some(Self::CrossTraining),
            _ => None,
        }
    }
}

impl fmt::Display for WorkoutCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Position of a template inside its category, bounded by the catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateIndex(usize);

impl TemplateIndex {
    /// Validate `index` against the catalogue size for `category`
    ///
    /// # Errors
    ///
    /// Returns `UnknownWorkoutToken` when the index is out of range
    pub fn new(category: WorkoutCategory, index: usize) -> AppResult<Self> {
        let available = WorkoutCatalogue::templates(category).len();
        if index < available {
            Ok(Self(index))
        } else {
            Err(AppError::unknown_token(format!("{}_{index}", category.prefix()))
                .with_details(serde_json::json!({
                    "category": category.prefix(),
                    "index": index,
                    "available": available,
                })))
        }
    }

    /// Raw index
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// Reference to one catalogue template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkoutToken {
    /// Template family
    pub category: WorkoutCategory,
    /// Template within the family
    pub index: TemplateIndex,
}

impl WorkoutToken {
    /// Build a token from parts
    ///
    /// # Errors
    ///
    /// Returns `UnknownWorkoutToken` when the index is out of range
    pub fn new(category: WorkoutCategory, index: usize) -> AppResult<Self> {
        Ok(Self {
            category,
            index: TemplateIndex::new(category, index)?,
        })
    }

    /// First template of `category`
    #[must_use]
    pub const fn first(category: WorkoutCategory) -> Self {
        Self {
            category,
            index: TemplateIndex(0),
        }
    }

    /// Parse a `category_index` string such as `long_run_1`
    ///
    /// # Errors
    ///
    /// Returns `UnknownWorkoutToken` for malformed text, unknown categories,
    /// or indexes outside the catalogue
    pub fn parse(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();
        let (prefix, index) = trimmed
            .rsplit_once('_')
            .ok_or_else(|| AppError::unknown_token(trimmed))?;
        let category =
            WorkoutCategory::from_prefix(prefix).ok_or_else(|| AppError::unknown_token(trimmed))?;
        let index: usize = index
            .parse()
            .map_err(|_| AppError::unknown_token(trimmed))?;
        Self::new(category, index)
    }
}

impl FromStr for WorkoutToken {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for WorkoutToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.category.prefix(), self.index.get())
    }
}

impl Serialize for WorkoutToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WorkoutToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(DeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::errors::ErrorCode;

    #[test]
    fn test_parses_multi_word_category() {
        let token = WorkoutToken::parse("long_run_1").unwrap();
        assert_eq!(token.category, WorkoutCategory::LongRun);
        assert_eq!(token.index.get(), 1);
        assert_eq!(token.to_string(), "long_run_1");
    }

    #[test]
    fn test_hills_prefix() {
        let token: WorkoutToken = "hills_0".parse().unwrap();
        assert_eq!(token.category.workout_type(), WorkoutType::Hill);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = WorkoutToken::parse("swim_0").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownWorkoutToken);
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let err = WorkoutToken::parse("tempo_99").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownWorkoutToken);
        assert!(WorkoutToken::parse("tempo").is_err());
        assert!(WorkoutToken::parse("tempo_x").is_err());
    }

    #[test]
    fn test_rest_has_no_category() {
        assert!(WorkoutCategory::for_workout_type(WorkoutType::Rest).is_none());
        for category in WorkoutCategory::ALL {
            assert_eq!(
                WorkoutCategory::for_workout_type(category.workout_type()),
                Some(category)
            );
        }
    }
}
