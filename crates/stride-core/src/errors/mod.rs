// ABOUTME: Unified error handling with standard error codes for plan generation
// ABOUTME: Defines AppError, ErrorCode, and the AppResult alias used across all crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns [`AppResult`]. Errors carry a
//! stable [`ErrorCode`] so callers can decide between aborting (configuration and
//! input errors), retrying (generation failures), or rejecting a finished plan
//! (persistence constraints).
//!
//! Non-fatal advisories are not errors; see [`crate::models::PlanWarning`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input is structurally invalid
    InvalidInput = 3000,
    /// A mandatory plan input was not supplied
    MissingRequiredField = 3001,
    /// Text could not be parsed into the expected format
    InvalidFormat = 3002,
    /// A numeric input lies outside its accepted range
    ValueOutOfRange = 3003,
    /// A workout token does not address any catalogue template
    UnknownWorkoutToken = 3004,

    // External collaborators (5000-5999)
    /// The generative text collaborator returned empty or unusable output
    GenerationFailed = 5000,
    /// The pace collaborator could not produce a pace set
    PaceUnavailable = 5001,

    // Configuration (6000-6999)
    /// Engine configuration is invalid
    ConfigInvalid = 6002,

    // Output (7000-7999)
    /// The finished plan violates a storage constraint
    PersistenceConstraint = 7000,

    // Internal (9000-9999)
    /// Unexpected internal failure
    InternalError = 9000,
    /// Serialization or deserialization failed
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required plan input is missing",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::UnknownWorkoutToken => "The workout token does not match any template",
            Self::GenerationFailed => "The workout generator returned unusable output",
            Self::PaceUnavailable => "Training paces could not be derived",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::PersistenceConstraint => "The plan violates a storage constraint",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether a caller may reasonably retry the whole generation request
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::GenerationFailed | Self::UnknownWorkoutToken | Self::InvalidFormat
        )
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured details for auditability
    pub details: serde_json::Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// A mandatory plan input was absent (fatal configuration error)
    pub fn missing_field(field: &'static str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Missing required plan input: {field}"),
        )
        .with_details(serde_json::json!({ "field": field }))
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Invalid textual format
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Value outside the accepted range
    pub fn out_of_range(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
            .with_details(serde_json::json!({ "field": field }))
    }

    /// Workout token that does not resolve to a template
    pub fn unknown_token(token: impl Into<String>) -> Self {
        let token = token.into();
        Self::new(
            ErrorCode::UnknownWorkoutToken,
            format!("Unknown workout token '{token}'"),
        )
        .with_details(serde_json::json!({ "token": token }))
    }

    /// Generator output was empty or unparseable
    pub fn generation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::GenerationFailed, message)
    }

    /// Pace collaborator failure
    pub fn pace_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PaceUnavailable, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Storage constraint violation
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PersistenceConstraint, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_carries_field_name() {
        let error = AppError::missing_field("total_weeks");
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.details["field"], "total_weeks");
        assert!(error.to_string().contains("total_weeks"));
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::UnknownWorkoutToken).unwrap();
        assert_eq!(json, "\"UNKNOWN_WORKOUT_TOKEN\"");
    }

    #[test]
    fn test_retryable_codes() {
        assert!(ErrorCode::GenerationFailed.is_retryable());
        assert!(!ErrorCode::MissingRequiredField.is_retryable());
        assert!(!ErrorCode::PersistenceConstraint.is_retryable());
    }
}
