// ABOUTME: Unified error handling system for workout summary calculation
// ABOUTME: Defines standard error codes and the AppError type used across all modules

//! # Unified Error Handling System
//!
//! Centralized error handling for the stride tracker. Defines standard error
//! types and error codes so that dispatch failures, malformed readings, and
//! degenerate inputs surface as distinct, matchable error kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Dispatch (1000-1999)
    /// Workout-type code outside the recognized set (`SWM`, `RUN`, `WLK`)
    #[serde(rename = "UNKNOWN_WORKOUT_TYPE")]
    UnknownWorkoutType = 1000,

    // Validation (3000-3999)
    /// Readings list does not match the variant's constructor shape
    #[serde(rename = "INVALID_ARGUMENTS")]
    InvalidArguments = 3000,
    /// Readings parsed but carry degenerate values (zero duration, zero height)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3001,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Data serialization/deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9001,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UnknownWorkoutType => "The workout-type code is not recognized",
            Self::InvalidArguments => "The readings do not match the workout's expected fields",
            Self::InvalidInput => "The provided input is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Unknown workout-type code, carrying the offending code string
    #[must_use]
    pub fn unknown_workout_type(code: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::UnknownWorkoutType,
            format!(
                "Unknown workout type: '{}'. Valid codes: SWM, RUN, WLK",
                code.into()
            ),
        )
    }

    /// Readings list shape mismatch
    #[must_use]
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidArguments, message)
    }

    /// Degenerate or out-of-range input value
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Internal error
    #[must_use]
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
