// ABOUTME: Workout summary calculator for running, race-walking, and swimming
// ABOUTME: Computes distance, mean speed, and calories from raw sensor packages

#![deny(unsafe_code)]

//! # Stride Tracker
//!
//! Library for computing fitness-tracker summaries from raw sensor readings.
//! Each sensor package carries a workout-type code (`SWM`, `RUN`, `WLK`) and an
//! ordered list of numeric readings; the library dispatches to the matching
//! workout variant and produces a [`models::Summary`] with distance, mean
//! speed, and calories burned.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Per-variant formula coefficients organized by workout type
//! - **models**: Workout type codes, sensor package input, and summary output
//! - **workouts**: The workout variants, their formulas, and the package dispatcher
//! - **logging**: Structured logging setup with level and format selection

/// Unified error handling system with standard error codes
pub mod errors;

/// Formula coefficients and unit constants organized by workout type
pub mod constants;

/// Core data models (`WorkoutType`, `SensorPackage`, `Summary`)
pub mod models;

/// Workout variants, per-variant formulas, and the sensor package dispatcher
pub mod workouts;

/// Logging configuration and structured logging setup
pub mod logging;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{SensorPackage, Summary, WorkoutType};
pub use workouts::{read_package, Workout};
