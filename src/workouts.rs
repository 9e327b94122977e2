// ABOUTME: Workout variants with per-variant distance, speed, and calorie formulas
// ABOUTME: Implements the sensor package dispatcher mapping wire codes to variants

use crate::constants::{race_walking, running, swimming, units};
use crate::errors::{AppError, AppResult};
use crate::models::{Summary, WorkoutType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Workout calculation variant
///
/// One variant per supported workout type, each holding the raw sensor
/// readings it needs and computing distance, mean speed, and calories with
/// its own formula set:
///
/// - `Running`: step-based distance, calories from scaled mean speed
/// - `RaceWalking`: step-based distance, calories from weight and a
///   speed-squared-over-height term
/// - `Swimming`: stroke-based distance, mean speed derived from pool length
///   and lap count instead of the generic distance formula
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Workout {
    /// Running workout
    Running {
        /// Number of steps recorded by the sensor
        action_count: u32,
        /// Workout duration in hours
        duration_hours: f64,
        /// Athlete body weight in kg
        weight_kg: f64,
    },

    /// Race-walking workout
    RaceWalking {
        /// Number of steps recorded by the sensor
        action_count: u32,
        /// Workout duration in hours
        duration_hours: f64,
        /// Athlete body weight in kg
        weight_kg: f64,
        /// Athlete height in cm
        height_cm: f64,
    },

    /// Swimming workout
    Swimming {
        /// Number of strokes recorded by the sensor
        action_count: u32,
        /// Workout duration in hours
        duration_hours: f64,
        /// Athlete body weight in kg
        weight_kg: f64,
        /// Pool length in meters
        pool_length_m: f64,
        /// Number of pool laps completed
        pool_laps: u32,
    },
}

impl Workout {
    /// Get the workout type of this variant
    #[must_use]
    pub const fn workout_type(&self) -> WorkoutType {
        match self {
            Self::Running { .. } => WorkoutType::Running,
            Self::RaceWalking { .. } => WorkoutType::RaceWalking,
            Self::Swimming { .. } => WorkoutType::Swimming,
        }
    }

    /// Workout duration in hours
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        match self {
            Self::Running { duration_hours, .. }
            | Self::RaceWalking { duration_hours, .. }
            | Self::Swimming { duration_hours, .. } => *duration_hours,
        }
    }

    const fn action_count(&self) -> u32 {
        match self {
            Self::Running { action_count, .. }
            | Self::RaceWalking { action_count, .. }
            | Self::Swimming { action_count, .. } => *action_count,
        }
    }

    const fn weight_kg(&self) -> f64 {
        match self {
            Self::Running { weight_kg, .. }
            | Self::RaceWalking { weight_kg, .. }
            | Self::Swimming { weight_kg, .. } => *weight_kg,
        }
    }

    /// Distance per recorded action (step or stroke), in meters
    const fn action_length_m(&self) -> f64 {
        match self {
            Self::Running { .. } => running::STEP_LENGTH_M,
            Self::RaceWalking { .. } => race_walking::STEP_LENGTH_M,
            Self::Swimming { .. } => swimming::STROKE_LENGTH_M,
        }
    }

    /// Distance covered in kilometers
    ///
    /// `action_count x length_per_action / 1000` for every variant; only the
    /// per-action length differs (0.65 m steps, 1.38 m strokes).
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        f64::from(self.action_count()) * self.action_length_m() / units::METERS_PER_KM
    }

    /// Mean speed in km/h
    ///
    /// Running and race-walking derive speed from the step distance. Swimming
    /// computes it independently from pool length and lap count; its distance
    /// and speed are deliberately not derived from one another.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `duration_hours` is not positive.
    pub fn mean_speed_kmh(&self) -> AppResult<f64> {
        let duration_hours = self.duration_hours();
        if duration_hours <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "duration_hours must be positive, got {duration_hours}"
            )));
        }

        match self {
            Self::Running { .. } | Self::RaceWalking { .. } => {
                Ok(self.distance_km() / duration_hours)
            }
            Self::Swimming {
                pool_length_m,
                pool_laps,
                ..
            } => Ok(pool_length_m * f64::from(*pool_laps) / units::METERS_PER_KM / duration_hours),
        }
    }

    /// Calories burned in kcal
    ///
    /// Each variant has a distinct empirical formula; see [`Workout::formula`]
    /// for the exact expressions.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `duration_hours` is not positive,
    /// or if a race-walking record carries `height_cm == 0`.
    pub fn calories_kcal(&self) -> AppResult<f64> {
        let mean_speed = self.mean_speed_kmh()?;
        let weight_kg = self.weight_kg();

        match self {
            Self::Running { duration_hours, .. } => Ok(running::SPEED_FACTOR
                .mul_add(mean_speed, -running::SPEED_OFFSET)
                * weight_kg
                / units::METERS_PER_KM
                * duration_hours
                * units::MINUTES_PER_HOUR),
            Self::RaceWalking {
                duration_hours,
                height_cm,
                ..
            } => {
                if *height_cm == 0.0 {
                    return Err(AppError::invalid_input(
                        "height_cm must be non-zero for race-walking".to_owned(),
                    ));
                }
                // The floor here matches the calibrated formula; it zeroes the
                // speed term whenever speed² < height.
                let speed_height_term = (mean_speed * mean_speed / height_cm).floor();
                let calories_per_minute = (race_walking::SPEED_HEIGHT_FACTOR * weight_kg)
                    .mul_add(
                        speed_height_term,
                        race_walking::WEIGHT_FACTOR * weight_kg,
                    );
                Ok(calories_per_minute * duration_hours * units::MINUTES_PER_HOUR)
            }
            Self::Swimming { .. } => {
                Ok((mean_speed + swimming::SPEED_OFFSET) * swimming::WEIGHT_FACTOR * weight_kg)
            }
        }
    }

    /// Compute the full summary for this workout
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` on degenerate readings (see
    /// [`Workout::mean_speed_kmh`] and [`Workout::calories_kcal`]).
    pub fn summary(&self) -> AppResult<Summary> {
        Ok(Summary {
            workout_type: self.workout_type(),
            duration_hours: self.duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh()?,
            calories: self.calories_kcal()?,
        })
    }

    /// Get the calorie formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::Running { .. } => "(18 x speed - 20) x weight / 1000 x duration x 60",
            Self::RaceWalking { .. } => {
                "(0.035 x weight + floor(speed² / height) x 0.029 x weight) x duration x 60"
            }
            Self::Swimming { .. } => "(speed + 1.1) x 2 x weight",
        }
    }
}

/// Read one sensor package: map the workout-type code to a variant and
/// construct it from the positional readings.
///
/// Reading order per code:
///
/// - `RUN`: `[action_count, duration_hours, weight_kg]`
/// - `WLK`: `[action_count, duration_hours, weight_kg, height_cm]`
/// - `SWM`: `[action_count, duration_hours, weight_kg, pool_length_m, pool_laps]`
///
/// # Errors
///
/// - `AppError::UnknownWorkoutType` when the code is outside {`SWM`, `RUN`, `WLK`}
/// - `AppError::InvalidArguments` when the readings count does not match the
///   variant, or a count field is not a non-negative integer
pub fn read_package(workout_type: &str, readings: &[f64]) -> AppResult<Workout> {
    let workout_type: WorkoutType = workout_type.parse()?;

    debug!(
        workout_type = workout_type.code(),
        readings = readings.len(),
        "dispatching sensor package"
    );

    let expected = workout_type.expected_readings();
    if readings.len() != expected {
        return Err(AppError::invalid_arguments(format!(
            "{} expects {expected} readings, got {}",
            workout_type.code(),
            readings.len()
        )));
    }

    let action_count = count_reading(readings[0], "action_count")?;
    let duration_hours = readings[1];
    let weight_kg = readings[2];

    match workout_type {
        WorkoutType::Running => Ok(Workout::Running {
            action_count,
            duration_hours,
            weight_kg,
        }),
        WorkoutType::RaceWalking => Ok(Workout::RaceWalking {
            action_count,
            duration_hours,
            weight_kg,
            height_cm: readings[3],
        }),
        WorkoutType::Swimming => Ok(Workout::Swimming {
            action_count,
            duration_hours,
            weight_kg,
            pool_length_m: readings[3],
            pool_laps: count_reading(readings[4], "pool_laps")?,
        }),
    }
}

/// Validate a reading that must be a non-negative integer count
fn count_reading(value: f64, field: &str) -> AppResult<u32> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(AppError::invalid_arguments(format!(
            "{field} must be a non-negative integer, got {value}"
        )));
    }
    Ok(value as u32)
}
