// ABOUTME: Core data models for workout summary calculation
// ABOUTME: Defines WorkoutType codes, the SensorPackage input, and the Summary output

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enumeration of supported workout types
///
/// Each type maps to a fixed wire code carried by the sensor package
/// (`RUN`, `WLK`, `SWM`) and selects one formula set for distance, mean
/// speed, and calorie computation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Running workout
    Running,
    /// Race-walking workout
    RaceWalking,
    /// Swimming workout
    Swimming,
}

impl WorkoutType {
    /// Get the wire code used by sensor packages
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::RaceWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Get the human-readable name used in summary lines
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::RaceWalking => "RaceWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Number of readings the variant's constructor expects, in positional order
    #[must_use]
    pub const fn expected_readings(&self) -> usize {
        match self {
            Self::Running => 3,
            Self::RaceWalking => 4,
            Self::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WorkoutType {
    type Err = AppError;

    /// Parse a wire code. Codes are matched exactly; anything outside
    /// {`SWM`, `RUN`, `WLK`} is `UnknownWorkoutType`, never a default variant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::RaceWalking),
            "SWM" => Ok(Self::Swimming),
            other => Err(AppError::unknown_workout_type(other)),
        }
    }
}

/// One raw input entry: a workout-type code plus the ordered numeric readings
/// matching that variant's constructor order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorPackage {
    /// Workout-type wire code (`SWM`, `RUN`, `WLK`)
    pub workout_type: String,
    /// Positional numeric readings for the target variant
    pub readings: Vec<f64>,
}

impl SensorPackage {
    /// Create a sensor package from a code and readings
    #[must_use]
    pub fn new(workout_type: impl Into<String>, readings: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            readings,
        }
    }
}

/// Computed summary for one workout entry
///
/// Purely a formatted readout; produced once per sensor package and carries
/// no further lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    /// Workout type the summary was computed for
    pub workout_type: WorkoutType,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Mean speed in kilometers per hour
    pub mean_speed_kmh: f64,
    /// Calories burned in kilocalories
    pub calories: f64,
}

impl fmt::Display for Summary {
    /// Render the fixed human-readable summary line.
    ///
    /// All four numeric fields render with exactly 3 decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; duration: {:.3} h; distance: {:.3} km; mean speed: {:.3} km/h; calories burned: {:.3}",
            self.workout_type, self.duration_hours, self.distance_km, self.mean_speed_kmh, self.calories
        )
    }
}
