// ABOUTME: Formula coefficients and unit constants organized by workout type
// ABOUTME: Pure data constants for the distance, speed, and calorie formulas

//! Constants module
//!
//! Numeric coefficients for the per-variant workout formulas, grouped by
//! domain rather than scattered through the calculation code. The calorie
//! coefficients are empirical fitness-tracker values and are preserved
//! exactly as calibrated.

/// Unit conversion constants
pub mod units {
    /// Meters per kilometer
    pub const METERS_PER_KM: f64 = 1000.0;
    /// Minutes per hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
}

/// Running formula coefficients
pub mod running {
    /// Distance covered by one step, in meters
    pub const STEP_LENGTH_M: f64 = 0.65;
    /// Multiplier applied to mean speed in the calorie formula
    pub const SPEED_FACTOR: f64 = 18.0;
    /// Offset subtracted from the scaled mean speed in the calorie formula
    pub const SPEED_OFFSET: f64 = 20.0;
}

/// Race-walking formula coefficients
pub mod race_walking {
    /// Distance covered by one step, in meters
    pub const STEP_LENGTH_M: f64 = 0.65;
    /// Multiplier applied to body weight in the calorie formula
    pub const WEIGHT_FACTOR: f64 = 0.035;
    /// Multiplier applied to the speed-squared-over-height term
    pub const SPEED_HEIGHT_FACTOR: f64 = 0.029;
}

/// Swimming formula coefficients
pub mod swimming {
    /// Distance covered by one stroke, in meters
    pub const STROKE_LENGTH_M: f64 = 1.38;
    /// Offset added to mean speed in the calorie formula
    pub const SPEED_OFFSET: f64 = 1.1;
    /// Multiplier applied to body weight in the calorie formula
    pub const WEIGHT_FACTOR: f64 = 2.0;
}
