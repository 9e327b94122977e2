// ABOUTME: Integration tests for the workout summary public API
// ABOUTME: Tests dispatch, summary computation, formatting, and error kinds end to end

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::io::Write;
use stride_tracker::{read_package, ErrorCode, SensorPackage, Summary, Workout, WorkoutType};

const TOLERANCE: f64 = 1e-9;

// === Dispatcher round-trip ===

#[test]
fn test_dispatcher_round_trip_matches_direct_construction() {
    let cases: Vec<(&str, Vec<f64>, Workout)> = vec![
        (
            "RUN",
            vec![15000.0, 1.0, 75.0],
            Workout::Running {
                action_count: 15000,
                duration_hours: 1.0,
                weight_kg: 75.0,
            },
        ),
        (
            "WLK",
            vec![9000.0, 1.0, 75.0, 180.0],
            Workout::RaceWalking {
                action_count: 9000,
                duration_hours: 1.0,
                weight_kg: 75.0,
                height_cm: 180.0,
            },
        ),
        (
            "SWM",
            vec![720.0, 1.0, 80.0, 25.0, 40.0],
            Workout::Swimming {
                action_count: 720,
                duration_hours: 1.0,
                weight_kg: 80.0,
                pool_length_m: 25.0,
                pool_laps: 40,
            },
        ),
    ];

    for (code, readings, direct) in cases {
        let dispatched = read_package(code, &readings).unwrap();
        assert_eq!(dispatched, direct, "dispatch mismatch for {code}");
        assert_eq!(
            dispatched.summary().unwrap(),
            direct.summary().unwrap(),
            "summary mismatch for {code}"
        );
    }
}

// === Reference summaries ===

#[test]
fn test_running_summary_reference_values() {
    let summary = read_package("RUN", &[15000.0, 1.0, 75.0])
        .unwrap()
        .summary()
        .unwrap();

    assert_eq!(summary.workout_type, WorkoutType::Running);
    assert!((summary.distance_km - 9.75).abs() < TOLERANCE);
    assert!((summary.mean_speed_kmh - 9.75).abs() < TOLERANCE);
    assert!((summary.calories - 699.75).abs() < TOLERANCE);
}

#[test]
fn test_race_walking_summary_reference_values() {
    let summary = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0])
        .unwrap()
        .summary()
        .unwrap();

    assert!((summary.distance_km - 5.85).abs() < TOLERANCE);
    assert!((summary.mean_speed_kmh - 5.85).abs() < TOLERANCE);
    assert!((summary.calories - 157.5).abs() < TOLERANCE);
}

#[test]
fn test_swimming_summary_reference_values() {
    let summary = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])
        .unwrap()
        .summary()
        .unwrap();

    assert!((summary.mean_speed_kmh - 1.0).abs() < TOLERANCE);
    assert!((summary.calories - 336.0).abs() < TOLERANCE);
}

// === Error kinds ===

#[test]
fn test_unknown_code_is_typed_error() {
    let error = read_package("XYZ", &[720.0, 1.0, 80.0]).unwrap_err();
    assert_eq!(error.code, ErrorCode::UnknownWorkoutType);
    assert!(error.message.contains("XYZ"));
}

#[test]
fn test_arity_mismatch_is_invalid_arguments() {
    let error = read_package("WLK", &[9000.0, 1.0, 75.0]).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidArguments);
}

#[test]
fn test_degenerate_inputs_are_invalid_input() {
    let zero_duration = read_package("RUN", &[15000.0, 0.0, 75.0])
        .unwrap()
        .summary()
        .unwrap_err();
    assert_eq!(zero_duration.code, ErrorCode::InvalidInput);

    let zero_height = read_package("WLK", &[9000.0, 1.0, 75.0, 0.0])
        .unwrap()
        .summary()
        .unwrap_err();
    assert_eq!(zero_height.code, ErrorCode::InvalidInput);
}

#[test]
fn test_failures_do_not_corrupt_other_entries() {
    let packages = vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("XYZ", vec![1.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
    ];

    let summaries: Vec<Summary> = packages
        .iter()
        .filter_map(|package| {
            read_package(&package.workout_type, &package.readings)
                .and_then(|workout| workout.summary())
                .ok()
        })
        .collect();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].workout_type, WorkoutType::Swimming);
    assert_eq!(summaries[1].workout_type, WorkoutType::Running);
}

// === Formatting ===

#[test]
fn test_summary_line_renders_three_decimals() {
    let line = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])
        .unwrap()
        .summary()
        .unwrap()
        .to_string();

    assert_eq!(
        line,
        "Workout type: Swimming; duration: 1.000 h; distance: 0.994 km; \
         mean speed: 1.000 km/h; calories burned: 336.000"
    );
}

#[test]
fn test_summary_line_for_running() {
    let line = read_package("RUN", &[15000.0, 1.0, 75.0])
        .unwrap()
        .summary()
        .unwrap()
        .to_string();

    assert_eq!(
        line,
        "Workout type: Running; duration: 1.000 h; distance: 9.750 km; \
         mean speed: 9.750 km/h; calories burned: 699.750"
    );
}

// === Package file parsing ===

#[test]
fn test_packages_parse_from_json_file() {
    let json = r#"[
        {"workout_type": "SWM", "readings": [720, 1, 80, 25, 40]},
        {"workout_type": "RUN", "readings": [15000, 1, 75]},
        {"workout_type": "WLK", "readings": [9000, 1, 75, 180]}
    ]"#;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let contents = std::fs::read_to_string(file.path()).unwrap();
    let packages: Vec<SensorPackage> = serde_json::from_str(&contents).unwrap();

    assert_eq!(packages.len(), 3);
    for package in &packages {
        let summary = read_package(&package.workout_type, &package.readings)
            .unwrap()
            .summary();
        assert!(summary.is_ok());
    }
}
