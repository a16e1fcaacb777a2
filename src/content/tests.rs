//! Content domain: tests for tuning parsing and validation.

use std::path::Path;

use super::{
    TUNING_SCHEMA_VERSION, TuningFile, load_tuning, load_tuning_or_default, parse_tuning,
    validate_tuning,
};
use crate::movement::{AxisSmoothing, MovementConfig};

const SHIPPED_TUNING: &str = include_str!("../../assets/data/movement.ron");

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_tuning_matches_defaults() {
    let tuning = parse_tuning(SHIPPED_TUNING, "movement.ron").unwrap();
    assert_eq!(tuning, TuningFile::default());
}

#[test]
fn test_partial_tuning_falls_back_to_defaults() {
    let contents = r#"(
        schema_version: 1,
        movement: (
            jump_force: 18.0,
            dash_length: 0.2,
        ),
    )"#;
    let tuning = parse_tuning(contents, "partial.ron").unwrap();

    assert_eq!(tuning.movement.jump_force, 18.0);
    assert_eq!(tuning.movement.dash_length, 0.2);
    assert_eq!(tuning.movement.walk_speed, MovementConfig::default().walk_speed);
    assert_eq!(tuning.input, AxisSmoothing::default());
}

#[test]
fn test_input_smoothing_is_read() {
    let contents = r#"(
        schema_version: 1,
        input: (sensitivity: 10.0, snap: false),
    )"#;
    let tuning = parse_tuning(contents, "input.ron").unwrap();

    assert_eq!(tuning.input.sensitivity, 10.0);
    assert_eq!(tuning.input.gravity, AxisSmoothing::default().gravity);
    assert!(!tuning.input.snap);
}

#[test]
fn test_schema_mismatch_is_rejected() {
    let contents = format!("(schema_version: {})", TUNING_SCHEMA_VERSION + 1);
    let err = parse_tuning(&contents, "future.ron").unwrap_err();

    assert_eq!(err.file, "future.ron");
    assert!(err.message.contains("schema_version"));
}

#[test]
fn test_malformed_tuning_is_rejected() {
    let err = parse_tuning("(schema_version: 1, movement: (jump_force: ))", "broken.ron")
        .unwrap_err();
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_invalid_values_are_rejected() {
    let contents = r#"(
        schema_version: 1,
        movement: (dash_length: 0.0, walk_speed: -1.0),
    )"#;
    let err = parse_tuning(contents, "invalid.ron").unwrap_err();

    assert!(err.message.contains("movement.dash_length"));
    assert!(err.message.contains("movement.walk_speed"));
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_defaults_validate_cleanly() {
    assert!(validate_tuning(&TuningFile::default()).is_empty());
}

#[test]
fn test_validation_reports_each_field() {
    let mut tuning = TuningFile::default();
    tuning.movement.hang_time = -0.1;
    tuning.movement.jump_force = f32::NAN;
    tuning.input.gravity = 0.0;

    let issues = validate_tuning(&tuning);
    let fields: Vec<&str> = issues.iter().map(|i| i.field).collect();

    assert_eq!(
        fields,
        vec!["movement.jump_force", "movement.hang_time", "input.gravity"]
    );
    assert_eq!(issues[0].reason, "must be finite");
    assert_eq!(issues[1].reason, "must be >= 0");
    assert_eq!(issues[2].reason, "must be > 0");
}

#[test]
fn test_falloff_may_be_negative() {
    let mut tuning = TuningFile::default();
    tuning.movement.jump_velocity_falloff = -3.0;
    tuning.movement.dash_exit_vertical_cap = -1.0;

    assert!(validate_tuning(&tuning).is_empty());
}

// -----------------------------------------------------------------------------
// Loading tests
// -----------------------------------------------------------------------------

#[test]
fn test_missing_file_is_an_error() {
    let path = Path::new("assets/data/does_not_exist.ron");
    let err = load_tuning(path).unwrap_err();

    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let tuning = load_tuning_or_default(Path::new("assets/data/does_not_exist.ron"));
    assert_eq!(tuning, TuningFile::default());
}
