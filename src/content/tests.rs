//! Content domain: tests for locomotion tuning parsing and validation.

use std::path::Path;

use bevy::prelude::*;

use super::{
    CONTENT_DIR, ContentPlugin, LOCOMOTION_SCHEMA_VERSION, LocomotionDef, load_locomotion, parse_locomotion,
    validate_locomotion,
};
use crate::movement::{MovementTuning, SpeedRestore};

fn def() -> LocomotionDef {
    LocomotionDef {
        schema_version: LOCOMOTION_SCHEMA_VERSION,
        speed: 2.0,
        rotation_speed: 120.0,
        jump_force: 5.0,
        crouch_speed_multiplier: 0.5,
        sprint_speed_multiplier: 5.0,
        move_threshold: 0.1,
        speed_restore: SpeedRestore::Legacy,
    }
}

#[test]
fn test_shipped_tuning_matches_defaults() {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join(CONTENT_DIR);
    let tuning = load_locomotion(&base).unwrap();
    assert_eq!(tuning, MovementTuning::default());
}

#[test]
fn test_parse_full_file() {
    let tuning = parse_locomotion(
        "inline.ron",
        r#"(
            schema_version: 1,
            speed: 3.0,
            rotation_speed: 90.0,
            jump_force: 6.5,
            crouch_speed_multiplier: 0.4,
            sprint_speed_multiplier: 3.0,
            move_threshold: 0.2,
            speed_restore: SprintAware,
        )"#,
    )
    .unwrap();

    assert_eq!(tuning.speed, 3.0);
    assert_eq!(tuning.rotation_speed, 90.0);
    assert_eq!(tuning.jump_force, 6.5);
    assert_eq!(tuning.crouch_speed_multiplier, 0.4);
    assert_eq!(tuning.sprint_speed_multiplier, 3.0);
    assert_eq!(tuning.move_threshold, 0.2);
    assert_eq!(tuning.speed_restore, SpeedRestore::SprintAware);
}

#[test]
fn test_optional_fields_fall_back_to_defaults() {
    let tuning = parse_locomotion(
        "inline.ron",
        r#"(
            schema_version: 1,
            speed: 2.0,
            rotation_speed: 120.0,
            jump_force: 5.0,
            crouch_speed_multiplier: 0.5,
            sprint_speed_multiplier: 5.0,
        )"#,
    )
    .unwrap();

    assert_eq!(tuning, MovementTuning::default());
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_locomotion("broken.ron", "(speed: )").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
}

#[test]
fn test_valid_definition_has_no_errors() {
    assert!(validate_locomotion(&def()).is_empty());
}

#[test]
fn test_negative_multiplier_is_rejected() {
    let errors = validate_locomotion(&LocomotionDef {
        crouch_speed_multiplier: -0.5,
        ..def()
    });
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "crouch_speed_multiplier");
    assert_eq!(errors[0].reason, "is negative");
}

#[test]
fn test_non_finite_and_schema_errors_are_all_reported() {
    let errors = validate_locomotion(&LocomotionDef {
        schema_version: 99,
        speed: f32::NAN,
        jump_force: f32::INFINITY,
        ..def()
    });
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["schema_version", "speed", "jump_force"]);
}

#[test]
fn test_invalid_file_is_a_load_error() {
    let err = parse_locomotion(
        "bad.ron",
        r#"(
            schema_version: 1,
            speed: 2.0,
            rotation_speed: 120.0,
            jump_force: 5.0,
            crouch_speed_multiplier: 0.5,
            sprint_speed_multiplier: -5.0,
        )"#,
    )
    .unwrap_err();
    assert!(err.message.contains("sprint_speed_multiplier"));
}

#[test]
fn test_missing_directory_is_an_io_error() {
    let err = load_locomotion(Path::new("does/not/exist")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_plugin_overwrites_registered_tuning() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(MovementTuning {
            speed: 9.0,
            ..Default::default()
        })
        .add_plugins(ContentPlugin);
    assert_eq!(app.world().resource::<MovementTuning>().speed, 9.0);

    app.update();

    assert_eq!(
        *app.world().resource::<MovementTuning>(),
        MovementTuning::default()
    );
}
