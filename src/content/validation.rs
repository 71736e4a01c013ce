//! Validation for locomotion tuning values.

use super::data::{LOCOMOTION_SCHEMA_VERSION, LocomotionDef};

/// A rejected tuning field.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub reason: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field '{}' = {} {}", self.field, self.value, self.reason)
    }
}

/// Helper macro for checking a tuning scalar is finite and not negative
macro_rules! check_scalar {
    ($errors:expr, $def:expr, $field:ident) => {
        let value = $def.$field;
        if !value.is_finite() {
            $errors.push(ValidationError {
                field: stringify!($field),
                value,
                reason: "is not finite",
            });
        } else if value < 0.0 {
            $errors.push(ValidationError {
                field: stringify!($field),
                value,
                reason: "is negative",
            });
        }
    };
}

/// Validate a locomotion definition.
/// Returns every problem found, empty if the definition is usable.
pub fn validate_locomotion(def: &LocomotionDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if def.schema_version != LOCOMOTION_SCHEMA_VERSION {
        errors.push(ValidationError {
            field: "schema_version",
            value: def.schema_version as f32,
            reason: "is not a supported schema version",
        });
    }

    check_scalar!(errors, def, speed);
    check_scalar!(errors, def, rotation_speed);
    check_scalar!(errors, def, jump_force);
    check_scalar!(errors, def, crouch_speed_multiplier);
    check_scalar!(errors, def, sprint_speed_multiplier);
    check_scalar!(errors, def, move_threshold);

    errors
}
