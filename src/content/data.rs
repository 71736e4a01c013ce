//! Data definitions for RON content files.
//!
//! These structs mirror assets/data/*.ron and are only used for
//! deserialization; gameplay reads the resources built from them.

use serde::{Deserialize, Serialize};

use crate::movement::{MovementTuning, SpeedRestore};

pub const LOCOMOTION_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Locomotion tuning (locomotion.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LocomotionDef {
    pub schema_version: u32,
    pub speed: f32,
    pub rotation_speed: f32,
    pub jump_force: f32,
    pub crouch_speed_multiplier: f32,
    pub sprint_speed_multiplier: f32,
    #[serde(default = "default_move_threshold")]
    pub move_threshold: f32,
    #[serde(default)]
    pub speed_restore: SpeedRestore,
}

fn default_move_threshold() -> f32 {
    MovementTuning::default().move_threshold
}

impl From<LocomotionDef> for MovementTuning {
    fn from(def: LocomotionDef) -> Self {
        Self {
            speed: def.speed,
            rotation_speed: def.rotation_speed,
            jump_force: def.jump_force,
            crouch_speed_multiplier: def.crouch_speed_multiplier,
            sprint_speed_multiplier: def.sprint_speed_multiplier,
            move_threshold: def.move_threshold,
            speed_restore: def.speed_restore,
        }
    }
}
