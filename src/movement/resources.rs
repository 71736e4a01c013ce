//! Movement domain: tuning resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// How speed is restored when crouch or sprint ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum SpeedRestore {
    /// Crouch speed if still crouched, otherwise base speed. A held sprint is
    /// not re-applied until sprint is pressed again.
    #[default]
    Legacy,
    /// Crouch speed if crouched, sprint speed if sprint is still held,
    /// otherwise base speed.
    SprintAware,
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MovementTuning {
    /// Base forward speed in metres per second.
    pub speed: f32,
    /// Facing rotation rate in degrees per second.
    pub rotation_speed: f32,
    /// Vertical velocity change applied on jump.
    pub jump_force: f32,
    pub crouch_speed_multiplier: f32,
    pub sprint_speed_multiplier: f32,
    /// Axis magnitude above which the character counts as moving.
    pub move_threshold: f32,
    pub speed_restore: SpeedRestore,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: 2.0,
            rotation_speed: 120.0,
            jump_force: 5.0,
            crouch_speed_multiplier: 0.5,
            sprint_speed_multiplier: 5.0,
            move_threshold: 0.1,
            speed_restore: SpeedRestore::Legacy,
        }
    }
}

impl MovementTuning {
    pub fn crouch_speed(&self) -> f32 {
        self.speed * self.crouch_speed_multiplier
    }

    pub fn sprint_speed(&self) -> f32 {
        self.speed * self.sprint_speed_multiplier
    }
}
