//! Animation domain: procedural pose for the player visual.
//!
//! There is no skeletal rig; the capsule mesh child is squashed, leaned and
//! stretched from the animator parameters so posture changes are visible.

use bevy::prelude::*;

use super::params::{AnimParam, AnimationSink, AnimatorParams};

pub(crate) const CROUCH_HEIGHT_SCALE: f32 = 0.6;
pub(crate) const RUN_LEAN_DEGREES: f32 = 12.0;
pub(crate) const SLOW_WALK_LEAN_DEGREES: f32 = 3.0;
pub(crate) const JUMP_PULSE_SECS: f32 = 0.25;
pub(crate) const JUMP_STRETCH: f32 = 0.15;
pub(crate) const POSE_EASE_RATE: f32 = 12.0;
/// Half height of the player capsule (radius 0.4, segment 1.0).
pub(crate) const VISUAL_HALF_HEIGHT: f32 = 0.9;

/// Marker for the mesh child that carries the pose.
#[derive(Component, Debug)]
pub struct PlayerVisual;

/// Pose the visual should settle into for the current parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseTarget {
    pub height_scale: f32,
    pub lean_degrees: f32,
}

impl PoseTarget {
    pub fn from_params(params: &impl AnimationSink) -> Self {
        let height_scale = if params.get_bool(AnimParam::Crouch) {
            CROUCH_HEIGHT_SCALE
        } else {
            1.0
        };

        let lean_degrees = if params.get_bool(AnimParam::Run) {
            RUN_LEAN_DEGREES
        } else if params.get_bool(AnimParam::SlowWalking) && params.get_bool(AnimParam::Walk) {
            SLOW_WALK_LEAN_DEGREES
        } else {
            0.0
        };

        Self {
            height_scale,
            lean_degrees,
        }
    }
}

/// Current eased pose.
#[derive(Component, Debug, Clone, Copy)]
pub struct PoseState {
    pub height_scale: f32,
    pub lean_degrees: f32,
    /// Remaining seconds of the jump stretch.
    pub jump_pulse: f32,
}

impl Default for PoseState {
    fn default() -> Self {
        Self {
            height_scale: 1.0,
            lean_degrees: 0.0,
            jump_pulse: 0.0,
        }
    }
}

impl PoseState {
    /// Ease toward `target` over `dt` seconds.
    pub fn advance(&mut self, target: PoseTarget, dt: f32) {
        let blend = 1.0 - (-POSE_EASE_RATE * dt).exp();
        self.height_scale += (target.height_scale - self.height_scale) * blend;
        self.lean_degrees += (target.lean_degrees - self.lean_degrees) * blend;
        self.jump_pulse = (self.jump_pulse - dt).max(0.0);
    }

    pub fn start_jump_pulse(&mut self) {
        self.jump_pulse = JUMP_PULSE_SECS;
    }

    /// Vertical stretch factor from the jump pulse.
    pub fn stretch(&self) -> f32 {
        1.0 + JUMP_STRETCH * (self.jump_pulse / JUMP_PULSE_SECS)
    }

    /// Local transform of the visual child for this pose.
    /// Feet stay planted while the height scale shrinks.
    pub fn visual_transform(&self) -> Transform {
        let height = self.height_scale * self.stretch();
        Transform {
            translation: Vec3::new(0.0, -(1.0 - height) * VISUAL_HALF_HEIGHT, 0.0),
            rotation: Quat::from_rotation_x(-self.lean_degrees.to_radians()),
            scale: Vec3::new(1.0, height, 1.0),
        }
    }
}

pub(crate) fn drive_pose(
    time: Res<Time>,
    mut characters: Query<(&mut AnimatorParams, &mut PoseState, &Children)>,
    mut visuals: Query<&mut Transform, With<PlayerVisual>>,
) {
    let dt = time.delta_secs();

    for (mut params, mut pose, children) in &mut characters {
        for trigger in params.take_triggers() {
            if trigger == AnimParam::Jump {
                pose.start_jump_pulse();
            }
        }

        let target = PoseTarget::from_params(&*params);
        pose.advance(target, dt);

        for child in children.iter() {
            if let Ok(mut transform) = visuals.get_mut(child) {
                *transform = pose.visual_transform();
            }
        }
    }
}
