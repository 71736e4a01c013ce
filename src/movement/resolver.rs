//! Movement domain: locomotion state resolver.
//!
//! Holds movement intent, posture and movement mode for one character and
//! derives the effective speed from them. Input handlers mutate the state;
//! the frame and fixed-step hooks only read it.

use bevy::prelude::*;
#[cfg(feature = "dev-tools")]
use serde::Serialize;

use crate::animation::{AnimParam, AnimationSink};
use crate::movement::actions::LocomotionAction;
use crate::movement::body::PhysicsBody;
use crate::movement::resources::{MovementTuning, SpeedRestore};

/// Lifecycle hooks driven by the host schedule, in this order: `init` once,
/// `set_enabled` on activation toggles, `frame` every rendered frame and
/// `fixed_step` on every physics tick.
pub trait LocomotionHooks {
    fn init(tuning: &MovementTuning) -> Self
    where
        Self: Sized;
    fn set_enabled(&mut self, enabled: bool);
    fn frame(&self, anim: &mut dyn AnimationSink);
    fn fixed_step(&self, dt: f32, body: &mut dyn PhysicsBody);
}

/// Displacement for one fixed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicStep {
    pub translation: Vec3,
    /// Positive turns clockwise seen from above.
    pub yaw_degrees: f32,
}

impl KinematicStep {
    pub fn yaw_rotation(&self) -> Quat {
        Quat::from_rotation_y(-self.yaw_degrees.to_radians())
    }
}

#[derive(Component, Debug, Clone)]
pub struct LocomotionState {
    move_axis: Vec2,
    is_crouching: bool,
    is_sprinting: bool,
    is_slow_walking: bool,
    enabled: bool,
    base_speed: f32,
    effective_speed: f32,
    rotation_speed: f32,
    jump_force: f32,
    crouch_speed_multiplier: f32,
    sprint_speed_multiplier: f32,
    move_threshold: f32,
    speed_restore: SpeedRestore,
}

impl LocomotionState {
    pub fn new(tuning: &MovementTuning) -> Self {
        Self {
            move_axis: Vec2::ZERO,
            is_crouching: false,
            is_sprinting: false,
            is_slow_walking: false,
            enabled: true,
            base_speed: tuning.speed,
            effective_speed: tuning.speed,
            rotation_speed: tuning.rotation_speed,
            jump_force: tuning.jump_force,
            crouch_speed_multiplier: tuning.crouch_speed_multiplier,
            sprint_speed_multiplier: tuning.sprint_speed_multiplier,
            move_threshold: tuning.move_threshold,
            speed_restore: tuning.speed_restore,
        }
    }

    pub fn move_axis(&self) -> Vec2 {
        self.move_axis
    }

    pub fn is_crouching(&self) -> bool {
        self.is_crouching
    }

    pub fn is_sprinting(&self) -> bool {
        self.is_sprinting
    }

    pub fn is_slow_walking(&self) -> bool {
        self.is_slow_walking
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    pub fn effective_speed(&self) -> f32 {
        self.effective_speed
    }

    pub fn is_moving(&self) -> bool {
        self.move_axis.length() > self.move_threshold
    }

    // -------------------------------------------------------------------------
    // Input handlers
    // -------------------------------------------------------------------------

    pub fn on_move_input(&mut self, axis: Vec2) {
        self.move_axis = axis;
    }

    pub fn on_move_cancel(&mut self) {
        self.move_axis = Vec2::ZERO;
    }

    pub fn on_crouch_start(&mut self, anim: &mut dyn AnimationSink) {
        anim.set_bool(AnimParam::Crouch, true);
        self.is_crouching = true;
        self.effective_speed = self.crouch_speed();
        debug!("Crouch start: speed={:.2}", self.effective_speed);
    }

    pub fn on_crouch_end(&mut self, anim: &mut dyn AnimationSink) {
        anim.set_bool(AnimParam::Crouch, false);
        self.is_crouching = false;
        self.resolve_speed();
        debug!("Crouch end: speed={:.2}", self.effective_speed);
    }

    pub fn on_sprint_start(&mut self, anim: &mut dyn AnimationSink) {
        anim.set_bool(AnimParam::Run, true);
        self.is_sprinting = true;
        self.effective_speed = self.sprint_speed();
        debug!("Sprint start: speed={:.2}", self.effective_speed);
    }

    pub fn on_sprint_end(&mut self, anim: &mut dyn AnimationSink) {
        anim.set_bool(AnimParam::Run, false);
        self.is_sprinting = false;
        self.resolve_speed();
        debug!("Sprint end: speed={:.2}", self.effective_speed);
    }

    /// Jump is not gated on ground contact, so it also fires mid-air.
    pub fn on_jump(&mut self, anim: &mut dyn AnimationSink, body: &mut dyn PhysicsBody) {
        anim.set_trigger(AnimParam::Jump);
        body.apply_velocity_change(Vec3::Y * self.jump_force);
        debug!("Jump: impulse={:.2}", self.jump_force);
    }

    pub fn on_walk_mode_start(&mut self, anim: &mut dyn AnimationSink) {
        anim.set_bool(AnimParam::SlowWalking, true);
        self.is_slow_walking = true;
    }

    pub fn on_walk_mode_end(&mut self, anim: &mut dyn AnimationSink) {
        anim.set_bool(AnimParam::SlowWalking, false);
        self.is_slow_walking = false;
    }

    /// Route an input event to its handler.
    pub fn apply(
        &mut self,
        action: LocomotionAction,
        anim: &mut dyn AnimationSink,
        body: &mut dyn PhysicsBody,
    ) {
        match action {
            LocomotionAction::MovePerformed(axis) => self.on_move_input(axis),
            LocomotionAction::MoveCanceled => self.on_move_cancel(),
            LocomotionAction::CrouchPerformed => self.on_crouch_start(anim),
            LocomotionAction::CrouchCanceled => self.on_crouch_end(anim),
            LocomotionAction::SprintPerformed => self.on_sprint_start(anim),
            LocomotionAction::SprintCanceled => self.on_sprint_end(anim),
            LocomotionAction::WalkPerformed => self.on_walk_mode_start(anim),
            LocomotionAction::WalkCanceled => self.on_walk_mode_end(anim),
            LocomotionAction::JumpPerformed => self.on_jump(anim, body),
        }
    }

    // -------------------------------------------------------------------------
    // Speed resolution
    // -------------------------------------------------------------------------

    fn crouch_speed(&self) -> f32 {
        self.base_speed * self.crouch_speed_multiplier
    }

    fn sprint_speed(&self) -> f32 {
        self.base_speed * self.sprint_speed_multiplier
    }

    /// Restore speed after crouch or sprint ends. Crouch wins over sprint.
    fn resolve_speed(&mut self) {
        self.effective_speed = match self.speed_restore {
            SpeedRestore::Legacy => {
                if self.is_crouching {
                    self.crouch_speed()
                } else {
                    self.base_speed
                }
            }
            SpeedRestore::SprintAware => {
                if self.is_crouching {
                    self.crouch_speed()
                } else if self.is_sprinting {
                    self.sprint_speed()
                } else {
                    self.base_speed
                }
            }
        };
    }

    // -------------------------------------------------------------------------
    // Integration
    // -------------------------------------------------------------------------

    /// Displacement for one fixed step of `dt` seconds from a body facing
    /// `facing`. Forward is `-Z`.
    pub fn kinematic_step(&self, facing: Quat, dt: f32) -> KinematicStep {
        let forward = facing * Vec3::NEG_Z;
        KinematicStep {
            translation: forward * self.move_axis.y * self.effective_speed * dt,
            yaw_degrees: self.move_axis.x * self.rotation_speed * dt,
        }
    }

    #[cfg(feature = "dev-tools")]
    pub fn snapshot(&self) -> LocomotionSnapshot {
        LocomotionSnapshot {
            move_axis: self.move_axis.to_array(),
            is_crouching: self.is_crouching,
            is_sprinting: self.is_sprinting,
            is_slow_walking: self.is_slow_walking,
            is_moving: self.is_moving(),
            enabled: self.enabled,
            base_speed: self.base_speed,
            effective_speed: self.effective_speed,
            speed_restore: self.speed_restore,
        }
    }
}

impl LocomotionHooks for LocomotionState {
    fn init(tuning: &MovementTuning) -> Self {
        Self::new(tuning)
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn frame(&self, anim: &mut dyn AnimationSink) {
        if !self.enabled {
            return;
        }

        let is_moving = self.is_moving();
        if anim.get_bool(AnimParam::Walk) != is_moving {
            anim.set_bool(AnimParam::Walk, is_moving);
        }
    }

    fn fixed_step(&self, dt: f32, body: &mut dyn PhysicsBody) {
        if !self.enabled {
            return;
        }

        let step = self.kinematic_step(body.rotation(), dt);
        if step.translation != Vec3::ZERO {
            let target = body.position() + step.translation;
            body.move_position(target);
        }
        if step.yaw_degrees != 0.0 {
            let target = body.rotation() * step.yaw_rotation();
            body.move_rotation(target);
        }
    }
}

/// Serializable view of the resolver for debugging.
#[cfg(feature = "dev-tools")]
#[derive(Debug, Clone, Serialize)]
pub struct LocomotionSnapshot {
    pub move_axis: [f32; 2],
    pub is_crouching: bool,
    pub is_sprinting: bool,
    pub is_slow_walking: bool,
    pub is_moving: bool,
    pub enabled: bool,
    pub base_speed: f32,
    pub effective_speed: f32,
    pub speed_restore: SpeedRestore,
}
