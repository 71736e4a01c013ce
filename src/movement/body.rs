//! Movement domain: the physics body seen by locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Kinematic writes and impulses on a rigid body.
pub trait PhysicsBody {
    fn position(&self) -> Vec3;
    fn rotation(&self) -> Quat;
    /// Move the body to `target`; contacts are still resolved by the solver.
    fn move_position(&mut self, target: Vec3);
    fn move_rotation(&mut self, target: Quat);
    /// Mass-independent change of linear velocity.
    fn apply_velocity_change(&mut self, delta: Vec3);
}

/// Borrowed avian3d body components of one entity.
///
/// Holds `Mut` handles so change detection only fires for fields that are
/// actually written.
pub struct BodyHandle<'w> {
    position: Mut<'w, Position>,
    rotation: Mut<'w, Rotation>,
    velocity: Mut<'w, LinearVelocity>,
}

impl<'w> BodyHandle<'w> {
    pub fn new(
        position: Mut<'w, Position>,
        rotation: Mut<'w, Rotation>,
        velocity: Mut<'w, LinearVelocity>,
    ) -> Self {
        Self {
            position,
            rotation,
            velocity,
        }
    }
}

impl PhysicsBody for BodyHandle<'_> {
    fn position(&self) -> Vec3 {
        self.position.0
    }

    fn rotation(&self) -> Quat {
        self.rotation.0
    }

    fn move_position(&mut self, target: Vec3) {
        self.position.0 = target;
    }

    fn move_rotation(&mut self, target: Quat) {
        self.rotation.0 = target.normalize();
    }

    fn apply_velocity_change(&mut self, delta: Vec3) {
        self.velocity.0 += delta;
    }
}
