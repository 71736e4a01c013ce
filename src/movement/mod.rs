//! Movement domain: player locomotion from input actions to physics.

mod actions;
mod body;
mod bootstrap;
mod components;
mod error;
mod resolver;
mod resources;
mod systems;

pub use actions::{
    ActionSnapshot, ActionTracker, InputBindings, LocomotionAction, apply_dead_zone, digital_axis,
};
pub use body::{BodyHandle, PhysicsBody};
pub use components::{GameLayer, Ground, Player};
pub use error::LocomotionError;
#[cfg(feature = "dev-tools")]
pub use resolver::LocomotionSnapshot;
pub use resolver::{KinematicStep, LocomotionHooks, LocomotionState};
pub use resources::{MovementTuning, SpeedRestore};

use bevy::prelude::*;

use crate::core::ControlState;
use crate::movement::bootstrap::{initialize_locomotion, spawn_player};
use crate::movement::systems::{
    apply_locomotion, disable_locomotion, enable_locomotion, handle_locomotion_actions,
    read_input, release_held_actions, update_walk_signal,
};

/// Ordering of the per-frame locomotion work.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocomotionSet {
    /// Device sampling into action messages
    Input,
    /// Action handling and state resolution
    Actions,
    /// Per-frame animation signalling
    Frame,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<InputBindings>()
            .init_resource::<ActionTracker>()
            .add_message::<LocomotionAction>()
            .configure_sets(
                Update,
                (
                    LocomotionSet::Input,
                    LocomotionSet::Actions,
                    LocomotionSet::Frame,
                )
                    .chain(),
            )
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                read_input
                    .in_set(LocomotionSet::Input)
                    .run_if(in_state(ControlState::Active)),
            )
            .add_systems(
                Update,
                (initialize_locomotion, handle_locomotion_actions)
                    .chain()
                    .in_set(LocomotionSet::Actions),
            )
            .add_systems(Update, update_walk_signal.in_set(LocomotionSet::Frame))
            .add_systems(FixedUpdate, apply_locomotion)
            .add_systems(OnEnter(ControlState::Active), enable_locomotion)
            .add_systems(
                OnEnter(ControlState::Suspended),
                (release_held_actions, disable_locomotion).chain(),
            );
    }
}
