//! Movement domain: locomotion systems for input events, frames and physics.

use avian3d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::animation::AnimatorParams;
use crate::movement::{BodyHandle, LocomotionAction, LocomotionHooks, LocomotionState, Player};

pub(crate) fn handle_locomotion_actions(
    mut actions: MessageReader<LocomotionAction>,
    mut players: Query<
        (
            &mut LocomotionState,
            &mut AnimatorParams,
            &mut Position,
            &mut Rotation,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let actions: Vec<LocomotionAction> = actions.read().copied().collect();
    if actions.is_empty() {
        return;
    }

    for (mut state, mut animator, position, rotation, velocity) in &mut players {
        let mut body = BodyHandle::new(position, rotation, velocity);
        for action in &actions {
            state.apply(*action, &mut *animator, &mut body);
        }
    }
}

/// Per-frame hook: keeps the walking signal in sync with movement intent.
pub(crate) fn update_walk_signal(
    mut players: Query<(&LocomotionState, &mut AnimatorParams), With<Player>>,
) {
    for (state, mut animator) in &mut players {
        state.frame(&mut *animator);
    }
}

/// Fixed-step hook: integrates position and yaw.
pub(crate) fn apply_locomotion(
    time: Res<Time>,
    mut players: Query<
        (
            &LocomotionState,
            &mut Position,
            &mut Rotation,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (state, position, rotation, velocity) in &mut players {
        let mut body = BodyHandle::new(position, rotation, velocity);
        state.fixed_step(dt, &mut body);
    }
}

pub(crate) fn enable_locomotion(mut players: Query<&mut LocomotionState, With<Player>>) {
    for mut state in &mut players {
        state.set_enabled(true);
    }
    info!("Locomotion enabled");
}

pub(crate) fn disable_locomotion(mut players: Query<&mut LocomotionState, With<Player>>) {
    for mut state in &mut players {
        state.set_enabled(false);
    }
    info!("Locomotion disabled");
}
