//! Movement domain: input sampling for locomotion.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{ActionTracker, InputBindings, LocomotionAction};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    bindings: Res<InputBindings>,
    mut tracker: ResMut<ActionTracker>,
    mut actions: MessageWriter<LocomotionAction>,
) {
    let snapshot = bindings.snapshot(&keyboard, gamepads.iter().next());

    for action in tracker.sample(snapshot) {
        actions.write(action);
    }
}

/// Cancel held actions when control is suspended, as disabling an action map
/// does.
pub(crate) fn release_held_actions(
    mut tracker: ResMut<ActionTracker>,
    mut actions: MessageWriter<LocomotionAction>,
) {
    if tracker.is_idle() {
        return;
    }

    let released = tracker.release();
    debug!("Released {} held actions", released.len());
    for action in released {
        actions.write(action);
    }
}
