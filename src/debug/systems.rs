//! Debug domain: overlay and snapshot hotkeys.

use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, format_overlay, spawn_debug_info_overlay};
use crate::movement::{LocomotionState, Player};

/// Toggle the overlay with F1 or backtick key
pub(crate) fn toggle_debug_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.show_info = !debug_state.show_info;
    }
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<(&Transform, &LocomotionState), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((transform, state)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        **text = format_overlay(transform.translation, &state.snapshot());
    }
}

/// F2 logs the locomotion state as JSON
pub(crate) fn dump_locomotion_snapshot(
    keyboard: Res<ButtonInput<KeyCode>>,
    player_query: Query<(Entity, &LocomotionState), With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F2) {
        return;
    }

    for (entity, state) in &player_query {
        match serde_json::to_string_pretty(&state.snapshot()) {
            Ok(json) => info!("[DEBUG] Locomotion {:?}:\n{}", entity, json),
            Err(e) => warn!("[DEBUG] Could not serialize locomotion snapshot: {}", e),
        }
    }
}
