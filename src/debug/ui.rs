//! Debug domain: overlay text node.

use bevy::prelude::*;

/// Marker for the locomotion info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.5, 0.9, 0.5)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            top: Val::Px(12.0),
            ..default()
        },
    ));
}

/// Multi-line readout of the locomotion state.
pub(crate) fn format_overlay(
    position: Vec3,
    snapshot: &crate::movement::LocomotionSnapshot,
) -> String {
    format!(
        "Pos: ({:.2}, {:.2}, {:.2})\nAxis: ({:.2}, {:.2})\nSpeed: {:.2} (base {:.2})\nCrouch: {}  Sprint: {}  Slow: {}\nMoving: {}  Enabled: {}",
        position.x,
        position.y,
        position.z,
        snapshot.move_axis[0],
        snapshot.move_axis[1],
        snapshot.effective_speed,
        snapshot.base_speed,
        snapshot.is_crouching,
        snapshot.is_sprinting,
        snapshot.is_slow_walking,
        snapshot.is_moving,
        snapshot.enabled,
    )
}
