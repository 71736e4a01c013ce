//! Core domain: scene setup and control toggling.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::core::state::ControlState;
use crate::movement::{GameLayer, Ground};

pub(crate) const GROUND_SIZE: f32 = 40.0;
pub(crate) const GROUND_THICKNESS: f32 = 0.2;

pub(crate) fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(-6.0, 7.0, 12.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Ground
    commands.spawn((
        Ground,
        Name::new("Ground"),
        Mesh3d(meshes.add(Cuboid::new(GROUND_SIZE, GROUND_THICKNESS, GROUND_SIZE))),
        MeshMaterial3d(materials.add(Color::srgb(0.4, 0.5, 0.4))),
        Transform::from_xyz(0.0, -GROUND_THICKNESS * 0.5, 0.0),
        RigidBody::Static,
        Collider::cuboid(GROUND_SIZE, GROUND_THICKNESS, GROUND_SIZE),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Default, GameLayer::Player]),
    ));

    info!("Scene ready");
}

/// Toggle player control with Escape
pub(crate) fn toggle_control(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<ControlState>>,
    mut next_state: ResMut<NextState<ControlState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        let next = state.get().toggled();
        next_state.set(next);
        info!("Control state -> {:?}", next);
    }
}
