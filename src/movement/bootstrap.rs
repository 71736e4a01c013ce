//! Movement domain: player spawn and locomotion initialization.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::animation::{AnimatorParams, PlayerVisual, PoseState};
use crate::movement::{
    GameLayer, LocomotionError, LocomotionHooks, LocomotionState, MovementTuning, Player,
};

pub(crate) const PLAYER_RADIUS: f32 = 0.4;
pub(crate) const PLAYER_SEGMENT: f32 = 1.0;

pub(crate) fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Capsule3d::new(PLAYER_RADIUS, PLAYER_SEGMENT));
    let material = materials.add(Color::srgb(0.8, 0.7, 0.6));

    commands
        .spawn((
            // Identity & animation
            (
                Player,
                Name::new("Player"),
                AnimatorParams::new(),
                PoseState::default(),
            ),
            Transform::from_xyz(0.0, 1.5, 0.0),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::capsule(PLAYER_RADIUS, PLAYER_SEGMENT),
                LockedAxes::ROTATION_LOCKED,
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
            ),
        ))
        .with_children(|parent| {
            parent.spawn((
                PlayerVisual,
                Mesh3d(mesh),
                MeshMaterial3d(material),
                Transform::default(),
            ));
        });
}

/// Attach locomotion to new players once their collaborators are present.
///
/// A player without a rigid body or animator is a setup fault and stops the
/// app through Bevy's error handler.
pub(crate) fn initialize_locomotion(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    players: Query<
        (
            Entity,
            Has<RigidBody>,
            Has<Position>,
            Has<Rotation>,
            Has<LinearVelocity>,
            Has<AnimatorParams>,
        ),
        (With<Player>, Without<LocomotionState>),
    >,
) -> Result {
    for (entity, has_body, has_position, has_rotation, has_velocity, has_animator) in &players {
        let missing = [
            (has_body, "RigidBody"),
            (has_position, "Position"),
            (has_rotation, "Rotation"),
            (has_velocity, "LinearVelocity"),
            (has_animator, "AnimatorParams"),
        ]
        .into_iter()
        .find(|(present, _)| !present);

        if let Some((_, collaborator)) = missing {
            return Err(LocomotionError::MissingCollaborator {
                entity,
                collaborator,
            }
            .into());
        }

        commands
            .entity(entity)
            .insert(LocomotionState::init(&tuning));

        info!(
            "Locomotion ready for {:?}: speed={}, rotation_speed={}, jump_force={}, restore={:?}",
            entity, tuning.speed, tuning.rotation_speed, tuning.jump_force, tuning.speed_restore
        );
    }

    Ok(())
}
