//! Movement domain: errors raised while wiring locomotion to an entity.

use bevy::prelude::Entity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocomotionError {
    /// A player entity is missing a component locomotion drives.
    MissingCollaborator {
        entity: Entity,
        collaborator: &'static str,
    },
}

impl std::fmt::Display for LocomotionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocomotionError::MissingCollaborator {
                entity,
                collaborator,
            } => write!(
                f,
                "Player {:?} has no {} component; locomotion cannot start",
                entity, collaborator
            ),
        }
    }
}

impl std::error::Error for LocomotionError {}
