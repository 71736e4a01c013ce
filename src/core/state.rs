//! Core domain: control state for the player character.

use bevy::prelude::*;

/// Whether the player character currently receives input and updates.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum ControlState {
    #[default]
    Active,
    Suspended,
}

impl ControlState {
    pub fn toggled(self) -> Self {
        match self {
            ControlState::Active => ControlState::Suspended,
            ControlState::Suspended => ControlState::Active,
        }
    }
}
