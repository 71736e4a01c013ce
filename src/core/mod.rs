//! Core domain: control state, fixed timestep and the scene around the player.

mod state;
mod systems;

pub use state::ControlState;

use bevy::prelude::*;

use crate::core::systems::{setup_scene, toggle_control};

/// Physics tick rate; one step is 0.02 s.
pub const FIXED_TIMESTEP_HZ: f64 = 50.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ControlState>()
            .insert_resource(Time::<Fixed>::from_hz(FIXED_TIMESTEP_HZ))
            .add_systems(Startup, setup_scene)
            .add_systems(Update, toggle_control);
    }
}
