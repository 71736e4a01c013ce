//! Debug tooling for locomotion tuning.
//!
//! Features:
//! - F1 / backtick toggles an on-screen readout of the locomotion state
//! - F2 dumps the locomotion state to the log as JSON

mod state;
mod systems;
mod ui;

pub use state::DebugState;

use bevy::prelude::*;

use crate::debug::systems::{
    dump_locomotion_snapshot, toggle_debug_overlay, update_debug_info_overlay,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_debug_overlay,
                update_debug_info_overlay,
                dump_locomotion_snapshot,
            )
                .chain(),
        );
    }
}
