//! Debug domain: state for locomotion dev tooling.

use bevy::prelude::*;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the locomotion overlay is visible
    pub show_info: bool,
}
