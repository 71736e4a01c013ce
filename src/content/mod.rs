//! Content domain: author-time tuning data loaded from RON.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{LOCOMOTION_SCHEMA_VERSION, LocomotionDef};
pub use loader::{ContentLoadError, LOCOMOTION_FILE, load_locomotion, parse_locomotion};
pub use validation::{ValidationError, validate_locomotion};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::MovementTuning;

pub const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_locomotion_content);
    }
}

/// Replace the compiled-in tuning with the authored file, if it loads.
///
/// `MovementTuning` itself is registered by the movement plugin.
fn load_locomotion_content(mut tuning: ResMut<MovementTuning>) {
    match load_locomotion(Path::new(CONTENT_DIR)) {
        Ok(loaded) => {
            info!(
                "Loaded locomotion tuning: speed={}, crouch_speed={}, sprint_speed={}, rotation_speed={}, jump_force={}",
                loaded.speed,
                loaded.crouch_speed(),
                loaded.sprint_speed(),
                loaded.rotation_speed,
                loaded.jump_force
            );
            *tuning = loaded;
        }
        Err(e) => {
            error!("{}", e);
            warn!("Using default locomotion tuning");
        }
    }
}
