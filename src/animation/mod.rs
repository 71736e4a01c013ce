//! Animation domain: animator parameters and the procedural player pose.

mod params;
mod pose;

pub use params::{AnimParam, AnimationSink, AnimatorParams};
pub use pose::{PlayerVisual, PoseState, PoseTarget};

use bevy::prelude::*;

use crate::animation::pose::drive_pose;
use crate::movement::LocomotionSet;

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, drive_pose.after(LocomotionSet::Frame));
    }
}
