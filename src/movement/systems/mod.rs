//! Movement domain: system modules for input and locomotion updates.

pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::{read_input, release_held_actions};
pub(crate) use movement::{
    apply_locomotion, disable_locomotion, enable_locomotion, handle_locomotion_actions,
    update_walk_signal,
};
