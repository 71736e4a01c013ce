//! Animation domain: named animator parameters.
//!
//! Characters expose a small set of boolean parameters and one-shot
//! triggers. Locomotion writes them; the pose driver reads them.

use std::collections::HashMap;

use bevy::prelude::*;

/// Animator parameters understood by the player rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimParam {
    /// Sprinting.
    Run,
    /// Walk-mode modifier held (animation only, no speed change).
    SlowWalking,
    /// Crouched posture.
    Crouch,
    /// One-shot jump trigger.
    Jump,
    /// Moving above the movement threshold.
    Walk,
}

impl AnimParam {
    /// Parameter name as authored in the animation graph.
    pub fn name(self) -> &'static str {
        match self {
            AnimParam::Run => "isRun",
            AnimParam::SlowWalking => "isSlowWalking",
            AnimParam::Crouch => "isCrouch",
            AnimParam::Jump => "isJump",
            AnimParam::Walk => "isWalk",
        }
    }
}

/// Write side of an animator, as seen by gameplay code.
pub trait AnimationSink {
    fn set_bool(&mut self, param: AnimParam, value: bool);
    fn get_bool(&self, param: AnimParam) -> bool;
    /// Latch a trigger until the animator consumes it.
    fn set_trigger(&mut self, param: AnimParam);
}

/// Per-character parameter store.
#[derive(Component, Debug, Default, Clone)]
pub struct AnimatorParams {
    bools: HashMap<AnimParam, bool>,
    triggers: Vec<AnimParam>,
}

impl AnimatorParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Triggers latched since the last call, in the order they were set.
    pub fn take_triggers(&mut self) -> Vec<AnimParam> {
        std::mem::take(&mut self.triggers)
    }

    pub fn pending_triggers(&self) -> &[AnimParam] {
        &self.triggers
    }
}

impl AnimationSink for AnimatorParams {
    fn set_bool(&mut self, param: AnimParam, value: bool) {
        let previous = self.bools.insert(param, value).unwrap_or(false);
        if previous != value {
            debug!("Animator {} = {}", param.name(), value);
        }
    }

    fn get_bool(&self, param: AnimParam) -> bool {
        self.bools.get(&param).copied().unwrap_or(false)
    }

    fn set_trigger(&mut self, param: AnimParam) {
        // A latched trigger stays single until consumed
        if !self.triggers.contains(&param) {
            self.triggers.push(param);
            debug!("Animator trigger {}", param.name());
        }
    }
}
