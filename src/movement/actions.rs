//! Movement domain: input bindings and performed/canceled action messages.
//!
//! Devices are sampled as levels every frame. `ActionTracker` turns those
//! levels into discrete action phases, so locomotion only ever sees
//! "performed" and "canceled" events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Discrete locomotion input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocomotionAction {
    MovePerformed(Vec2),
    MoveCanceled,
    CrouchPerformed,
    CrouchCanceled,
    SprintPerformed,
    SprintCanceled,
    WalkPerformed,
    WalkCanceled,
    JumpPerformed,
}

impl Message for LocomotionAction {}

/// Keyboard and gamepad bindings for the player action map.
#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    pub forward: Vec<KeyCode>,
    pub back: Vec<KeyCode>,
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
    pub crouch: Vec<KeyCode>,
    pub sprint: Vec<KeyCode>,
    pub walk: Vec<KeyCode>,
    pub jump: Vec<KeyCode>,
    pub pad_crouch: GamepadButton,
    pub pad_sprint: GamepadButton,
    pub pad_walk: GamepadButton,
    pub pad_jump: GamepadButton,
    /// Radial dead zone for the left stick.
    pub stick_dead_zone: f32,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            forward: vec![KeyCode::KeyW, KeyCode::ArrowUp],
            back: vec![KeyCode::KeyS, KeyCode::ArrowDown],
            left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
            crouch: vec![KeyCode::KeyC, KeyCode::ControlLeft],
            sprint: vec![KeyCode::ShiftLeft],
            walk: vec![KeyCode::AltLeft],
            jump: vec![KeyCode::Space],
            pad_crouch: GamepadButton::East,
            pad_sprint: GamepadButton::LeftThumb,
            pad_walk: GamepadButton::North,
            pad_jump: GamepadButton::South,
            stick_dead_zone: 0.15,
        }
    }
}

impl InputBindings {
    /// Sample current device levels.
    pub fn snapshot(
        &self,
        keyboard: &ButtonInput<KeyCode>,
        gamepad: Option<&Gamepad>,
    ) -> ActionSnapshot {
        let pressed = |keys: &[KeyCode]| keyboard.any_pressed(keys.iter().copied());
        let pad_pressed =
            |button: GamepadButton| gamepad.is_some_and(|pad| pad.pressed(button));

        let mut axis = digital_axis(
            pressed(&self.forward),
            pressed(&self.back),
            pressed(&self.left),
            pressed(&self.right),
        );
        if axis == Vec2::ZERO {
            if let Some(pad) = gamepad {
                axis = apply_dead_zone(pad.left_stick(), self.stick_dead_zone);
            }
        }

        ActionSnapshot {
            axis,
            crouch: pressed(&self.crouch) || pad_pressed(self.pad_crouch),
            sprint: pressed(&self.sprint) || pad_pressed(self.pad_sprint),
            walk: pressed(&self.walk) || pad_pressed(self.pad_walk),
            jump: pressed(&self.jump) || pad_pressed(self.pad_jump),
        }
    }
}

/// Normalized 2D composite from four digital directions.
pub fn digital_axis(forward: bool, back: bool, left: bool, right: bool) -> Vec2 {
    let x = (right as i8 - left as i8) as f32;
    let y = (forward as i8 - back as i8) as f32;
    Vec2::new(x, y).normalize_or_zero()
}

/// Zero the stick inside `dead_zone`, rescaling the rest to start at zero.
pub fn apply_dead_zone(stick: Vec2, dead_zone: f32) -> Vec2 {
    let length = stick.length();
    if length <= dead_zone {
        return Vec2::ZERO;
    }
    let scaled = ((length - dead_zone) / (1.0 - dead_zone)).min(1.0);
    stick / length * scaled
}

/// Device levels for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActionSnapshot {
    pub axis: Vec2,
    pub crouch: bool,
    pub sprint: bool,
    pub walk: bool,
    pub jump: bool,
}

/// Last observed levels, used to detect action phase changes.
#[derive(Resource, Debug, Default, Clone)]
pub struct ActionTracker {
    last: ActionSnapshot,
}

impl ActionTracker {
    /// Compare `snapshot` with the previous frame and return the resulting
    /// action events.
    pub fn sample(&mut self, snapshot: ActionSnapshot) -> Vec<LocomotionAction> {
        let mut actions = Vec::new();
        let last = self.last;

        if snapshot.axis != last.axis {
            if snapshot.axis == Vec2::ZERO {
                actions.push(LocomotionAction::MoveCanceled);
            } else {
                actions.push(LocomotionAction::MovePerformed(snapshot.axis));
            }
        }

        push_button(
            &mut actions,
            last.crouch,
            snapshot.crouch,
            LocomotionAction::CrouchPerformed,
            LocomotionAction::CrouchCanceled,
        );
        push_button(
            &mut actions,
            last.sprint,
            snapshot.sprint,
            LocomotionAction::SprintPerformed,
            LocomotionAction::SprintCanceled,
        );
        push_button(
            &mut actions,
            last.walk,
            snapshot.walk,
            LocomotionAction::WalkPerformed,
            LocomotionAction::WalkCanceled,
        );

        // Jump has no canceled phase
        if snapshot.jump && !last.jump {
            actions.push(LocomotionAction::JumpPerformed);
        }

        self.last = snapshot;
        actions
    }

    /// Cancel everything currently held and forget it.
    pub fn release(&mut self) -> Vec<LocomotionAction> {
        self.sample(ActionSnapshot::default())
    }

    pub fn is_idle(&self) -> bool {
        self.last == ActionSnapshot::default()
    }
}

fn push_button(
    actions: &mut Vec<LocomotionAction>,
    was: bool,
    is: bool,
    performed: LocomotionAction,
    canceled: LocomotionAction,
) {
    match (was, is) {
        (false, true) => actions.push(performed),
        (true, false) => actions.push(canceled),
        _ => {}
    }
}
