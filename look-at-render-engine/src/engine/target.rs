//! Shared target point every follower faces.

use bevy::prelude::*;
use constants::target::{TARGET_MAX_Y, TARGET_MIN_Y, TARGET_START, TARGET_STEP};

/// Current point all bound followers face.
///
/// Written only by the look control button; followers read it whenever
/// Bevy's change detection reports a new value.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct TargetState {
    position: Vec3,
}

impl Default for TargetState {
    fn default() -> Self {
        Self {
            position: TARGET_START,
        }
    }
}

impl TargetState {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Step the target up by half a unit, wrapping to the bottom once the top is reached.
    pub fn advance(&mut self) -> Vec3 {
        self.position = next_target(self.position);
        self.position
    }
}

/// Next target after one step. x and z are always reset to zero.
pub fn next_target(current: Vec3) -> Vec3 {
    let y = if current.y >= TARGET_MAX_Y {
        TARGET_MIN_Y
    } else {
        current.y + TARGET_STEP
    };
    Vec3::new(0.0, y, 0.0)
}

/// Apply one step through change detection so followers only react to a real change.
pub fn advance_target(target: &mut ResMut<TargetState>) -> bool {
    let next = TargetState::new(next_target(target.position()));
    let changed = target.set_if_neq(next);
    if changed {
        info!("Target advanced to {}", target.position());
    }
    changed
}
