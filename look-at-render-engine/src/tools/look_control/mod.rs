//! Single-button panel driving the target.
//!
//! Each press of the button is one atomic `advance()` of `TargetState`,
//! applied immediately; there is no queuing or debounce.

/// Button press handling and hover feedback.
pub mod interactions;

/// Marker components for the panel.
pub mod state;

/// Panel spawning.
pub mod ui;

use bevy::prelude::*;

use crate::engine::follower::orientation::reorient_bound_followers;
use interactions::look_button_interaction;
use ui::spawn_look_control_ui;

// Registers the look control panel and its button system.
pub struct LookControlPlugin;

impl Plugin for LookControlPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_look_control_ui).add_systems(
            Update,
            look_button_interaction.before(reorient_bound_followers),
        );
    }
}
