use bevy::prelude::*;

// Components
#[derive(Component)]
pub struct LookControlRoot;
#[derive(Component)]
pub struct LookButton;
#[derive(Component)]
pub struct LookButtonLabel;

pub const BUTTON_IDLE: Color = Color::srgb(0.05, 0.43, 0.99);
pub const BUTTON_HOVERED: Color = Color::srgb(0.04, 0.37, 0.85);
pub const BUTTON_PRESSED: Color = Color::srgb(0.03, 0.31, 0.72);
