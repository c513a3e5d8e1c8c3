use bevy::color::Color;
use bevy::math::Vec3;

/// Follower ids paired with their spawn positions
pub const FOLLOWER_SPAWNS: &[(&str, Vec3)] = &[
    ("1", Vec3::new(3.0, 0.0, 3.0)),
    ("2", Vec3::new(-3.0, 0.0, -3.0)),
];

/// Edge length of the box shown while a model is loading
pub const PLACEHOLDER_SIZE: f32 = 1.0;

// Arc-rotate camera start
pub const CAMERA_ALPHA: f32 = std::f32::consts::FRAC_PI_2;
pub const CAMERA_BETA: f32 = std::f32::consts::FRAC_PI_2;
pub const CAMERA_RADIUS: f32 = 9.0;
pub const CAMERA_TARGET: Vec3 = Vec3::ZERO;
pub const CAMERA_NEAR: f32 = 0.001;

/// Orbit radius limits for wheel zoom
pub const CAMERA_MIN_RADIUS: f32 = 1.0;
pub const CAMERA_MAX_RADIUS: f32 = 100.0;

/// Radians of orbit per pixel of mouse drag
pub const CAMERA_ROTATE_SENSITIVITY: f32 = 0.005;

/// Hemispheric light intensity, split into sky ambient and a downward key light
pub const LIGHT_INTENSITY: f32 = 0.7;

pub const MARKER_RADIUS: f32 = 0.2;
pub const MARKER_SUBDIVISIONS: u32 = 1;
pub const MARKER_COLOUR: Color = Color::srgb(1.0, 0.0, 0.0);

pub const LOOK_BUTTON_LABEL: &str = "Look Up, Down";
