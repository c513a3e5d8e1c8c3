use bevy::math::Vec3;

/// Target position at scene start
pub const TARGET_START: Vec3 = Vec3::ZERO;

/// Vertical step applied per advance
pub const TARGET_STEP: f32 = 0.5;

/// Once y reaches this height the next advance wraps
pub const TARGET_MAX_Y: f32 = 2.0;

/// Height the target wraps back to
pub const TARGET_MIN_Y: f32 = -2.0;
