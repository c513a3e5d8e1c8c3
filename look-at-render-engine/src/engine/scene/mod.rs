//! Static scene dressing: lighting and the target marker.

/// Hemispheric-style lighting built from ambient sky light and a downward key light.
pub mod lighting;

/// Red marker sphere that tracks the target.
pub mod target_marker;
