//! Interactive controls layered over the scene.

/// "Look Up, Down" button that steps the shared target.
pub mod look_control;
