//! Shared scene constants for the look-at render engine.

pub mod model;
pub mod scene;
pub mod target;
