//! Arc-rotate camera orbiting the scene origin.
//!
//! Left-drag orbits, the scroll wheel zooms.

/// Orbit camera resource, spawn helper and controller system.
pub mod orbit_camera;
