//! Core application setup.
//!
//! Handles plugin registration, window configuration and system ordering
//! for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the follower pipeline, look control UI,
/// orbit camera and web RPC bridge.
pub mod app_setup;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
