//! Remote glTF loading for follower models.
//!
//! Requests one model per follower, polls the asset server for completion
//! and hands finished loads to the follower binding step.

/// Model request, load polling and failure tracking.
///
/// Turns a completed load into `ModelReady`, or a failed one into `LoadFailure`.
pub mod model_loader;

/// Bounding extent of loaded meshes and uniform scaling to a target size.
pub mod model_bounds;
