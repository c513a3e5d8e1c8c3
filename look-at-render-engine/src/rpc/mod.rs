//! JSON-RPC 2.0 bridge to a hosting web page.
//!
//! When the engine runs inside an iframe, the parent page can query the
//! scene and receives notifications as it changes. The bridge is read-only:
//! the look button stays the only way to move the target.
//!
//! ## Message Flow
//!
//! ```text
//! Parent page  <──postMessage──>  Bevy (iframe)
//!      │                                │
//!      ├─ Request (with ID) ──────────> │
//!      │ <──────────── Response (ID) ───┤
//!      │ <────── Notification (no ID) ──┤
//! ```
//!
//! ## Methods
//! - `get_target`: current target position
//! - `get_followers`: id, spawn point and load state of every follower
//!
//! ## Notifications
//! - `target_changed`: `{x, y, z}` after every advance
//! - `follower_bound`: `{id, target}` when a model binds
//! - `follower_load_failed`: `{id, error}` when a model load fails
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32600`: Invalid request
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//! - `-32603`: Internal error

/// JSON-RPC 2.0 bidirectional communication system.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;
