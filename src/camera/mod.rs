//! Camera system for the navigator.
//!
//! A perspective [`Camera`] plus the [`OrbitControls`] that let the user
//! look around the current target once a transition has settled.

/// Damped orbit controller with distance and polar limits.
pub mod controller;
/// Core camera struct and matrices.
pub mod core;

pub use self::controller::{OrbitBounds, OrbitControls};
pub use self::core::Camera;
