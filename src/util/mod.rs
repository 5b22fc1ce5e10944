//! Shared utilities for the navigator.
//!
//! Easing curves for tweens and frame timing for the render loop.

pub mod easing;
pub mod frame_timing;
