//! Platform-agnostic input events and navigation actions.
//!
//! Hosts translate their window or DOM events into [`InputEvent`]s and feed
//! them to [`Orrery::handle_input`](crate::engine::Orrery::handle_input).
//! Only the previous/next triggers reach the navigator; pointer drags and
//! scrolls go to the orbit controls, which ignore them mid-transition.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Discrete navigation actions that can be bound to keys or buttons.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// next = "ArrowRight"
/// previous = "ArrowLeft"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavAction {
    /// Step toward the overview.
    Previous,
    /// Step toward the last section.
    Next,
    /// Return straight to the overview.
    Overview,
}

/// Platform-agnostic input events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The "previous" control was activated.
    Previous,
    /// The "next" control was activated.
    Next,
    /// Pointer dragged with the primary button held, in pixels.
    Drag {
        /// Horizontal and vertical movement.
        delta: Vec2,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount.
        delta: f32,
    },
}
