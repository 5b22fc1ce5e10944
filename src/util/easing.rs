//! Easing curves for tweens.
//!
//! Every tween maps its raw progress through one of these curves. Each
//! curve fixes 0 and 1.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shape of a tween's progress over time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Constant speed.
    Linear,
    /// Accelerates from rest.
    QuadraticIn,
    /// Decelerates to rest.
    QuadraticOut,
    /// Accelerates through the first half, decelerates through the second.
    QuadraticInOut,
}

impl EasingFunction {
    /// Curve used for slides, camera moves and overlay fades.
    pub const DEFAULT: Self = Self::QuadraticInOut;

    /// Eased progress for raw progress `t`, both in [0, 1]. Out-of-range
    /// input is clamped.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => t * (2.0 - t),
            Self::QuadraticInOut if t < 0.5 => 2.0 * t * t,
            Self::QuadraticInOut => {
                let rest = 1.0 - t;
                1.0 - 2.0 * rest * rest
            }
        }
    }
}

impl Default for EasingFunction {
    fn default() -> Self {
        Self::DEFAULT
    }
}
