//! Tween engine and animation joins.
//!
//! Every animated property in the navigator (camera, look-at target,
//! section slides, overlay fades, the intro hint) is a [`Tween`] in one
//! shared [`TweenEngine`]. Concurrent animations are independent tweens
//! advanced by the same clock tick; a transition step waits on a [`Join`]
//! over everything it started.

pub mod join;
pub mod tween;

pub use join::Join;
pub use tween::{
    ScalarTarget, Tween, TweenEngine, TweenId, TweenSample, VectorTarget,
};
