//! Navigation between the overview and the ordered sections.
//!
//! - [`Navigator`] - the state machine; accepts previous/next/overview/
//!   section requests and sequences their animations
//! - [`Stage`] - scene, camera, orbit controls and tweens the navigator
//!   animates
//! - [`NavigationState`] / [`NavControls`] - observable state
//!
//! Overlay fades and the camera/look-at animator are internal building
//! blocks; each returns a [`Join`](crate::animation::Join) that the
//! transition phases wait on.

mod camera_animator;
mod fade;
pub mod navigator;
pub mod stage;
pub mod state;
mod transition;

pub use navigator::Navigator;
pub use stage::Stage;
pub use state::{NavControls, NavigationState, View};
