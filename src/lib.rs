// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! 3D overview-and-sections navigation engine.
//!
//! Orrery drives a camera through an overview of a central body and an
//! ordered line-up of "planet" sections, each with a label and a content
//! overlay. Transitions slide planets, fade overlays and move the camera
//! as concurrent tweens; only one transition runs at a time and requests
//! arriving mid-transition are dropped.
//!
//! # Key entry points
//!
//! - [`engine::Orrery`] - lifecycle, input and the per-frame driver
//! - [`navigation::Navigator`] - the navigation state machine
//! - [`scene::SceneGraph`] - overview body, stars, hint and sections
//! - [`options::Options`] - runtime configuration (timing, layout, camera,
//!   scene, keybindings, sections)
//! - [`animation`] - tween engine and joins
//!
//! # Architecture
//!
//! Everything is single-threaded. The host calls
//! [`engine::Orrery::frame`] once per display refresh; the frame advances
//! the shared tween clock, lets any transition whose join has settled run
//! its next step, spins idle bodies, integrates the orbit controls and
//! hands the scene to both renderers. Tests drive the same loop with
//! [`engine::Orrery::frame_at`] and synthetic timestamps.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod navigation;
pub mod options;
pub mod scene;
pub mod util;

pub use engine::{NavCommand, Orrery, OrreryBuilder};
pub use error::OrreryError;
