//! Engine lifecycle and per-frame driver.
//!
//! [`Orrery`] ties the navigator to its host: it is built once with both
//! renderers (see [`OrreryBuilder`]), fed input and key presses, driven by
//! [`frame`](Orrery::frame) once per display refresh and finally torn down.

mod command;
mod construction;
mod frame;
mod input;
mod renderers;

pub use command::NavCommand;
pub use construction::OrreryBuilder;
pub use renderers::{OverlayRenderer, SceneRenderer, Viewport};

use self::renderers::Renderers;
use crate::camera::{Camera, OrbitControls};
use crate::navigation::{NavControls, NavigationState, Navigator};
use crate::options::Options;
use crate::scene::{AssetSource, SceneGraph};
use crate::util::frame_timing::FrameTiming;

/// The navigation engine: scene, camera rig, navigator and renderers.
pub struct Orrery {
    pub(crate) navigator: Navigator,
    pub(crate) renderers: Renderers,
    pub(crate) assets: Box<dyn AssetSource>,
    pub(crate) options: Options,
    pub(crate) viewport: Viewport,
    pub(crate) frame_timing: FrameTiming,
    pub(crate) started: web_time::Instant,
    pub(crate) running: bool,
}

impl Orrery {
    /// Start configuring an engine.
    #[must_use]
    pub fn builder() -> OrreryBuilder {
        OrreryBuilder::new()
    }

    // ── State ──

    /// Current navigation state.
    pub fn state(&self) -> NavigationState {
        self.navigator.state()
    }

    /// Which of the previous/next controls are enabled.
    pub fn nav_controls(&self) -> NavControls {
        self.navigator.nav_controls()
    }

    /// Whether frames are still being drawn.
    pub fn is_running(&self) -> bool {
        self.running
    }

    // ── Scene access ──

    /// Read-only access to the scene graph.
    pub fn scene(&self) -> &SceneGraph {
        self.navigator.stage().scene()
    }

    /// The shared camera.
    pub fn camera(&self) -> &Camera {
        self.navigator.stage().camera()
    }

    /// The orbit controls.
    pub fn controls(&self) -> &OrbitControls {
        self.navigator.stage().controls()
    }

    // ── Configuration ──

    /// Options the engine was built with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Smoothed frames per second.
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    use glam::Vec2;

    use super::*;
    use crate::error::{AssetError, OrreryError};
    use crate::input::InputEvent;
    use crate::navigation::View;
    use crate::scene::{AssetEvent, AssetKey, AssetStatus};

    #[derive(Default, Clone)]
    struct Recorder {
        frames: Rc<Cell<u32>>,
        size: Rc<Cell<Option<Viewport>>>,
        released: Rc<Cell<bool>>,
    }

    impl SceneRenderer for Recorder {
        fn set_size(&mut self, viewport: Viewport) {
            self.size.set(Some(viewport));
        }
        fn render(&mut self, _scene: &SceneGraph, _camera: &Camera) {
            self.frames.set(self.frames.get() + 1);
        }
        fn release(&mut self) {
            self.released.set(true);
        }
    }

    impl OverlayRenderer for Recorder {
        fn set_size(&mut self, viewport: Viewport) {
            self.size.set(Some(viewport));
        }
        fn render(&mut self, _scene: &SceneGraph, _camera: &Camera) {
            self.frames.set(self.frames.get() + 1);
        }
        fn release(&mut self) {
            self.released.set(true);
        }
    }

    /// Hands every requested section a failure, one poll later.
    #[derive(Default)]
    struct FailingAssets {
        queued: Rc<RefCell<Vec<AssetKey>>>,
    }

    impl AssetSource for FailingAssets {
        fn request(&mut self, key: AssetKey, _path: &str) {
            self.queued.borrow_mut().push(key);
        }
        fn poll(&mut self) -> Vec<AssetEvent> {
            self.queued
                .borrow_mut()
                .drain(..)
                .map(|key| AssetEvent {
                    key,
                    result: Err(AssetError::new("missing", "not found")),
                })
                .collect()
        }
    }

    const FRAME: Duration = Duration::from_millis(16);

    struct Harness {
        engine: Orrery,
        scene_recorder: Recorder,
        overlay_recorder: Recorder,
        now: Duration,
    }

    impl Harness {
        fn new(sections: usize) -> Self {
            let mut options = Options::default();
            options.scene.star_count = 32;
            options.sections.truncate(sections);
            Self::with_options(options, 1280)
        }

        fn with_options(options: Options, width: u32) -> Self {
            let scene_recorder = Recorder::default();
            let overlay_recorder = Recorder::default();
            let engine = Orrery::builder()
                .options(options)
                .scene_renderer(scene_recorder.clone())
                .overlay_renderer(overlay_recorder.clone())
                .viewport(width, 720)
                .build()
                .unwrap();
            Self {
                engine,
                scene_recorder,
                overlay_recorder,
                now: Duration::ZERO,
            }
        }

        fn frames(&mut self, n: u32) {
            for _ in 0..n {
                self.now += FRAME;
                self.engine.frame_at(self.now);
            }
        }

        fn settle(&mut self) {
            for _ in 0..1000 {
                if !self.engine.state().transitioning {
                    return;
                }
                self.frames(1);
            }
            panic!("transition never settled");
        }
    }

    #[test]
    fn build_requires_both_renderers() {
        let result = Orrery::builder().scene_renderer(Recorder::default()).build();
        assert!(matches!(
            result,
            Err(OrreryError::MissingCollaborator("overlay renderer"))
        ));
        let result = Orrery::builder().overlay_renderer(Recorder::default()).build();
        assert!(matches!(
            result,
            Err(OrreryError::MissingCollaborator("scene renderer"))
        ));
    }

    #[test]
    fn build_rejects_invalid_sections() {
        let mut options = Options::default();
        options.sections[1].id = options.sections[0].id.clone();
        let result = Orrery::builder()
            .options(options)
            .scene_renderer(Recorder::default())
            .overlay_renderer(Recorder::default())
            .build();
        assert!(matches!(result, Err(OrreryError::InvalidSection(_))));
    }

    #[test]
    fn starts_settled_in_the_overview() {
        let harness = Harness::new(3);
        let engine = &harness.engine;
        assert!(engine.is_running());
        assert_eq!(engine.state(), NavigationState::OVERVIEW);
        assert!(engine.controls().is_enabled());
        assert_eq!(engine.camera().eye, engine.options().layout.overview_camera());
        assert_eq!(
            harness.scene_recorder.size.get(),
            Some(Viewport::new(1280, 720))
        );
        assert!(!engine.scene().is_compact());
    }

    #[test]
    fn narrow_viewport_selects_compact_layout() {
        let harness = Harness::with_options(Options::default(), 600);
        assert!(harness.engine.scene().is_compact());
    }

    #[test]
    fn every_frame_draws_both_layers() {
        let mut harness = Harness::new(2);
        harness.frames(5);
        assert!(harness.engine.execute(NavCommand::Next));
        harness.frames(5);
        assert_eq!(harness.scene_recorder.frames.get(), 10);
        assert_eq!(harness.overlay_recorder.frames.get(), 10);
    }

    #[test]
    fn three_sections_forward_and_back() {
        let mut harness = Harness::new(3);

        assert!(harness.engine.handle_input(InputEvent::Next));
        harness.settle();
        assert_eq!(harness.engine.state().view, View::Section(0));
        let controls = harness.engine.nav_controls();
        assert!(controls.previous_enabled && controls.next_enabled);

        for _ in 0..2 {
            assert!(harness.engine.handle_input(InputEvent::Next));
            harness.settle();
        }
        assert_eq!(harness.engine.state().view, View::Section(2));
        let controls = harness.engine.nav_controls();
        assert!(controls.previous_enabled && !controls.next_enabled);

        for _ in 0..3 {
            assert!(harness.engine.handle_input(InputEvent::Previous));
            harness.settle();
        }
        assert_eq!(harness.engine.state(), NavigationState::OVERVIEW);
        assert!(!harness.engine.nav_controls().previous_enabled);
    }

    #[test]
    fn no_sections_means_next_does_nothing() {
        let mut harness = Harness::new(0);
        assert!(!harness.engine.execute(NavCommand::Next));
        harness.frames(3);
        assert_eq!(harness.engine.state(), NavigationState::OVERVIEW);
    }

    #[test]
    fn second_request_mid_transition_has_no_effect() {
        let mut harness = Harness::new(3);
        assert!(harness.engine.execute(NavCommand::Next));
        harness.frames(20);
        let before = harness.engine.state();
        assert!(!harness.engine.execute(NavCommand::Next));
        assert!(!harness.engine.execute(NavCommand::Section(2)));
        assert!(!harness.engine.handle_key("Home"));
        assert_eq!(harness.engine.state(), before);

        harness.settle();
        assert_eq!(harness.engine.state().view, View::Section(0));
    }

    #[test]
    fn keys_follow_the_bindings() {
        let mut harness = Harness::new(3);
        assert!(harness.engine.handle_key("ArrowRight"));
        harness.settle();
        assert!(!harness.engine.handle_key("q"));
        assert!(harness.engine.handle_key("Home"));
        harness.settle();
        assert!(harness.engine.state().is_overview());
    }

    #[test]
    fn orbit_input_is_ignored_mid_transition() {
        let mut harness = Harness::new(2);
        assert!(harness.engine.execute(NavCommand::Section(1)));
        harness.frames(10);
        let _ = harness.engine.handle_input(InputEvent::Drag {
            delta: Vec2::new(400.0, 0.0),
        });
        harness.settle();

        let section = harness.engine.scene().section(1).unwrap();
        let slot = harness.engine.options().layout.active_slot();
        let expected = section.camera_position_at(slot);
        assert!((harness.engine.camera().eye - expected).length() < 1e-3);
    }

    #[test]
    fn drag_orbits_once_settled() {
        let mut harness = Harness::new(1);
        let before = harness.engine.camera().eye;
        let _ = harness.engine.handle_input(InputEvent::Drag {
            delta: Vec2::new(200.0, 0.0),
        });
        harness.frames(30);
        assert!((harness.engine.camera().eye - before).length() > 0.1);
    }

    #[test]
    fn resize_keeps_the_transition_going() {
        let mut harness = Harness::new(2);
        assert!(harness.engine.execute(NavCommand::Next));
        harness.frames(10);
        harness.engine.resize(800, 1000);
        assert!(harness.engine.state().transitioning);
        assert!((harness.engine.camera().aspect - 0.8).abs() < 1e-6);
        assert_eq!(
            harness.overlay_recorder.size.get(),
            Some(Viewport::new(800, 1000))
        );
        harness.settle();
        assert_eq!(harness.engine.state().view, View::Section(0));
    }

    #[test]
    fn idle_spin_follows_view() {
        let mut harness = Harness::new(1);
        harness.frames(10);
        let overview_spin = harness.engine.scene().overview().spin();
        assert!(overview_spin > 0.0);

        assert!(harness.engine.execute(NavCommand::Next));
        harness.frames(10);
        // Controls are off mid-transition, so the overview body holds still.
        assert_eq!(harness.engine.scene().overview().spin(), overview_spin);
        assert!(harness.engine.scene().section(0).unwrap().spin() > 0.0);
    }

    #[test]
    fn failed_assets_fall_back_to_colour() {
        let mut options = Options::default();
        options.scene.star_count = 8;
        let engine = Orrery::builder()
            .options(options)
            .scene_renderer(Recorder::default())
            .overlay_renderer(Recorder::default())
            .assets(FailingAssets::default())
            .build()
            .unwrap();
        let mut harness = Harness {
            engine,
            scene_recorder: Recorder::default(),
            overlay_recorder: Recorder::default(),
            now: Duration::ZERO,
        };
        harness.frames(1);
        for section in harness.engine.scene().sections() {
            assert_eq!(section.material().status(), AssetStatus::Failed);
        }
        assert!(harness.engine.execute(NavCommand::Next));
        harness.settle();
        assert_eq!(harness.engine.state().view, View::Section(0));
    }

    #[test]
    fn teardown_stops_frames_and_releases_renderers() {
        let mut harness = Harness::new(2);
        harness.frames(3);
        harness.engine.teardown();
        harness.engine.teardown();
        assert!(!harness.engine.is_running());
        assert!(harness.scene_recorder.released.get());
        assert!(harness.overlay_recorder.released.get());

        harness.frames(5);
        assert_eq!(harness.scene_recorder.frames.get(), 3);
        assert!(!harness.engine.execute(NavCommand::Next));
    }
}
