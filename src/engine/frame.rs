//! Render loop driver, resize and teardown.

use std::time::Duration;

use super::renderers::Viewport;
use super::Orrery;

impl Orrery {
    /// Run one frame on the wall clock.
    pub fn frame(&mut self) {
        let now = self.started.elapsed();
        self.frame_at(now);
    }

    /// Run one frame at `now`, measured from an arbitrary fixed origin.
    ///
    /// Applies finished asset loads, advances every tween and transition,
    /// spins idle bodies, integrates the orbit controls when they are
    /// enabled and draws with both renderers. Runs regardless of navigation
    /// state; does nothing after [`teardown`](Self::teardown).
    pub fn frame_at(&mut self, now: Duration) {
        if !self.running {
            return;
        }
        let dt = self.frame_timing.begin_frame(now);

        for event in self.assets.poll() {
            self.navigator.stage_mut().scene_mut().apply_asset(event);
        }

        self.navigator.tick(now);

        let overview_shown = self.navigator.state().is_overview();
        let stage = self.navigator.stage_mut();
        stage.spin_idle(overview_shown, dt, &self.options.scene);
        let _ = stage.controls.update(&mut stage.camera);

        log::trace!(
            "frame {} ({} tweens)",
            self.frame_timing.frame_count(),
            stage.tweens().active_count()
        );
        self.renderers.render(stage.scene(), stage.camera());
    }

    /// New viewport size: updates the camera aspect and both renderers.
    /// An in-flight transition carries on untouched.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        self.navigator.stage_mut().camera.set_viewport(width, height);
        self.renderers.set_size(self.viewport);
    }

    /// Stop the render loop and release both renderers' surfaces.
    /// Idempotent.
    pub fn teardown(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.renderers.release();
        log::info!(
            "orrery stopped after {} frames",
            self.frame_timing.frame_count()
        );
    }
}
