//! The mutable world a transition animates: scene, camera, orbit controls
//! and the tween clock that drives them.

use std::time::Duration;

use glam::Vec3;

use crate::animation::{
    ScalarTarget, Tween, TweenEngine, TweenId, TweenSample, VectorTarget,
};
use crate::camera::{Camera, OrbitControls};
use crate::options::SceneOptions;
use crate::scene::SceneGraph;
use crate::util::easing::EasingFunction;

/// Scene plus camera rig plus tweens, owned by the navigator.
#[derive(Debug)]
pub struct Stage {
    pub(crate) scene: SceneGraph,
    pub(crate) camera: Camera,
    pub(crate) controls: OrbitControls,
    pub(crate) tweens: TweenEngine,
}

impl Stage {
    /// Assemble a stage.
    #[must_use]
    pub fn new(
        scene: SceneGraph,
        camera: Camera,
        controls: OrbitControls,
    ) -> Self {
        Self {
            scene,
            camera,
            controls,
            tweens: TweenEngine::new(),
        }
    }

    /// The scene graph.
    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    /// Mutable scene access, for asset results.
    pub fn scene_mut(&mut self) -> &mut SceneGraph {
        &mut self.scene
    }

    /// The camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The orbit controls.
    pub fn controls(&self) -> &OrbitControls {
        &self.controls
    }

    /// The tween engine.
    pub fn tweens(&self) -> &TweenEngine {
        &self.tweens
    }

    /// Advance the tween clock to `now` and write every sample into the
    /// scene.
    pub(crate) fn advance_tweens(&mut self, now: Duration) {
        for sample in self.tweens.tick(now) {
            self.apply(sample);
        }
    }

    /// Write one tween sample.
    ///
    /// Look-at samples move the orbit target and re-aim the camera on the
    /// same frame; the orbit controls read the target continuously.
    pub(crate) fn apply(&mut self, sample: TweenSample) {
        match sample {
            TweenSample::Vector(VectorTarget::CameraPosition, v) => {
                self.camera.eye = v;
            }
            TweenSample::Vector(VectorTarget::LookAt, v) => {
                self.controls.set_target(v);
                self.camera.look_at(v);
            }
            TweenSample::Vector(VectorTarget::SectionPosition(i), v) => {
                if let Some(section) = self.scene.section_mut(i) {
                    section.set_position(v);
                }
            }
            TweenSample::Scalar(ScalarTarget::LabelOpacity(i), v) => {
                if let Some(section) = self.scene.section_mut(i) {
                    section.label_mut().set_opacity(v);
                }
            }
            TweenSample::Scalar(ScalarTarget::ContentOpacity(i), v) => {
                if let Some(section) = self.scene.section_mut(i) {
                    section.content_mut().set_opacity(v);
                }
            }
            TweenSample::Scalar(ScalarTarget::HintOpacity, v) => {
                self.scene.hint_mut().set_opacity(v);
            }
        }
    }

    /// Slide section `index` from where it is to `to`.
    pub(crate) fn slide_section(
        &mut self,
        index: usize,
        to: Vec3,
        duration: Duration,
        easing: EasingFunction,
    ) -> Option<TweenId> {
        let from = self.scene.section(index)?.position();
        Some(self.tweens.start(
            Tween::vector(VectorTarget::SectionPosition(index), from, to, duration)
                .with_easing(easing),
        ))
    }

    /// Place section `index` immediately.
    pub(crate) fn place_section(
        &mut self,
        index: usize,
        position: Vec3,
        visible: bool,
    ) {
        if let Some(section) = self.scene.section_mut(index) {
            section.set_position(position);
            section.set_visible(visible);
        }
    }

    /// Set both overlay opacities of section `index` immediately.
    pub(crate) fn set_overlay_opacity(&mut self, index: usize, opacity: f32) {
        if let Some(section) = self.scene.section_mut(index) {
            section.label_mut().set_opacity(opacity);
            section.content_mut().set_opacity(opacity);
        }
    }

    /// Jump the camera and orbit target to a pose.
    pub(crate) fn snap_camera(&mut self, eye: Vec3, look_at: Vec3) {
        self.camera.eye = eye;
        self.controls.set_target(look_at);
        self.camera.look_at(look_at);
    }

    /// Idle rotation for one frame of `dt`. The overview body only spins
    /// while the overview is shown and the orbit controls are live;
    /// every visible planet spins.
    pub(crate) fn spin_idle(
        &mut self,
        overview_shown: bool,
        dt: Duration,
        options: &SceneOptions,
    ) {
        let dt = dt.as_secs_f32();
        if overview_shown && self.controls.is_enabled() {
            self.scene.overview_mut().add_spin(options.overview_spin * dt);
        }
        for section in self.scene.sections_mut() {
            if section.is_visible() {
                section.add_spin(options.planet_spin * dt);
            }
        }
    }
}
