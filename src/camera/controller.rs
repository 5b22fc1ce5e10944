use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use crate::camera::core::Camera;
use crate::options::{CameraOptions, LayoutOptions};

/// Keeps the polar angle off the exact poles, where the azimuth is
/// undefined.
const POLE_EPSILON: f32 = 1e-4;

/// Orbit distance and polar-angle limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitBounds {
    /// Closest allowed distance to the target.
    pub min_distance: f32,
    /// Farthest allowed distance to the target.
    pub max_distance: f32,
    /// Smallest polar angle (0 = looking straight down).
    pub min_polar: f32,
    /// Largest polar angle (π = looking straight up).
    pub max_polar: f32,
}

impl OrbitBounds {
    /// Limits used while the overview is shown.
    pub fn overview(layout: &LayoutOptions) -> Self {
        Self {
            min_distance: layout.overview_min_distance,
            max_distance: layout.overview_max_distance,
            min_polar: 0.0,
            max_polar: PI,
        }
    }

    /// Limits used while a section with the given planet radius is shown.
    pub fn section(radius: f32, layout: &LayoutOptions) -> Self {
        Self {
            min_distance: radius + layout.section_min_distance_margin,
            max_distance: radius + layout.section_max_distance_margin,
            min_polar: layout.section_polar_margin,
            max_polar: PI - layout.section_polar_margin,
        }
    }
}

/// Input-driven orbit controller.
///
/// Orbits the camera around [`target`](Self::target) on a sphere, with
/// damped rotation, scroll zoom and distance/polar clamps. While disabled
/// it ignores input and [`update`](Self::update) is not called, so it can
/// never fight a camera tween.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    enabled: bool,
    target: Vec3,
    bounds: OrbitBounds,
    damping: f32,
    rotate_speed: f32,
    zoom_speed: f32,
    /// Remaining azimuth change, consumed gradually by damping.
    pending_theta: f32,
    /// Remaining polar change, consumed gradually by damping.
    pending_phi: f32,
    /// Distance multiplier accumulated since the last update.
    pending_scale: f32,
}

impl OrbitControls {
    /// Disabled controls aimed at the origin.
    #[must_use]
    pub fn new(options: &CameraOptions, bounds: OrbitBounds) -> Self {
        Self {
            enabled: false,
            target: Vec3::ZERO,
            bounds,
            damping: options.damping.clamp(0.0, 1.0),
            rotate_speed: options.rotate_speed,
            zoom_speed: options.zoom_speed,
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_scale: 1.0,
        }
    }

    /// Whether the controls respond to input and update the camera.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Point the camera orbits around.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Current distance and polar limits.
    pub fn bounds(&self) -> OrbitBounds {
        self.bounds
    }

    /// Enable or disable. Disabling drops any motion still being damped
    /// out.
    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.clear_pending();
        }
    }

    pub(crate) fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    pub(crate) fn set_bounds(&mut self, bounds: OrbitBounds) {
        self.bounds = bounds;
    }

    /// Queue a rotation from a pointer drag of `delta` pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        if !self.enabled {
            return;
        }
        self.pending_theta -= delta.x * self.rotate_speed;
        self.pending_phi -= delta.y * self.rotate_speed;
    }

    /// Queue a zoom (positive = closer).
    pub fn zoom(&mut self, delta: f32) {
        if !self.enabled {
            return;
        }
        self.pending_scale *= (1.0 - delta * self.zoom_speed).max(0.05);
    }

    /// Integrate pending motion and write the resulting pose into
    /// `camera`. Returns `false` (and leaves the camera alone) while
    /// disabled.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        if !self.enabled {
            return false;
        }

        let offset = camera.eye - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            camera.look_at(self.target);
            return true;
        }

        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        theta += self.pending_theta * self.damping;
        phi += self.pending_phi * self.damping;

        let min_polar = self.bounds.min_polar.max(POLE_EPSILON);
        let max_polar = self.bounds.max_polar.min(PI - POLE_EPSILON);
        phi = phi.clamp(min_polar, max_polar.max(min_polar));

        let radius = (radius * self.pending_scale).clamp(
            self.bounds.min_distance,
            self.bounds.max_distance.max(self.bounds.min_distance),
        );

        self.pending_theta *= 1.0 - self.damping;
        self.pending_phi *= 1.0 - self.damping;
        self.pending_scale = 1.0;

        let sin_phi = phi.sin();
        camera.eye = self.target
            + Vec3::new(
                radius * sin_phi * theta.sin(),
                radius * phi.cos(),
                radius * sin_phi * theta.cos(),
            );
        camera.look_at(self.target);
        true
    }

    fn clear_pending(&mut self) {
        self.pending_theta = 0.0;
        self.pending_phi = 0.0;
        self.pending_scale = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (OrbitControls, Camera) {
        let layout = LayoutOptions::default();
        let options = CameraOptions::default();
        let mut controls =
            OrbitControls::new(&options, OrbitBounds::overview(&layout));
        controls.set_enabled(true);
        let mut camera = Camera::new(&options, 1.0);
        camera.eye = layout.overview_camera();
        camera.look_at(layout.overview_target());
        (controls, camera)
    }

    #[test]
    fn update_without_input_keeps_the_pose() {
        let (mut controls, mut camera) = setup();
        let before = camera.eye;
        assert!(controls.update(&mut camera));
        assert!((camera.eye - before).length() < 1e-4);
        assert_eq!(camera.target, Vec3::ZERO);
    }

    #[test]
    fn disabled_controls_ignore_input_and_updates() {
        let (mut controls, mut camera) = setup();
        controls.set_enabled(false);
        controls.rotate(Vec2::new(300.0, 0.0));
        controls.zoom(5.0);
        let before = camera.clone();
        assert!(!controls.update(&mut camera));
        assert_eq!(camera, before);

        controls.set_enabled(true);
        let _ = controls.update(&mut camera);
        assert!((camera.eye - before.eye).length() < 1e-4);
    }

    #[test]
    fn drag_orbits_at_constant_distance() {
        let (mut controls, mut camera) = setup();
        let distance = camera.eye.distance(controls.target());
        controls.rotate(Vec2::new(200.0, 0.0));
        for _ in 0..30 {
            let _ = controls.update(&mut camera);
        }
        assert!((camera.eye.distance(controls.target()) - distance).abs() < 1e-3);
        assert!(camera.eye.x.abs() > 0.1, "camera should have swung sideways");
    }

    #[test]
    fn zoom_is_clamped_to_bounds() {
        let (mut controls, mut camera) = setup();
        for _ in 0..50 {
            controls.zoom(10.0);
            let _ = controls.update(&mut camera);
        }
        let min = controls.bounds().min_distance;
        assert!((camera.eye.distance(controls.target()) - min).abs() < 1e-3);
    }

    #[test]
    fn section_bounds_clamp_polar_angle() {
        let (mut controls, mut camera) = setup();
        let layout = LayoutOptions::default();
        controls.set_bounds(OrbitBounds::section(3.0, &layout));
        camera.eye = Vec3::new(0.0, 20.0, 0.5);
        let _ = controls.update(&mut camera);

        let offset = camera.eye - controls.target();
        let phi = (offset.y / offset.length()).acos();
        assert!((phi - layout.section_polar_margin).abs() < 1e-3);
        let distance = offset.length();
        assert!(distance <= 3.0 + layout.section_max_distance_margin + 1e-3);
    }

    #[test]
    fn disabling_drops_pending_motion() {
        let (mut controls, mut camera) = setup();
        let before = camera.eye;
        controls.rotate(Vec2::new(500.0, 100.0));
        controls.set_enabled(false);
        controls.set_enabled(true);
        let _ = controls.update(&mut camera);
        assert!((camera.eye - before).length() < 1e-4);
    }
}
