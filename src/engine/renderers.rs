//! Renderer collaborators.
//!
//! The engine draws through two host-provided renderers that share one
//! camera: a 3D scene renderer and an overlay renderer that positions
//! label/content panels in the same coordinate space.

use crate::camera::Camera;
use crate::scene::SceneGraph;

/// Output surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Viewport of `width` x `height` pixels.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height; 1.0 for a degenerate viewport.
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Whether the viewport is narrower than `breakpoint`.
    pub fn is_compact(&self, breakpoint: u32) -> bool {
        self.width < breakpoint
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

/// Draws the 3D scene.
pub trait SceneRenderer {
    /// Resize the output surface.
    fn set_size(&mut self, viewport: Viewport);
    /// Draw one frame.
    fn render(&mut self, scene: &SceneGraph, camera: &Camera);
    /// Release the output surface. No frames are drawn afterwards.
    fn release(&mut self);
}

/// Positions the label and content overlays in 3D space.
pub trait OverlayRenderer {
    /// Resize the output surface.
    fn set_size(&mut self, viewport: Viewport);
    /// Lay out every visible overlay for one frame.
    fn render(&mut self, scene: &SceneGraph, camera: &Camera);
    /// Release the output surface. No frames are drawn afterwards.
    fn release(&mut self);
}

/// Both renderers, driven in lock-step.
pub(crate) struct Renderers {
    scene: Box<dyn SceneRenderer>,
    overlay: Box<dyn OverlayRenderer>,
}

impl Renderers {
    pub(crate) fn new(
        scene: Box<dyn SceneRenderer>,
        overlay: Box<dyn OverlayRenderer>,
    ) -> Self {
        Self { scene, overlay }
    }

    pub(crate) fn set_size(&mut self, viewport: Viewport) {
        self.scene.set_size(viewport);
        self.overlay.set_size(viewport);
    }

    pub(crate) fn render(&mut self, scene: &SceneGraph, camera: &Camera) {
        self.scene.render(scene, camera);
        self.overlay.render(scene, camera);
    }

    pub(crate) fn release(&mut self) {
        self.scene.release();
        self.overlay.release();
    }
}
