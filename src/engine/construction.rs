//! Engine construction.

use super::renderers::{OverlayRenderer, Renderers, SceneRenderer, Viewport};
use super::Orrery;
use crate::camera::{Camera, OrbitBounds, OrbitControls};
use crate::error::OrreryError;
use crate::navigation::{Navigator, Stage};
use crate::options::Options;
use crate::scene::{AssetSource, NoAssets, SceneGraph};
use crate::util::frame_timing::FrameTiming;

/// Collects the collaborators an [`Orrery`] needs.
///
/// Both renderers are required. Without an asset source every body keeps
/// its flat fallback colour.
#[derive(Default)]
pub struct OrreryBuilder {
    options: Options,
    scene_renderer: Option<Box<dyn SceneRenderer>>,
    overlay_renderer: Option<Box<dyn OverlayRenderer>>,
    assets: Option<Box<dyn AssetSource>>,
    viewport: Viewport,
}

impl OrreryBuilder {
    /// Builder with default options and a 1280x720 viewport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `options` instead of the defaults.
    #[must_use]
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// The 3D scene renderer.
    #[must_use]
    pub fn scene_renderer(mut self, renderer: impl SceneRenderer + 'static) -> Self {
        self.scene_renderer = Some(Box::new(renderer));
        self
    }

    /// The overlay renderer.
    #[must_use]
    pub fn overlay_renderer(
        mut self,
        renderer: impl OverlayRenderer + 'static,
    ) -> Self {
        self.overlay_renderer = Some(Box::new(renderer));
        self
    }

    /// Where textures come from.
    #[must_use]
    pub fn assets(mut self, source: impl AssetSource + 'static) -> Self {
        self.assets = Some(Box::new(source));
        self
    }

    /// Initial viewport. Also picks the compact overlay layout when the
    /// width is below the configured breakpoint.
    #[must_use]
    pub fn viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport = Viewport::new(width, height);
        self
    }

    /// Build the scene, snap to the overview and start the render loop.
    ///
    /// # Errors
    ///
    /// [`OrreryError::MissingCollaborator`] if either renderer was not
    /// provided, [`OrreryError::InvalidSection`] if a section record is
    /// unusable. Nothing is started on error.
    pub fn build(self) -> Result<Orrery, OrreryError> {
        let scene_renderer = self
            .scene_renderer
            .ok_or(OrreryError::MissingCollaborator("scene renderer"))?;
        let overlay_renderer = self
            .overlay_renderer
            .ok_or(OrreryError::MissingCollaborator("overlay renderer"))?;
        let options = self.options;
        options.validate()?;

        let viewport = self.viewport;
        let compact = viewport.is_compact(options.layout.compact_breakpoint);
        let scene = SceneGraph::build(&options, compact);

        let mut assets = self.assets.unwrap_or_else(|| Box::new(NoAssets));
        scene.request_assets(&mut *assets);

        let camera = Camera::new(&options.camera, viewport.aspect());
        let controls = OrbitControls::new(
            &options.camera,
            OrbitBounds::overview(&options.layout),
        );
        let mut navigator = Navigator::new(
            Stage::new(scene, camera, controls),
            options.timing.clone(),
            options.layout.clone(),
        );
        let _ = navigator.enter_overview(true);

        let mut renderers = Renderers::new(scene_renderer, overlay_renderer);
        renderers.set_size(viewport);

        log::info!(
            "orrery started: {} sections, {}x{} ({})",
            options.sections.len(),
            viewport.width,
            viewport.height,
            if compact { "compact" } else { "wide" }
        );

        Ok(Orrery {
            navigator,
            renderers,
            assets,
            options,
            viewport,
            frame_timing: FrameTiming::new(),
            started: web_time::Instant::now(),
            running: true,
        })
    }
}
