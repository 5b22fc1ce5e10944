//! Scene graph store.
//!
//! Holds everything the renderers draw: the central overview body, the
//! background star field, the intro hint overlay and the ordered sections.
//! Sections are created once, in display order, and are never reordered or
//! destroyed during a session.

pub mod assets;
/// Sections, their overlays and surface materials.
pub mod section;
/// Seeded background star field.
pub mod star_field;

use std::f32::consts::TAU;

use glam::Vec3;
use rustc_hash::FxHashMap;

pub use self::assets::{
    AssetEvent, AssetKey, AssetSource, DirectoryAssets, NoAssets,
    TextureHandle,
};
pub use self::section::{AssetStatus, Overlay, Section, SurfaceMaterial};
pub use self::star_field::StarField;
use crate::options::Options;

/// The central body shown in the overview.
#[derive(Debug, Clone)]
pub struct OverviewBody {
    radius: f32,
    visual_asset: String,
    spin: f32,
    material: SurfaceMaterial,
}

impl OverviewBody {
    /// Body radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Texture path.
    pub fn visual_asset(&self) -> &str {
        &self.visual_asset
    }

    /// Accumulated idle rotation, radians.
    pub fn spin(&self) -> f32 {
        self.spin
    }

    /// Surface material.
    pub fn material(&self) -> &SurfaceMaterial {
        &self.material
    }

    pub(crate) fn add_spin(&mut self, radians: f32) {
        self.spin = (self.spin + radians) % TAU;
    }
}

/// "Use the arrows" hint shown until the first navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct HintOverlay {
    opacity: f32,
    visible: bool,
}

impl HintOverlay {
    /// Current opacity.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Whether the hint is laid out at all.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    pub(crate) fn hide(&mut self) {
        self.opacity = 0.0;
        self.visible = false;
    }
}

/// Everything in the 3D scene.
#[derive(Debug, Clone)]
pub struct SceneGraph {
    overview: OverviewBody,
    stars: StarField,
    hint: HintOverlay,
    sections: Vec<Section>,
    index: FxHashMap<String, usize>,
    compact: bool,
}

impl SceneGraph {
    /// Construct the scene from options. Sections start hidden in the
    /// right-hand off-screen slot with both overlays transparent. `compact`
    /// selects the narrow-viewport overlay layout.
    ///
    /// Section records are assumed valid (see
    /// [`Options::validate`](crate::options::Options::validate)).
    #[must_use]
    pub fn build(options: &Options, compact: bool) -> Self {
        let layout = &options.layout;
        let parked = Vec3::new(
            layout.slide_offset_x,
            layout.section_y,
            layout.section_z,
        );

        let sections: Vec<Section> = options
            .sections
            .iter()
            .map(|record| Section::from_record(record, parked, compact))
            .collect();
        let index = sections
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id().to_owned(), i))
            .collect();

        log::debug!(
            "scene built: {} sections, {} stars, {} layout",
            sections.len(),
            options.scene.star_count,
            if compact { "compact" } else { "wide" }
        );

        Self {
            overview: OverviewBody {
                radius: options.scene.overview_radius,
                visual_asset: options.scene.overview_asset.clone(),
                spin: 0.0,
                material: SurfaceMaterial::new(options.scene.overview_color),
            },
            stars: StarField::generate(&options.scene),
            hint: HintOverlay {
                opacity: 1.0,
                visible: true,
            },
            sections,
            index,
            compact,
        }
    }

    /// Ask `source` for every texture the scene uses.
    pub fn request_assets(&self, source: &mut dyn AssetSource) {
        source.request(AssetKey::Overview, &self.overview.visual_asset);
        for (i, section) in self.sections.iter().enumerate() {
            source.request(AssetKey::Section(i), section.visual_asset());
        }
    }

    /// Apply a finished asset load. Failures are logged and leave the
    /// fallback colour in place.
    pub fn apply_asset(&mut self, event: AssetEvent) {
        if let Err(e) = &event.result {
            log::error!("texture load error for {:?}: {e}", event.key);
        }
        let material = match event.key {
            AssetKey::Overview => &mut self.overview.material,
            AssetKey::Section(i) => match self.sections.get_mut(i) {
                Some(section) => section.material_mut(),
                None => {
                    log::warn!("asset result for unknown section {i}");
                    return;
                }
            },
        };
        material.apply(event.result);
    }

    /// The overview body.
    pub fn overview(&self) -> &OverviewBody {
        &self.overview
    }

    /// Background stars.
    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    /// Intro hint overlay.
    pub fn hint(&self) -> &HintOverlay {
        &self.hint
    }

    /// Sections in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section at `index`.
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Index of the section with the given id.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether there are no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Whether the compact overlay layout is in use.
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Sections currently drawn.
    pub fn visible_sections(&self) -> impl Iterator<Item = &Section> + '_ {
        self.sections.iter().filter(|s| s.is_visible())
    }

    pub(crate) fn section_mut(&mut self, index: usize) -> Option<&mut Section> {
        self.sections.get_mut(index)
    }

    pub(crate) fn overview_mut(&mut self) -> &mut OverviewBody {
        &mut self.overview
    }

    pub(crate) fn hint_mut(&mut self) -> &mut HintOverlay {
        &mut self.hint
    }

    pub(crate) fn sections_mut(&mut self) -> &mut [Section] {
        &mut self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssetError;

    fn small_options() -> Options {
        let mut options = Options::default();
        options.scene.star_count = 16;
        options
    }

    #[test]
    fn build_keeps_display_order() {
        let scene = SceneGraph::build(&small_options(), false);
        let ids: Vec<_> = scene.sections().iter().map(Section::id).collect();
        assert_eq!(
            ids,
            ["about", "projects", "experience", "skills", "contact"]
        );
        assert_eq!(scene.index_of("skills"), Some(3));
        assert_eq!(scene.index_of("blog"), None);
        assert_eq!(scene.visible_sections().count(), 0);
        assert!(scene.hint().is_visible());
        assert_eq!(scene.stars().points().len(), 16);
    }

    #[test]
    fn sections_start_in_the_right_hand_slot() {
        let options = small_options();
        let scene = SceneGraph::build(&options, false);
        for section in scene.sections() {
            assert_eq!(section.position().x, options.layout.slide_offset_x);
            assert_eq!(section.position().z, options.layout.section_z);
        }
    }

    #[test]
    fn requests_every_asset_once() {
        struct Recorder(Vec<(AssetKey, String)>);
        impl AssetSource for Recorder {
            fn request(&mut self, key: AssetKey, path: &str) {
                self.0.push((key, path.to_owned()));
            }
            fn poll(&mut self) -> Vec<AssetEvent> {
                Vec::new()
            }
        }

        let scene = SceneGraph::build(&small_options(), false);
        let mut recorder = Recorder(Vec::new());
        scene.request_assets(&mut recorder);
        assert_eq!(recorder.0.len(), 6);
        assert_eq!(recorder.0[0].0, AssetKey::Overview);
        assert_eq!(
            recorder.0[2],
            (AssetKey::Section(1), "/planet_projects.jpg".to_owned())
        );
    }

    #[test]
    fn asset_failure_falls_back_and_success_textures() {
        let mut scene = SceneGraph::build(&small_options(), false);
        scene.apply_asset(AssetEvent {
            key: AssetKey::Section(0),
            result: Err(AssetError::new("/planet_about.jpg", "404")),
        });
        scene.apply_asset(AssetEvent {
            key: AssetKey::Overview,
            result: Ok(TextureHandle {
                path: "/2k_earth_daymap.jpg".into(),
                byte_len: 42,
            }),
        });
        // Out-of-range keys are ignored.
        scene.apply_asset(AssetEvent {
            key: AssetKey::Section(99),
            result: Err(AssetError::new("/x.jpg", "404")),
        });

        let about = scene.section(0).unwrap();
        assert_eq!(about.material().status(), AssetStatus::Failed);
        assert_eq!(about.material().color(), 0xcc6633);
        assert_eq!(scene.overview().material().status(), AssetStatus::Loaded);
    }
}
