use std::f32::consts::PI;

use glam::Vec3;

use super::assets::TextureHandle;
use crate::error::AssetError;
use crate::options::SectionRecord;

/// Label overlay height above the planet's surface.
const LABEL_LIFT: f32 = 1.5;
/// Label overlay scale (overlay pixels to world units).
const LABEL_SCALE: f32 = 0.02;
/// Content overlay scale.
const CONTENT_SCALE: f32 = 0.015;
/// Content overlay yaw, turned slightly toward the camera.
const CONTENT_YAW: f32 = -PI / 9.0;
/// Camera distance beyond the planet's surface.
const CAMERA_STANDOFF: f32 = 20.0;
/// How far the camera drops in the compact layout, to keep the content
/// panel (placed under the planet) in frame.
const COMPACT_CAMERA_DROP: f32 = 8.0;

/// Load state of a surface texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStatus {
    /// Requested, no result yet.
    Pending,
    /// Texture applied.
    Loaded,
    /// Load failed; the fallback colour stays for the session.
    Failed,
}

/// Surface of a sphere: a texture once loaded, a flat colour until then or
/// if loading fails.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMaterial {
    fallback_color: u32,
    texture: Option<TextureHandle>,
    status: AssetStatus,
}

impl SurfaceMaterial {
    /// Untextured material showing `fallback_color`.
    pub fn new(fallback_color: u32) -> Self {
        Self {
            fallback_color,
            texture: None,
            status: AssetStatus::Pending,
        }
    }

    /// Tint to draw with: white under a texture, otherwise the fallback.
    pub fn color(&self) -> u32 {
        if self.texture.is_some() {
            0x00ff_ffff
        } else {
            self.fallback_color
        }
    }

    /// Loaded texture, if any.
    pub fn texture(&self) -> Option<&TextureHandle> {
        self.texture.as_ref()
    }

    /// Load state.
    pub fn status(&self) -> AssetStatus {
        self.status
    }

    pub(crate) fn apply(&mut self, result: Result<TextureHandle, AssetError>) {
        match result {
            Ok(texture) => {
                self.texture = Some(texture);
                self.status = AssetStatus::Loaded;
            }
            Err(_) => {
                self.texture = None;
                self.status = AssetStatus::Failed;
            }
        }
    }
}

/// Billboard overlay attached to a section group.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    local_position: Vec3,
    scale: f32,
    yaw: f32,
    opacity: f32,
}

impl Overlay {
    fn new(local_position: Vec3, scale: f32, yaw: f32) -> Self {
        Self {
            local_position,
            scale,
            yaw,
            opacity: 0.0,
        }
    }

    /// Offset from the section group's origin.
    pub fn local_position(&self) -> Vec3 {
        self.local_position
    }

    /// Overlay-to-world scale.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Rotation about the vertical axis, radians.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current opacity in [0, 1].
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub(crate) fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }
}

/// One navigable content unit: a planet plus its label and content
/// overlays.
///
/// Identity and layout are fixed at construction. The group position,
/// visibility and overlay opacities change only while a transition that
/// owns this section is in flight.
#[derive(Debug, Clone)]
pub struct Section {
    id: String,
    display_name: String,
    visual_asset: String,
    radius: f32,
    camera_offset: Vec3,
    position: Vec3,
    visible: bool,
    spin: f32,
    material: SurfaceMaterial,
    label: Overlay,
    content: Overlay,
}

impl Section {
    /// Build a hidden section parked at `parked_at`. `compact` selects the
    /// narrow-viewport overlay layout.
    pub fn from_record(
        record: &SectionRecord,
        parked_at: Vec3,
        compact: bool,
    ) -> Self {
        let r = record.radius;
        let label =
            Overlay::new(Vec3::new(0.0, r + LABEL_LIFT, 0.0), LABEL_SCALE, 0.0);
        let (content_position, camera_offset) = if compact {
            (
                Vec3::new(r - 2.5, -6.0, 1.0),
                Vec3::new(0.0, r * 0.5 - COMPACT_CAMERA_DROP, r + CAMERA_STANDOFF),
            )
        } else {
            (
                Vec3::new(r + 3.5, 0.5, 3.0),
                Vec3::new(0.0, r * 0.5, r + CAMERA_STANDOFF),
            )
        };

        Self {
            id: record.id.clone(),
            display_name: record.display_name.clone(),
            visual_asset: record.visual_asset.clone(),
            radius: r,
            camera_offset,
            position: parked_at,
            visible: false,
            spin: 0.0,
            material: SurfaceMaterial::new(record.fallback_color),
            label,
            content: Overlay::new(content_position, CONTENT_SCALE, CONTENT_YAW),
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name shown on the label.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Texture path for the planet.
    pub fn visual_asset(&self) -> &str {
        &self.visual_asset
    }

    /// Planet radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Camera position relative to the group origin when this section is
    /// active.
    pub fn camera_offset(&self) -> Vec3 {
        self.camera_offset
    }

    /// World position of the group.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Whether the group is drawn at all.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Planet's accumulated idle rotation, radians.
    pub fn spin(&self) -> f32 {
        self.spin
    }

    /// Planet surface.
    pub fn material(&self) -> &SurfaceMaterial {
        &self.material
    }

    /// Name label overlay.
    pub fn label(&self) -> &Overlay {
        &self.label
    }

    /// Content panel overlay.
    pub fn content(&self) -> &Overlay {
        &self.content
    }

    /// World position of the content overlay.
    pub fn content_world_position(&self) -> Vec3 {
        self.position + self.content.local_position
    }

    /// Camera position once this section sits at `slot`.
    pub fn camera_position_at(&self, slot: Vec3) -> Vec3 {
        slot + self.camera_offset
    }

    /// Look-at point once this section sits at `slot`: halfway between
    /// the planet centre and the content overlay, so both stay in frame.
    pub fn look_at_from(&self, slot: Vec3) -> Vec3 {
        slot.lerp(slot + self.content.local_position, 0.5)
    }

    pub(crate) fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn add_spin(&mut self, radians: f32) {
        self.spin = (self.spin + radians) % (2.0 * PI);
    }

    pub(crate) fn label_mut(&mut self) -> &mut Overlay {
        &mut self.label
    }

    pub(crate) fn content_mut(&mut self) -> &mut Overlay {
        &mut self.content
    }

    pub(crate) fn material_mut(&mut self) -> &mut SurfaceMaterial {
        &mut self.material
    }
}
