use std::f32::consts::PI;

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// World-space placement of sections and camera framing constants.
pub struct LayoutOptions {
    /// X coordinate of the centred ("active") section slot.
    pub active_x: f32,
    /// Y coordinate shared by every section group.
    pub section_y: f32,
    /// Z coordinate of the active slot.
    pub section_z: f32,
    /// Horizontal distance of the off-screen slots from the active slot.
    pub slide_offset_x: f32,
    /// Extra depth applied to sections while off-screen.
    pub slide_depth_offset: f32,
    /// Camera position in the overview.
    pub overview_camera: [f32; 3],
    /// Look-at target in the overview.
    pub overview_target: [f32; 3],
    /// Closest orbit distance in the overview.
    pub overview_min_distance: f32,
    /// Farthest orbit distance in the overview.
    pub overview_max_distance: f32,
    /// Closest orbit distance in a section, added to the planet radius.
    pub section_min_distance_margin: f32,
    /// Farthest orbit distance in a section, added to the planet radius.
    pub section_max_distance_margin: f32,
    /// Polar angle kept clear of both poles while in a section (radians).
    pub section_polar_margin: f32,
    /// Viewports narrower than this (pixels) use the compact overlay
    /// layout.
    pub compact_breakpoint: u32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            active_x: 0.0,
            section_y: 0.0,
            section_z: -40.0,
            slide_offset_x: 60.0,
            slide_depth_offset: -20.0,
            overview_camera: [0.0, 8.0, 20.0],
            overview_target: [0.0, 0.0, 0.0],
            overview_min_distance: 7.0,
            overview_max_distance: 150.0,
            section_min_distance_margin: 1.5,
            section_max_distance_margin: 25.0,
            section_polar_margin: PI / 3.5,
            compact_breakpoint: 768,
        }
    }
}

impl LayoutOptions {
    /// Centre of the active slot.
    pub fn active_slot(&self) -> Vec3 {
        Vec3::new(self.active_x, self.section_y, self.section_z)
    }

    /// Depth of the off-screen slots.
    pub fn offstage_z(&self) -> f32 {
        self.section_z + self.slide_depth_offset
    }

    /// Overview camera position.
    pub fn overview_camera(&self) -> Vec3 {
        Vec3::from_array(self.overview_camera)
    }

    /// Overview look-at target.
    pub fn overview_target(&self) -> Vec3 {
        Vec3::from_array(self.overview_target)
    }
}
