//! Centralized navigator options with TOML preset support.
//!
//! All tweakable settings (timing, layout, camera, scene, keybindings and
//! the section line-up) are consolidated here. Options serialize to/from
//! TOML so a site can ship its own preset.

mod camera;
mod keybindings;
mod layout;
mod scene;
mod sections;
mod timing;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
pub use layout::LayoutOptions;
use rustc_hash::FxHashSet;
pub use scene::SceneOptions;
use schemars::JsonSchema;
pub use sections::{default_sections, SectionRecord};
use serde::{Deserialize, Serialize};
pub use timing::TimingOptions;

use crate::error::OrreryError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[timing]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Animation durations and easing.
    pub timing: TimingOptions,
    /// Section placement and camera framing.
    pub layout: LayoutOptions,
    /// Camera projection and orbit control parameters.
    pub camera: CameraOptions,
    /// Overview body, star field and idle motion.
    pub scene: SceneOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Ordered section records.
    #[schemars(skip)]
    pub sections: Vec<SectionRecord>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timing: TimingOptions::default(),
            layout: LayoutOptions::default(),
            camera: CameraOptions::default(),
            scene: SceneOptions::default(),
            keybindings: KeybindingOptions::default(),
            sections: default_sections(),
        }
    }
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, OrreryError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))?;
        options.keybindings.reindex();
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrreryError> {
        let content = std::fs::read_to_string(path).map_err(OrreryError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrreryError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrreryError::Io)?;
        }
        std::fs::write(path, content).map_err(OrreryError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Check the section records: ids must be unique and radii positive.
    pub fn validate(&self) -> Result<(), OrreryError> {
        let mut seen = FxHashSet::default();
        for record in &self.sections {
            if !seen.insert(record.id.as_str()) {
                return Err(OrreryError::InvalidSection(format!(
                    "duplicate section id '{}'",
                    record.id
                )));
            }
            if !(record.radius.is_finite() && record.radius > 0.0) {
                return Err(OrreryError::InvalidSection(format!(
                    "section '{}' has radius {}",
                    record.id, record.radius
                )));
            }
        }
        Ok(())
    }
}
