use serde::{Deserialize, Serialize};

/// Static description of one navigable section, known at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionRecord {
    /// Stable identifier (unique across sections).
    pub id: String,
    /// Name shown on the section's label overlay.
    pub display_name: String,
    /// Texture for the section's planet.
    pub visual_asset: String,
    /// Flat colour used until (or instead of) the texture.
    pub fallback_color: u32,
    /// Planet radius; drives overlay placement and camera framing.
    pub radius: f32,
}

impl SectionRecord {
    /// Record with the conventional `/planet_<id>.jpg` asset path.
    #[must_use]
    pub fn new(
        id: &str,
        display_name: &str,
        fallback_color: u32,
        radius: f32,
    ) -> Self {
        Self {
            id: id.to_owned(),
            display_name: display_name.to_owned(),
            visual_asset: format!("/planet_{id}.jpg"),
            fallback_color,
            radius,
        }
    }
}

/// The default section line-up.
pub fn default_sections() -> Vec<SectionRecord> {
    vec![
        SectionRecord::new("about", "About Me", 0xcc6633, 3.2),
        SectionRecord::new("projects", "Projects", 0x6699cc, 4.2),
        SectionRecord::new("experience", "Experience", 0xaaaaff, 2.8),
        SectionRecord::new("skills", "Skills", 0xff4422, 3.5),
        SectionRecord::new("contact", "Contact", 0x44cc88, 2.6),
    ]
}
