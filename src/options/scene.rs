use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Overview body, background star field and idle motion.
pub struct SceneOptions {
    /// Texture for the central overview body.
    #[schemars(skip)]
    pub overview_asset: String,
    /// Flat colour for the overview body when its texture is unavailable.
    #[schemars(skip)]
    pub overview_color: u32,
    /// Radius of the overview body.
    #[schemars(skip)]
    pub overview_radius: f32,
    /// Number of background stars.
    #[schemars(title = "Star Count", range(min = 0, max = 100_000))]
    pub star_count: usize,
    /// Edge length of the cube the stars are scattered in.
    #[schemars(skip)]
    pub star_spread: f32,
    /// Seed for the star field, so the sky is stable across sessions.
    #[schemars(skip)]
    pub star_seed: u64,
    /// Idle spin of the overview body, radians per second.
    #[schemars(title = "Overview Spin", range(min = 0.0, max = 1.0), extend("step" = 0.001))]
    pub overview_spin: f32,
    /// Idle spin of visible section planets, radians per second.
    #[schemars(title = "Planet Spin", range(min = 0.0, max = 1.0), extend("step" = 0.001))]
    pub planet_spin: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            overview_asset: "/2k_earth_daymap.jpg".into(),
            overview_color: 0x2a5caa,
            overview_radius: 5.0,
            star_count: 20_000,
            star_spread: 3000.0,
            star_seed: 0x5eed,
            overview_spin: 0.018,
            planet_spin: 0.06,
        }
    }
}
