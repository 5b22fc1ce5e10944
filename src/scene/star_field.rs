use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::options::SceneOptions;

/// Background field of point stars scattered through a cube around the
/// origin. Generated once; never animated.
#[derive(Debug, Clone)]
pub struct StarField {
    points: Vec<Vec3>,
    spread: f32,
}

impl StarField {
    /// Scatter `options.star_count` stars with the configured seed.
    #[must_use]
    pub fn generate(options: &SceneOptions) -> Self {
        let half = options.star_spread.abs() * 0.5;
        let mut rng = StdRng::seed_from_u64(options.star_seed);
        let points = (0..options.star_count)
            .map(|_| {
                if half > 0.0 {
                    Vec3::new(
                        rng.random_range(-half..half),
                        rng.random_range(-half..half),
                        rng.random_range(-half..half),
                    )
                } else {
                    Vec3::ZERO
                }
            })
            .collect();
        Self {
            points,
            spread: options.star_spread.abs(),
        }
    }

    /// Star positions.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Edge length of the bounding cube.
    pub fn spread(&self) -> f32 {
        self.spread
    }
}
