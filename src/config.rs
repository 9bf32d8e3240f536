use serde::{Deserialize, Serialize};

use crate::math::{self, Vector3};

/// Axis convention applied to landmarks before frames are built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSystem {
    /// Points are used as supplied.
    #[default]
    Landmark,
    /// Image-style input (x right, y down, z away from the camera) rotated
    /// into a Z-up rig: `(x, y, z) -> (x, z, -y)`.
    ZUp,
}

impl CoordinateSystem {
    pub fn apply(self, p: glam::Vec3) -> glam::Vec3 {
        match self {
            CoordinateSystem::Landmark => p,
            CoordinateSystem::ZUp => glam::Vec3::new(p.x, p.z, -p.y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Vectors shorter than this count as zero-length.
    pub epsilon: f32,
    /// Secondary direction for joints defined by two anchors.
    pub world_up: [f32; 3],
    pub coordinate_system: CoordinateSystem,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            epsilon: math::EPSILON,
            world_up: [0.0, 1.0, 0.0],
            coordinate_system: CoordinateSystem::Landmark,
        }
    }
}

impl ExtractorConfig {
    pub fn world_up(&self) -> Vector3 {
        Vector3::from(self.world_up)
    }
}
