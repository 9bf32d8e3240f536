use glam::Vec3;
use serde::{Deserialize, Deserializer, Serialize};

/// Which upstream landmark model produced a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandmarkKind {
    Pose,
    Hand,
    Face,
}

impl LandmarkKind {
    pub const ALL: [LandmarkKind; 3] = [LandmarkKind::Pose, LandmarkKind::Hand, LandmarkKind::Face];

    /// Number of rotation slots produced for this kind.
    pub fn output_len(self) -> usize {
        self.topology().len
    }

    /// Number of landmarks the upstream model emits.
    pub fn canonical_len(self) -> usize {
        match self {
            LandmarkKind::Pose => 33,
            LandmarkKind::Hand => 21,
            LandmarkKind::Face => 468,
        }
    }

    pub fn topology(self) -> &'static crate::topology::Topology {
        match self {
            LandmarkKind::Pose => &crate::topology::POSE,
            LandmarkKind::Hand => &crate::topology::HAND,
            LandmarkKind::Face => &crate::topology::FACE,
        }
    }
}

/// Ordered landmarks from one detector output. An empty set means the
/// detector produced nothing for this frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandmarkSet {
    points: Vec<Vec3>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Vec3>) -> LandmarkSet {
        LandmarkSet { points }
    }

    pub fn absent() -> LandmarkSet {
        LandmarkSet::default()
    }

    pub fn is_absent(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<Vec3> {
        self.points.get(idx).copied()
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn to_arrays(&self) -> Vec<[f32; 3]> {
        self.points.iter().map(|p| p.to_array()).collect()
    }
}

impl From<&[[f32; 3]]> for LandmarkSet {
    fn from(points: &[[f32; 3]]) -> Self {
        LandmarkSet::new(points.iter().copied().map(Vec3::from_array).collect())
    }
}

impl From<Vec<[f32; 3]>> for LandmarkSet {
    fn from(points: Vec<[f32; 3]>) -> Self {
        LandmarkSet::from(points.as_slice())
    }
}

impl<const N: usize> From<&[[f32; 3]; N]> for LandmarkSet {
    fn from(points: &[[f32; 3]; N]) -> Self {
        LandmarkSet::from(points.as_slice())
    }
}

impl From<Vec<Vec3>> for LandmarkSet {
    fn from(points: Vec<Vec3>) -> Self {
        LandmarkSet::new(points)
    }
}

impl<T: Into<LandmarkSet>> From<Option<T>> for LandmarkSet {
    fn from(points: Option<T>) -> Self {
        points.map_or_else(LandmarkSet::absent, Into::into)
    }
}

/// Landmark sets of one holistic frame, as read from and written to JSON.
/// Missing keys deserialize as absent sets. A point that is not three
/// numbers (wrong length, `null`, a `null` coordinate) is read as NaN so
/// only the joints using it are lost.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandmarkFrame {
    #[serde(deserialize_with = "lenient_points")]
    pub pose: Vec<[f32; 3]>,
    #[serde(deserialize_with = "lenient_points")]
    pub face: Vec<[f32; 3]>,
    #[serde(alias = "hand", deserialize_with = "lenient_points")]
    pub left_hand: Vec<[f32; 3]>,
    #[serde(deserialize_with = "lenient_points")]
    pub right_hand: Vec<[f32; 3]>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPoint {
    Xyz([Option<f32>; 3]),
    Other(serde::de::IgnoredAny),
}

impl JsonPoint {
    fn into_array(self) -> [f32; 3] {
        match self {
            JsonPoint::Xyz(p) => p.map(|c| c.unwrap_or(f32::NAN)),
            JsonPoint::Other(_) => [f32::NAN; 3],
        }
    }
}

fn lenient_points<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<[f32; 3]>, D::Error> {
    let points = Vec::<JsonPoint>::deserialize(deserializer)?;
    Ok(points.into_iter().map(JsonPoint::into_array).collect())
}

impl LandmarkFrame {
    pub fn set(&self, name: &str) -> Option<LandmarkSet> {
        let points = match name {
            "pose" => &self.pose,
            "face" => &self.face,
            "left_hand" | "hand" => &self.left_hand,
            "right_hand" => &self.right_hand,
            _ => return None,
        };
        Some(LandmarkSet::from(points.as_slice()))
    }
}
