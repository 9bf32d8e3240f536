use glam::Vec3;

use crate::landmarks::{LandmarkKind, LandmarkSet};

const POSE_ROOT: &[usize] = &[23, 24];
const HAND_ROOT: &[usize] = &[0];
const FACE_ROOT: &[usize] = &[447, 366, 137, 227];

/// Landmarks whose centroid is the rig root for `kind`: the hip center for
/// pose, the wrist for hands and the cheek-line center for faces.
pub fn root_indices(kind: LandmarkKind) -> &'static [usize] {
    match kind {
        LandmarkKind::Pose => POSE_ROOT,
        LandmarkKind::Hand => HAND_ROOT,
        LandmarkKind::Face => FACE_ROOT,
    }
}

/// Centroid of the given landmarks. `None` if any index is out of range.
pub fn centroid(set: &LandmarkSet, indices: &[usize]) -> Option<Vec3> {
    if indices.is_empty() {
        return None;
    }
    let sum = indices
        .iter()
        .map(|&i| set.get(i))
        .sum::<Option<Vec3>>()?;
    Some(sum / indices.len() as f32)
}

/// Root location of a landmark set, used to place the rig. Rotations do not
/// depend on it.
pub fn root_location(set: &LandmarkSet, kind: LandmarkKind) -> Option<Vec3> {
    centroid(set, root_indices(kind)).filter(|p| p.is_finite())
}
