use thiserror::Error;

use crate::math::{self, Quaternion, Vector3};

/// Right-handed orthonormal basis of a joint. `y` runs along the bone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: Vector3,
    pub y: Vector3,
    pub z: Vector3,
}

impl Frame {
    pub fn to_quaternion(&self) -> Quaternion {
        math::quaternion_from_axes(&self.x, &self.y, &self.z)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("a frame needs 2 or 3 reference points, got {0}")]
    Arity(usize),
    #[error("reference point has a non-finite coordinate")]
    NonFinite,
    #[error("reference points are coincident or collinear")]
    Degenerate,
}

/// Builds a joint frame from 2 or 3 reference points.
///
/// `points[0] -> points[1]` is the primary axis (frame `y`). The third point,
/// or `world_up` when only two are given, fixes the plane of the secondary
/// axis. The side axis is `primary x secondary` and the secondary axis is
/// recomputed from it so the result is orthonormal even when the raw
/// vectors are not perpendicular.
pub fn build_frame(points: &[Vector3], world_up: &Vector3, eps: f32) -> Result<Frame, FrameError> {
    if !(2..=3).contains(&points.len()) {
        return Err(FrameError::Arity(points.len()));
    }
    if !points.iter().all(math::is_finite) {
        return Err(FrameError::NonFinite);
    }

    let origin = points[0];
    let primary = math::try_normalize(&(points[1] - origin), eps).ok_or(FrameError::Degenerate)?;
    let provisional = match points.get(2) {
        Some(c) => c - origin,
        None => *world_up,
    };
    let side = math::try_normalize(&primary.cross(&provisional), eps).ok_or(FrameError::Degenerate)?;
    let secondary = side.cross(&primary);

    Ok(Frame {
        x: side,
        y: primary,
        z: secondary,
    })
}
