use serde::{Serialize, Serializer};

use crate::landmarks::LandmarkKind;
use crate::math::Quaternion;

/// Outcome for one joint slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JointRotation {
    /// Unit quaternion of the joint frame.
    Tracked(Quaternion),
    /// No topology entry for the slot, or it references landmarks the set
    /// does not have.
    Untracked,
    /// Reference points were coincident or collinear.
    Degenerate,
    /// A reference point had a non-finite coordinate.
    Malformed,
    /// The whole landmark set was missing.
    Absent,
}

impl JointRotation {
    pub const ZERO: [f32; 4] = [0.0; 4];
    pub const NAN: [f32; 4] = [f32::NAN; 4];

    /// `[x, y, z, w]`; zeros for untracked/degenerate slots, NaN for
    /// malformed or absent input.
    pub fn to_xyzw(&self) -> [f32; 4] {
        match self {
            JointRotation::Tracked(q) => [q.i, q.j, q.k, q.w],
            JointRotation::Untracked | JointRotation::Degenerate => Self::ZERO,
            JointRotation::Malformed | JointRotation::Absent => Self::NAN,
        }
    }

    pub fn is_tracked(&self) -> bool {
        matches!(self, JointRotation::Tracked(_))
    }

    pub fn quaternion(&self) -> Option<Quaternion> {
        match self {
            JointRotation::Tracked(q) => Some(*q),
            _ => None,
        }
    }
}

/// One rotation per joint slot of a landmark kind. The length is fixed by
/// the kind's topology and cannot be changed by callers:
///
/// ```compile_fail
/// use landmark_rotations::{JointRotation, LandmarkKind, RotationArray};
/// let mut r = RotationArray::absent(LandmarkKind::Face);
/// r.joints.push(JointRotation::Absent);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RotationArray {
    kind: LandmarkKind,
    joints: Vec<JointRotation>,
}

impl RotationArray {
    pub(crate) fn new(kind: LandmarkKind, joints: Vec<JointRotation>) -> RotationArray {
        RotationArray { kind, joints }
    }

    pub fn absent(kind: LandmarkKind) -> RotationArray {
        RotationArray {
            kind,
            joints: vec![JointRotation::Absent; kind.output_len()],
        }
    }

    pub fn kind(&self) -> LandmarkKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    pub fn is_absent(&self) -> bool {
        self.joints.iter().all(|j| *j == JointRotation::Absent)
    }

    pub fn get(&self, slot: usize) -> Option<&JointRotation> {
        self.joints.get(slot)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JointRotation> {
        self.joints.iter()
    }

    pub fn to_xyzw(&self) -> Vec<[f32; 4]> {
        self.joints.iter().map(JointRotation::to_xyzw).collect()
    }
}

impl std::ops::Index<usize> for RotationArray {
    type Output = JointRotation;

    fn index(&self, slot: usize) -> &JointRotation {
        &self.joints[slot]
    }
}

/// Serialized as a list of `[x, y, z, w]`; NaN components become `null`.
impl Serialize for RotationArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.to_xyzw())
    }
}
