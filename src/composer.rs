//! Entry points over one or more landmark sets.
//!
//! Every set is extracted on its own; nothing is shared between the members
//! of a pair or a holistic frame.

use crate::extractor::RotationExtractor;
use crate::landmarks::{LandmarkKind, LandmarkSet};
use crate::types::RotationArray;

/// Rotations of a holistic frame.
pub type HolisticRotations = (RotationArray, RotationArray, RotationArray, RotationArray);

#[cfg(feature = "parallel")]
fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    rayon::join(a, b)
}

#[cfg(not(feature = "parallel"))]
fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA,
    B: FnOnce() -> RB,
{
    (a(), b())
}

impl RotationExtractor {
    pub fn single(&self, set: &LandmarkSet, kind: LandmarkKind) -> RotationArray {
        self.extract(set, kind.topology())
    }

    /// Left and right hand.
    pub fn pair(&self, a: &LandmarkSet, b: &LandmarkSet) -> (RotationArray, RotationArray) {
        join(
            || self.single(a, LandmarkKind::Hand),
            || self.single(b, LandmarkKind::Hand),
        )
    }

    /// Returns `(pose, face, left hand, right hand)`.
    pub fn composite(
        &self,
        pose: &LandmarkSet,
        face: &LandmarkSet,
        hand_left: &LandmarkSet,
        hand_right: &LandmarkSet,
    ) -> HolisticRotations {
        let ((pose, face), (hand_left, hand_right)) = join(
            || {
                join(
                    || self.single(pose, LandmarkKind::Pose),
                    || self.single(face, LandmarkKind::Face),
                )
            },
            || self.pair(hand_left, hand_right),
        );
        (pose, face, hand_left, hand_right)
    }
}

/// [`RotationExtractor::single`] with the default configuration.
pub fn single(set: impl Into<LandmarkSet>, kind: LandmarkKind) -> RotationArray {
    RotationExtractor::default().single(&set.into(), kind)
}

/// [`RotationExtractor::pair`] with the default configuration.
pub fn pair(a: impl Into<LandmarkSet>, b: impl Into<LandmarkSet>) -> (RotationArray, RotationArray) {
    RotationExtractor::default().pair(&a.into(), &b.into())
}

/// [`RotationExtractor::composite`] with the default configuration.
pub fn composite(
    pose: impl Into<LandmarkSet>,
    face: impl Into<LandmarkSet>,
    hand_left: impl Into<LandmarkSet>,
    hand_right: impl Into<LandmarkSet>,
) -> HolisticRotations {
    RotationExtractor::default().composite(
        &pose.into(),
        &face.into(),
        &hand_left.into(),
        &hand_right.into(),
    )
}
