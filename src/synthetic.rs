//! Seeded synthetic landmark data.
//!
//! Points are scattered uniformly in normalized image coordinates, so any
//! three distinct landmarks are in general position and every tracked joint
//! gets a usable frame.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::landmarks::{LandmarkFrame, LandmarkKind, LandmarkSet};

/// Names accepted by [`landmark_frame`] for sets to leave empty.
pub const SET_NAMES: [&str; 4] = ["pose", "face", "left_hand", "right_hand"];

pub fn random_points<R: Rng>(rng: &mut R, count: usize) -> Vec<[f32; 3]> {
    (0..count)
        .map(|_| {
            [
                rng.random_range(0.0..1.0),
                rng.random_range(0.0..1.0),
                rng.random_range(-0.5..0.5),
            ]
        })
        .collect()
}

/// A canonical-size landmark set for `kind`.
pub fn landmark_set(kind: LandmarkKind, seed: u64) -> LandmarkSet {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    LandmarkSet::from(random_points(&mut rng, kind.canonical_len()))
}

/// A holistic frame with every set populated except those named in
/// `missing`.
pub fn landmark_frame(seed: u64, missing: &[String]) -> LandmarkFrame {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut gen_set = |name: &str, kind: LandmarkKind| {
        // always draw so the other sets do not depend on `missing`
        let points = random_points(&mut rng, kind.canonical_len());
        if missing.iter().any(|m| m == name) {
            Vec::new()
        } else {
            points
        }
    };
    LandmarkFrame {
        pose: gen_set("pose", LandmarkKind::Pose),
        face: gen_set("face", LandmarkKind::Face),
        left_hand: gen_set("left_hand", LandmarkKind::Hand),
        right_hand: gen_set("right_hand", LandmarkKind::Hand),
    }
}
