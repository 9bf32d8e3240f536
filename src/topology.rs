//! Skeleton topology tables.
//!
//! Indices follow the MediaPipe landmark orderings: BlazePose (33 points),
//! Hands (21 points) and Face Mesh (468 points). Every joint lists its
//! anchors as `[origin, target, side]`; the bone runs origin -> target and
//! the side anchor fixes the bend plane. A joint with a parent slot is
//! reported relative to the parent's frame instead of world space.

use crate::landmarks::LandmarkKind;

/// A reference position: the centroid of the listed landmarks.
pub type Anchor = &'static [usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JointSpec {
    pub slot: usize,
    pub anchors: &'static [Anchor],
    /// Slot whose frame this joint is expressed in.
    pub parent: Option<usize>,
}

impl JointSpec {
    /// Largest landmark index referenced by this joint.
    pub fn max_index(&self) -> usize {
        self.anchors
            .iter()
            .flat_map(|a| a.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Topology {
    pub kind: LandmarkKind,
    /// Number of output slots.
    pub len: usize,
    pub joints: &'static [JointSpec],
}

impl Topology {
    pub fn joint(&self, slot: usize) -> Option<&JointSpec> {
        self.joints.iter().find(|j| j.slot == slot)
    }

    pub fn tracked_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.joints.iter().map(|j| j.slot)
    }
}

const fn joint(slot: usize, anchors: &'static [Anchor]) -> JointSpec {
    JointSpec {
        slot,
        anchors,
        parent: None,
    }
}

const fn child(slot: usize, parent: usize, anchors: &'static [Anchor]) -> JointSpec {
    JointSpec {
        slot,
        anchors,
        parent: Some(parent),
    }
}

mod pose {
    pub const NOSE: usize = 0;
    pub const LEFT_EAR: usize = 7;
    pub const RIGHT_EAR: usize = 8;
    pub const LEFT_SHOULDER: usize = 11;
    pub const RIGHT_SHOULDER: usize = 12;
    pub const LEFT_ELBOW: usize = 13;
    pub const RIGHT_ELBOW: usize = 14;
    pub const LEFT_WRIST: usize = 15;
    pub const RIGHT_WRIST: usize = 16;
    pub const LEFT_PINKY: usize = 17;
    pub const RIGHT_PINKY: usize = 18;
    pub const LEFT_INDEX: usize = 19;
    pub const RIGHT_INDEX: usize = 20;
    pub const LEFT_HIP: usize = 23;
    pub const RIGHT_HIP: usize = 24;
    pub const LEFT_KNEE: usize = 25;
    pub const RIGHT_KNEE: usize = 26;
    pub const LEFT_ANKLE: usize = 27;
    pub const RIGHT_ANKLE: usize = 28;
    pub const LEFT_FOOT_INDEX: usize = 31;
    pub const RIGHT_FOOT_INDEX: usize = 32;

    // Output-only slots past the landmark range.
    pub const HIPS: usize = 33;
    pub const SHOULDERS: usize = 34;

    pub const HIP_CENTER: &[usize] = &[LEFT_HIP, RIGHT_HIP];
    pub const SHOULDER_CENTER: &[usize] = &[LEFT_SHOULDER, RIGHT_SHOULDER];
    pub const EAR_CENTER: &[usize] = &[LEFT_EAR, RIGHT_EAR];
}

pub static POSE: Topology = {
    use pose::*;
    Topology {
        kind: LandmarkKind::Pose,
        len: 36,
        joints: &[
            joint(NOSE, &[EAR_CENTER, &[NOSE], &[RIGHT_EAR]]),
            // arms
            joint(LEFT_SHOULDER, &[&[LEFT_SHOULDER], &[LEFT_ELBOW], &[LEFT_WRIST]]),
            joint(RIGHT_SHOULDER, &[&[RIGHT_SHOULDER], &[RIGHT_ELBOW], &[RIGHT_WRIST]]),
            joint(LEFT_ELBOW, &[&[LEFT_ELBOW], &[LEFT_WRIST], &[LEFT_SHOULDER]]),
            joint(RIGHT_ELBOW, &[&[RIGHT_ELBOW], &[RIGHT_WRIST], &[RIGHT_SHOULDER]]),
            joint(LEFT_WRIST, &[&[LEFT_WRIST], &[LEFT_INDEX], &[LEFT_PINKY]]),
            joint(RIGHT_WRIST, &[&[RIGHT_WRIST], &[RIGHT_INDEX], &[RIGHT_PINKY]]),
            // legs
            joint(LEFT_HIP, &[&[LEFT_HIP], &[LEFT_KNEE], &[LEFT_ANKLE]]),
            joint(RIGHT_HIP, &[&[RIGHT_HIP], &[RIGHT_KNEE], &[RIGHT_ANKLE]]),
            joint(LEFT_KNEE, &[&[LEFT_KNEE], &[LEFT_ANKLE], &[LEFT_HIP]]),
            joint(RIGHT_KNEE, &[&[RIGHT_KNEE], &[RIGHT_ANKLE], &[RIGHT_HIP]]),
            joint(LEFT_ANKLE, &[&[LEFT_ANKLE], &[LEFT_FOOT_INDEX], &[LEFT_KNEE]]),
            joint(RIGHT_ANKLE, &[&[RIGHT_ANKLE], &[RIGHT_FOOT_INDEX], &[RIGHT_KNEE]]),
            // torso; the shoulder line twists against the hips
            joint(HIPS, &[HIP_CENTER, SHOULDER_CENTER, &[RIGHT_HIP]]),
            child(SHOULDERS, HIPS, &[SHOULDER_CENTER, &[RIGHT_SHOULDER], HIP_CENTER]),
        ],
    }
};

// Finger joints run base to tip, thumb first. The side anchor is the base of
// the neighbouring finger; the pinky uses the ring finger. Tips are untracked.
pub static HAND: Topology = Topology {
    kind: LandmarkKind::Hand,
    len: 21,
    joints: &[
        joint(0, &[&[0], &[9], &[5]]),
        // thumb
        joint(1, &[&[1], &[2], &[5]]),
        joint(2, &[&[2], &[3], &[5]]),
        joint(3, &[&[3], &[4], &[5]]),
        // index
        joint(5, &[&[5], &[6], &[9]]),
        joint(6, &[&[6], &[7], &[9]]),
        joint(7, &[&[7], &[8], &[9]]),
        // middle
        joint(9, &[&[9], &[10], &[13]]),
        joint(10, &[&[10], &[11], &[13]]),
        joint(11, &[&[11], &[12], &[13]]),
        // ring
        joint(13, &[&[13], &[14], &[17]]),
        joint(14, &[&[14], &[15], &[17]]),
        joint(15, &[&[15], &[16], &[17]]),
        // pinky
        joint(17, &[&[17], &[18], &[13]]),
        joint(18, &[&[18], &[19], &[13]]),
        joint(19, &[&[19], &[20], &[13]]),
    ],
};

mod face {
    pub const UPPER_LIP: usize = 0;
    pub const FOREHEAD: usize = 10;
    pub const LOWER_LIP: usize = 17;
    pub const RIGHT_MOUTH_CORNER: usize = 61;
    pub const NOSE_BRIDGE: usize = 168;
    pub const CHIN: usize = 200;
    pub const LEFT_MOUTH_CORNER: usize = 291;
    pub const LEFT_CHEEK: usize = 447;

    pub const LEFT_SIDE: &[usize] = &[447, 366];
    pub const FACE_CENTER: &[usize] = &[447, 366, 137, 227];
    pub const LIP_CENTER: &[usize] = &[UPPER_LIP, LOWER_LIP];
}

// Jaw and mouth corners are expressions, reported in the head frame.
pub static FACE: Topology = {
    use face::*;
    Topology {
        kind: LandmarkKind::Face,
        len: 4,
        joints: &[
            joint(0, &[FACE_CENTER, &[FOREHEAD], LEFT_SIDE]),
            child(1, 0, &[&[NOSE_BRIDGE], &[CHIN], &[LEFT_CHEEK]]),
            child(2, 0, &[LIP_CENTER, &[LEFT_MOUTH_CORNER], &[UPPER_LIP]]),
            child(3, 0, &[LIP_CENTER, &[RIGHT_MOUTH_CORNER], &[UPPER_LIP]]),
        ],
    }
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tables_are_well_formed() {
        for kind in LandmarkKind::ALL {
            let topo = kind.topology();
            assert_eq!(topo.kind, kind);
            let mut seen = HashSet::new();
            for j in topo.joints {
                assert!(j.slot < topo.len, "{:?} slot {} out of range", kind, j.slot);
                assert!(seen.insert(j.slot), "{:?} slot {} listed twice", kind, j.slot);
                assert!((2..=3).contains(&j.anchors.len()));
                assert!(j.anchors.iter().all(|a| !a.is_empty()));
                assert!(j.max_index() < kind.canonical_len());
                if let Some(parent) = j.parent {
                    // one level deep, so parents resolve in world space
                    let p = topo.joint(parent).unwrap();
                    assert!(p.parent.is_none(), "{:?} slot {} has a nested parent", kind, j.slot);
                }
            }
        }
    }

    #[test]
    fn test_hand_chains() {
        let anchors = |slot| -> Vec<Vec<usize>> {
            HAND.joint(slot).unwrap().anchors.iter().map(|a| a.to_vec()).collect()
        };
        assert_eq!(anchors(6), vec![vec![6], vec![7], vec![9]]);
        assert_eq!(anchors(1), vec![vec![1], vec![2], vec![5]]);
        assert_eq!(anchors(19), vec![vec![19], vec![20], vec![13]]);
        for tip in [4, 8, 12, 16, 20] {
            assert!(HAND.joint(tip).is_none());
        }
        assert_eq!(HAND.tracked_slots().count(), 16);
    }

    #[test]
    fn test_pose_torso_uses_centers() {
        let hips = POSE.joint(33).unwrap();
        assert_eq!(hips.anchors[0].to_vec(), vec![23, 24]);
        assert_eq!(hips.anchors[1].to_vec(), vec![11, 12]);
        assert!(POSE.joint(35).is_none());
        assert_eq!(POSE.joint(34).unwrap().parent, Some(33));
        assert_eq!(hips.parent, None);
    }

    #[test]
    fn test_face_expressions_hang_off_the_head() {
        assert_eq!(FACE.joint(0).unwrap().parent, None);
        for slot in 1..4 {
            assert_eq!(FACE.joint(slot).unwrap().parent, Some(0));
        }
    }
}
