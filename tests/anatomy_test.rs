use approx::assert_relative_eq;
use glam::Quat;
use landmark_rotations::synthetic::landmark_set;
use landmark_rotations::topology::{HAND, POSE};
use landmark_rotations::{LandmarkKind, LandmarkSet, RotationArray, single};
use nalgebra as na;

type Vector3 = na::Vector3<f32>;

/// Subject facing the camera in a T-pose, in image coordinates (y down,
/// smaller z is nearer the camera). The subject's left side is at larger x.
/// Elbows and knees bend a little so no limb is a straight line.
const T_POSE: [[f32; 3]; 33] = [
    [0.50, 0.20, -0.05], // nose
    [0.51, 0.18, -0.04],
    [0.52, 0.18, -0.04],
    [0.53, 0.18, -0.04],
    [0.49, 0.18, -0.04],
    [0.48, 0.18, -0.04],
    [0.47, 0.18, -0.04],
    [0.55, 0.20, 0.02], // left ear
    [0.45, 0.20, 0.02], // right ear
    [0.51, 0.23, -0.04],
    [0.49, 0.23, -0.04],
    [0.60, 0.35, 0.00], // left shoulder
    [0.40, 0.35, 0.00], // right shoulder
    [0.75, 0.35, 0.00], // left elbow
    [0.25, 0.35, 0.00], // right elbow
    [0.88, 0.35, -0.08], // left wrist
    [0.12, 0.35, -0.08], // right wrist
    [0.91, 0.36, -0.09], // left pinky
    [0.09, 0.36, -0.09],
    [0.92, 0.34, -0.11], // left index
    [0.08, 0.34, -0.11],
    [0.90, 0.33, -0.10],
    [0.10, 0.33, -0.10],
    [0.55, 0.65, 0.00], // left hip
    [0.45, 0.65, 0.00], // right hip
    [0.56, 0.80, -0.04], // left knee
    [0.44, 0.80, -0.04], // right knee
    [0.56, 0.95, 0.00], // left ankle
    [0.44, 0.95, 0.00], // right ankle
    [0.56, 0.97, 0.03],
    [0.44, 0.97, 0.03],
    [0.57, 0.98, -0.06], // left foot index
    [0.43, 0.98, -0.06],
];

/// Open right hand in the image plane, fingers pointing up (-y), thumb out
/// to the left.
const FLAT_HAND: [[f32; 3]; 21] = [
    [0.00, 0.00, 0.0], // wrist
    [-0.10, -0.10, 0.0],
    [-0.20, -0.17, 0.0],
    [-0.28, -0.24, 0.0],
    [-0.35, -0.30, 0.0],
    [-0.15, -0.40, 0.0], // index
    [-0.15, -0.50, 0.0],
    [-0.15, -0.60, 0.0],
    [-0.15, -0.70, 0.0],
    [-0.05, -0.42, 0.0], // middle
    [-0.05, -0.52, 0.0],
    [-0.05, -0.62, 0.0],
    [-0.05, -0.72, 0.0],
    [0.05, -0.40, 0.0], // ring
    [0.05, -0.50, 0.0],
    [0.05, -0.60, 0.0],
    [0.05, -0.70, 0.0],
    [0.15, -0.36, 0.0], // pinky
    [0.15, -0.44, 0.0],
    [0.15, -0.52, 0.0],
    [0.15, -0.60, 0.0],
];

fn rotation(r: &RotationArray, slot: usize) -> na::UnitQuaternion<f32> {
    let q = r[slot]
        .quaternion()
        .unwrap_or_else(|| panic!("{:?} slot {} is {:?}", r.kind(), slot, r[slot]));
    na::UnitQuaternion::from_quaternion(q)
}

fn dir(x: f32, y: f32, z: f32) -> Vector3 {
    Vector3::new(x, y, z).normalize()
}

fn face_mesh() -> LandmarkSet {
    let points: Vec<[f32; 3]> = serde_json::from_str(include_str!("data/face_landmarks.json")).unwrap();
    LandmarkSet::from(points)
}

fn turned(set: &LandmarkSet, rot: Quat) -> LandmarkSet {
    LandmarkSet::new(set.points().iter().map(|p| rot * *p).collect())
}

#[test]
fn test_t_pose_bones() {
    let r = single(&T_POSE, LandmarkKind::Pose);
    for joint in POSE.joints {
        assert!(r[joint.slot].is_tracked(), "slot {}: {:?}", joint.slot, r[joint.slot]);
    }

    // +Y of each limb frame runs down the bone
    let bones = [
        (11, dir(1.0, 0.0, 0.0)),
        (12, dir(-1.0, 0.0, 0.0)),
        (13, dir(0.13, 0.0, -0.08)),
        (14, dir(-0.13, 0.0, -0.08)),
        (23, dir(0.01, 0.15, -0.04)),
        (24, dir(-0.01, 0.15, -0.04)),
        (25, dir(0.0, 0.15, 0.04)),
        (26, dir(0.0, 0.15, 0.04)),
        // head looks at the camera, spine points up the image
        (0, dir(0.0, 0.0, -1.0)),
        (33, dir(0.0, -1.0, 0.0)),
    ];
    for (slot, expected) in bones {
        assert_relative_eq!(rotation(&r, slot) * Vector3::y(), expected, epsilon = 1e-4);
    }

    // the elbow bends toward the shoulder
    let elbow_side = rotation(&r, 13) * Vector3::z();
    assert!(elbow_side.x < 0.0);
    let elbow_side = rotation(&r, 14) * Vector3::z();
    assert!(elbow_side.x > 0.0);
}

#[test]
fn test_flat_hand_bones() {
    let r = single(&FLAT_HAND, LandmarkKind::Hand);
    assert_eq!(r.iter().filter(|j| j.is_tracked()).count(), HAND.joints.len());

    assert_relative_eq!(rotation(&r, 0) * Vector3::y(), dir(-0.05, -0.42, 0.0), epsilon = 1e-4);
    assert_relative_eq!(rotation(&r, 1) * Vector3::y(), dir(-0.10, -0.07, 0.0), epsilon = 1e-4);

    let up = dir(0.0, -1.0, 0.0);
    for slot in [5, 6, 7, 9, 10, 11, 13, 14, 15, 17, 18, 19] {
        let frame = rotation(&r, slot);
        assert_relative_eq!(frame * Vector3::y(), up, epsilon = 1e-4);
        // side axis leans toward the neighbouring finger
        let toward = if slot >= 17 { -1.0 } else { 1.0 };
        assert_relative_eq!(frame * Vector3::z(), dir(toward, 0.0, 0.0), epsilon = 1e-4);
    }
}

#[test]
fn test_real_face_mesh() {
    let face = face_mesh();
    assert_eq!(face.len(), LandmarkKind::Face.canonical_len());
    let r = single(face, LandmarkKind::Face);
    for slot in 0..4 {
        let xyzw = r.to_xyzw()[slot];
        assert!(xyzw.iter().all(|c| c.is_finite()), "slot {}: {:?}", slot, xyzw);
    }

    // head up is image up
    assert!((rotation(&r, 0) * Vector3::y()).y < -0.9);
    // in the head frame the jaw hangs down and the mouth corners point to
    // opposite sides
    assert!((rotation(&r, 1) * Vector3::y()).y < -0.8);
    assert!((rotation(&r, 2) * Vector3::y()).z > 0.5);
    assert!((rotation(&r, 3) * Vector3::y()).z < -0.5);
}

#[test]
fn test_expression_slots_ignore_head_turn() {
    let turn = Quat::from_rotation_y(0.5);
    for face in [face_mesh(), landmark_set(LandmarkKind::Face, 50)] {
        let a = single(face.clone(), LandmarkKind::Face);
        let b = single(turned(&face, turn), LandmarkKind::Face);
        assert!(rotation(&a, 0).angle_to(&rotation(&b, 0)) > 0.4);
        for slot in 1..4 {
            assert!(rotation(&a, slot).angle_to(&rotation(&b, slot)) < 1e-2, "slot {}", slot);
        }
    }

    let pose = LandmarkSet::from(&T_POSE);
    let a = single(pose.clone(), LandmarkKind::Pose);
    let b = single(turned(&pose, turn), LandmarkKind::Pose);
    assert!(rotation(&a, 33).angle_to(&rotation(&b, 33)) > 0.4);
    assert!(rotation(&a, 34).angle_to(&rotation(&b, 34)) < 1e-2);
}
