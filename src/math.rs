use nalgebra as na;

pub type Vector3 = na::Vector3<f32>;
pub type Matrix3 = na::Matrix3<f32>;
pub type Quaternion = na::Quaternion<f32>;

/// Default length below which a vector is treated as zero.
pub const EPSILON: f32 = 1e-6;

/// Converts a landmark into the nalgebra vector used by the frame math.
pub fn to_na(p: glam::Vec3) -> Vector3 {
    Vector3::new(p.x, p.y, p.z)
}

/// Unit vector along `v`, or `None` when `|v| <= eps`.
pub fn try_normalize(v: &Vector3, eps: f32) -> Option<Vector3> {
    if !v.iter().all(|c| c.is_finite()) {
        return None;
    }
    v.try_normalize(eps)
}

pub fn is_finite(v: &Vector3) -> bool {
    v.iter().all(|c| c.is_finite())
}

/// Quaternion of the rotation whose matrix has columns `x`, `y`, `z`.
///
/// The axes must be orthonormal and right-handed. Uses the branch of
/// Shepperd's method with the largest of trace/m00/m11/m22 so the divisor
/// stays away from zero near half turns. The result is normalized and its
/// sign fixed so equivalent inputs give identical output.
pub fn quaternion_from_axes(x: &Vector3, y: &Vector3, z: &Vector3) -> Quaternion {
    let m = Matrix3::from_columns(&[*x, *y, *z]);
    let (m00, m01, m02) = (m[(0, 0)], m[(0, 1)], m[(0, 2)]);
    let (m10, m11, m12) = (m[(1, 0)], m[(1, 1)], m[(1, 2)]);
    let (m20, m21, m22) = (m[(2, 0)], m[(2, 1)], m[(2, 2)]);
    let trace = m00 + m11 + m22;

    let (w, i, j, k) = if trace > m00 && trace > m11 && trace > m22 {
        let s = (1.0 + trace).sqrt() * 2.0;
        (0.25 * s, (m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s)
    } else if m00 > m11 && m00 > m22 {
        let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0;
        ((m21 - m12) / s, 0.25 * s, (m01 + m10) / s, (m02 + m20) / s)
    } else if m11 > m22 {
        let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0;
        ((m02 - m20) / s, (m01 + m10) / s, 0.25 * s, (m12 + m21) / s)
    } else {
        let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0;
        ((m10 - m01) / s, (m02 + m20) / s, (m12 + m21) / s, 0.25 * s)
    };

    canonical(Quaternion::new(w, i, j, k).normalize())
}

/// Rotation of `child` expressed in the frame of `parent`, `parent⁻¹ * child`.
pub fn relative_rotation(parent: &Quaternion, child: &Quaternion) -> Quaternion {
    canonical((parent.conjugate() * child).normalize())
}

/// Picks the representative with `w >= 0`; at `w == 0` the first non-zero
/// imaginary component is made positive.
fn canonical(q: Quaternion) -> Quaternion {
    let flip = if q.w != 0.0 {
        q.w < 0.0
    } else {
        [q.i, q.j, q.k]
            .into_iter()
            .find(|c| *c != 0.0)
            .is_some_and(|c| c < 0.0)
    };
    if flip { -q } else { q }
}
