use cgmath::{InnerSpace, Vector3, Zero};

/// Normal of the plane through three corners, zero for degenerate faces.
pub fn flat_normal([c0, c1, c2]: [Vector3<f32>; 3]) -> Vector3<f32> {
    let normal = (c0 - c1).cross(c0 - c2);
    if normal.magnitude2() == 0. {
        return Vector3::zero();
    }
    normal.normalize()
}
