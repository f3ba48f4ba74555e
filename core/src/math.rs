//! Math type aliases and helper functions.
//!
//! Provides the f32 rendering types used in buffer data and an f64 vector
//! type for source-mesh positions, all backed by [`nalgebra`].

pub use nalgebra;

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// 3D vector (f64). Source-mesh positions are stored in double precision.
pub type Vec3d = nalgebra::Vector3<f64>;

/// Narrow an f64 position to the f32 vector used in render data.
pub fn vec3d_to_f32(v: &Vec3d) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

/// Build two unit vectors perpendicular to `normal` and to each other.
///
/// The returned pair `(tangent_x, tangent_y)` forms a right-handed basis
/// with the normal: for a unit normal, `tangent_x × tangent_y = normal`.
/// The construction depends on the normal alone — the coordinate axis
/// least aligned with the normal is crossed with it to produce the first
/// tangent, and the normal is crossed with that tangent to produce the
/// second; both are normalized.
///
/// A degenerate (near-zero) normal falls back to the canonical X/Y axes.
pub fn make_perp_vectors(normal: &Vec3) -> (Vec3, Vec3) {
    let abs = normal.map(|e| e.abs());
    let axis = if abs.x <= abs.y && abs.x <= abs.z {
        Vec3::x()
    } else if abs.y <= abs.z {
        Vec3::y()
    } else {
        Vec3::z()
    };

    let tangent_x = axis.cross(normal);
    let len = tangent_x.norm();
    if len < 1e-8 {
        return (Vec3::x(), Vec3::y());
    }
    let tangent_x = tangent_x / len;
    let tangent_y = normal.cross(&tangent_x).normalize();
    (tangent_x, tangent_y)
}
