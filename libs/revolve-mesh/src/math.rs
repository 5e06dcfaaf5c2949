//! # Geometry Math
//!
//! Normal computation shared by the cylinder and sphere builders.
//! Vector arithmetic itself comes from `glam::DVec3`; these helpers add the
//! degeneracy checks so a collapsed quad never writes NaN into a normal
//! buffer. Both checks are independent of the shape's scale.

use crate::error::MeshError;
use config::constants::approx_zero;
use glam::DVec3;

/// Normalizes `v`, failing when it has no direction (zero or non-finite).
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use revolve_mesh::math::normalize;
///
/// let n = normalize(DVec3::new(3.0, 0.0, 4.0)).unwrap();
/// assert!((n.length() - 1.0).abs() < 1e-12);
/// assert!(normalize(DVec3::ZERO).is_err());
/// ```
pub fn normalize(v: DVec3) -> Result<DVec3, MeshError> {
    let length = v.length();
    if !length.is_finite() || length == 0.0 {
        return Err(MeshError::degenerate_normal(format!(
            "cannot normalize vector {v} (length {length})"
        )));
    }
    Ok(v / length)
}

/// Flat normal of the plane through `p0`, `p1`, `p2`.
///
/// Computed as `(p1 - p0) × (p2 - p0)`, so the result faces the side from
/// which `p0 → p1 → p2` winds the same way as an outward quad.
///
/// The points are degenerate when either edge has zero length or the sine
/// of the angle between the edges is within `EPSILON` of zero.
pub fn face_normal(p0: DVec3, p1: DVec3, p2: DVec3) -> Result<DVec3, MeshError> {
    let edge_a = p1 - p0;
    let edge_b = p2 - p0;
    let normal = edge_a.cross(edge_b);

    let scale = edge_a.length() * edge_b.length();
    if scale == 0.0 || approx_zero(normal.length() / scale) {
        return Err(MeshError::degenerate_normal(format!(
            "points {p0}, {p1}, {p2} do not span a plane"
        )));
    }
    normalize(normal)
}

/// Unit direction from the origin to `p`.
#[inline]
pub fn radial_normal(p: DVec3) -> Result<DVec3, MeshError> {
    normalize(p)
}
