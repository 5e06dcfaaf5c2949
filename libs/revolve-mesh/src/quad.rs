//! # Quad Emission
//!
//! Appends one grid cell of a swept surface to [`MeshBuffers`] as two
//! triangles. Corners are laid out as
//!
//! ```text
//! p0 ---- p1
//!  |      |
//! p2 ---- p3
//! ```
//!
//! with `p0-p1` on one edge and `p2-p3` on the opposite edge. An inward
//! quad reuses the same four positions in its own four vertex slots with
//! reversed winding and negated normals, so enabling both faces yields two
//! coincident single-sided quads.

use crate::mesh::MeshBuffers;
use config::constants::{DEFAULT_ENABLE_INSIDE, DEFAULT_ENABLE_OUTSIDE};

/// Triangle winding of an outward quad, relative to its first vertex.
const OUTWARD_WINDING: [[u32; 3]; 2] = [[0, 1, 2], [2, 1, 3]];

/// Triangle winding of an inward quad, relative to its first vertex.
const INWARD_WINDING: [[u32; 3]; 2] = [[2, 1, 0], [3, 1, 2]];

/// Which side of the surface a quad faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    /// Normal points away from the shape's interior.
    Outward,
    /// Normal points toward the shape's interior.
    Inward,
}

impl Facing {
    fn winding(self) -> &'static [[u32; 3]; 2] {
        match self {
            Facing::Outward => &OUTWARD_WINDING,
            Facing::Inward => &INWARD_WINDING,
        }
    }
}

/// Face-visibility flags of a shape.
///
/// # Example
///
/// ```rust
/// use revolve_mesh::Faces;
///
/// assert_eq!(Faces::BOTH.count(), 2);
/// assert!(Faces::NONE.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faces {
    /// Emit outward-facing quads.
    pub outside: bool,
    /// Emit inward-facing quads.
    pub inside: bool,
}

impl Faces {
    pub const NONE: Faces = Faces::new(false, false);
    pub const OUTSIDE: Faces = Faces::new(true, false);
    pub const INSIDE: Faces = Faces::new(false, true);
    pub const BOTH: Faces = Faces::new(true, true);

    /// Creates a set of face flags.
    pub const fn new(outside: bool, inside: bool) -> Self {
        Self { outside, inside }
    }

    /// Number of quads emitted per grid cell.
    pub fn count(self) -> usize {
        usize::from(self.outside) + usize::from(self.inside)
    }

    /// True when no face is enabled.
    pub fn is_empty(self) -> bool {
        !self.outside && !self.inside
    }
}

impl Default for Faces {
    fn default() -> Self {
        Faces::new(DEFAULT_ENABLE_OUTSIDE, DEFAULT_ENABLE_INSIDE)
    }
}

/// Appends a single quad.
///
/// `normals` are the outward normals of the four corners; they are negated
/// for [`Facing::Inward`].
pub fn emit_quad(
    buffers: &mut MeshBuffers,
    corners: &[glam::DVec3; 4],
    normals: &[glam::DVec3; 4],
    facing: Facing,
) {
    let base = buffers.vertex_count() as u32;

    for (&position, &normal) in corners.iter().zip(normals) {
        let normal = match facing {
            Facing::Outward => normal,
            Facing::Inward => -normal,
        };
        buffers.push_vertex(position, normal);
    }

    for [a, b, c] in facing.winding() {
        buffers.push_triangle(base + a, base + b, base + c);
    }
}

/// Appends the outward quad and then the inward quad, each if enabled.
pub fn emit_faces(
    buffers: &mut MeshBuffers,
    corners: &[glam::DVec3; 4],
    normals: &[glam::DVec3; 4],
    faces: Faces,
) {
    if faces.outside {
        emit_quad(buffers, corners, normals, Facing::Outward);
    }
    if faces.inside {
        emit_quad(buffers, corners, normals, Facing::Inward);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn unit_square() -> [DVec3; 4] {
        [
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_outward_winding() {
        let mut mesh = MeshBuffers::new();
        emit_quad(&mut mesh, &unit_square(), &[DVec3::Z; 4], Facing::Outward);
        assert_eq!(mesh.indices(), &[0, 1, 2, 2, 1, 3]);
        assert!(mesh.normals().iter().all(|n| *n == DVec3::Z));
    }

    #[test]
    fn test_inward_winding_and_normals() {
        let mut mesh = MeshBuffers::new();
        emit_quad(&mut mesh, &unit_square(), &[DVec3::Z; 4], Facing::Inward);
        assert_eq!(mesh.indices(), &[2, 1, 0, 3, 1, 2]);
        assert!(mesh.normals().iter().all(|n| *n == DVec3::NEG_Z));
        assert_eq!(mesh.vertices(), &unit_square());
    }

    #[test]
    fn test_indices_offset_by_existing_vertices() {
        let mut mesh = MeshBuffers::new();
        emit_quad(&mut mesh, &unit_square(), &[DVec3::Z; 4], Facing::Outward);
        emit_quad(&mut mesh, &unit_square(), &[DVec3::Z; 4], Facing::Inward);
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(&mesh.indices()[6..], &[6, 5, 4, 7, 5, 6]);
    }

    #[test]
    fn test_emit_faces_both_duplicates_vertices() {
        let mut mesh = MeshBuffers::new();
        emit_faces(&mut mesh, &unit_square(), &[DVec3::Z; 4], Faces::BOTH);
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.vertices()[..4], mesh.vertices()[4..]);
        assert_eq!(mesh.normals()[0], -mesh.normals()[4]);
    }

    #[test]
    fn test_emit_faces_none() {
        let mut mesh = MeshBuffers::new();
        emit_faces(&mut mesh, &unit_square(), &[DVec3::Z; 4], Faces::NONE);
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_outward_triangles_face_their_normal() {
        let mut mesh = MeshBuffers::new();
        emit_quad(&mut mesh, &unit_square(), &[DVec3::NEG_Z; 4], Facing::Outward);
        for [a, b, c] in mesh.triangles() {
            let v = mesh.vertices();
            let geometric = (v[b as usize] - v[a as usize]).cross(v[c as usize] - v[a as usize]);
            assert!(geometric.dot(mesh.normals()[a as usize]) > 0.0);
        }
    }

    #[test]
    fn test_faces_count() {
        assert_eq!(Faces::NONE.count(), 0);
        assert_eq!(Faces::OUTSIDE.count(), 1);
        assert_eq!(Faces::INSIDE.count(), 1);
        assert_eq!(Faces::BOTH.count(), 2);
    }
}
