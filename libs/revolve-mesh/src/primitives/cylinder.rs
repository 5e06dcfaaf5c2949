//! # Cylinder Primitive
//!
//! Generates the side wall of a cylinder around the Y axis. No caps are
//! generated; the shape is an open tube.

use super::allocate;
use crate::error::MeshError;
use crate::math::face_normal;
use crate::mesh::MeshBuffers;
use crate::params::CylinderParams;
use crate::quad::emit_faces;
use glam::DVec3;
use tracing::{debug, warn};

/// Builds the wall mesh described by `params`.
///
/// Each of the `divisions` angular steps becomes one quad per enabled face.
/// All four vertices of a quad share its flat normal
/// `(p1 - p0) × (p2 - p0)`.
///
/// # Returns
///
/// - An empty mesh when neither face is enabled.
/// - [`MeshError::InvalidParameter`] for negative or non-finite sizes, or
///   fewer than three divisions.
/// - [`MeshError::DegenerateNormal`] when a quad collapses: zero radius,
///   zero height, or more than 360 divisions with integer-degree stepping.
///
/// # Example
///
/// ```rust
/// use revolve_mesh::{build_cylinder_mesh, CylinderParams};
///
/// let mesh = build_cylinder_mesh(&CylinderParams::new(1.0, 1.0, 4)).unwrap();
/// assert_eq!(mesh.vertex_count(), 16);
/// assert_eq!(mesh.indices().len(), 24);
/// ```
pub fn build_cylinder_mesh(params: &CylinderParams) -> Result<MeshBuffers, MeshError> {
    if params.faces.is_empty() {
        debug!("cylinder has no enabled faces, skipping");
        return Ok(MeshBuffers::new());
    }

    params.validate()?;
    let mut mesh = allocate(params.quad_count())?;

    let radius = params.radius;
    let top = params.height;
    let bottom = -params.height;
    let divisions = params.divisions;

    for i in 0..divisions {
        let a0 = params.stepping.longitude(i, divisions);
        let a1 = params.stepping.longitude(i + 1, divisions);

        let (s0, c0) = a0.sin_cos();
        let (s1, c1) = a1.sin_cos();

        let corners = [
            DVec3::new(c0 * radius, top, s0 * radius),
            DVec3::new(c1 * radius, top, s1 * radius),
            DVec3::new(c0 * radius, bottom, s0 * radius),
            DVec3::new(c1 * radius, bottom, s1 * radius),
        ];

        let normal = face_normal(corners[0], corners[1], corners[2]).map_err(|err| {
            warn!(quad = i, "cylinder quad collapsed: {err}");
            err
        })?;

        emit_faces(&mut mesh, &corners, &[normal; 4], params.faces);
    }

    debug!(
        divisions,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "built cylinder mesh"
    );

    Ok(mesh)
}

/// Builds a cylinder wall from positional parameters.
///
/// # Arguments
///
/// * `radius` - Distance from the Y axis to the wall
/// * `height` - Half-height; the wall spans `[-height, +height]`
/// * `divisions` - Number of quads around the axis
/// * `outside` - Emit outward-facing quads
/// * `inside` - Emit inward-facing quads
///
/// # Example
///
/// ```rust
/// use revolve_mesh::primitives::create_cylinder;
///
/// let tube = create_cylinder(2.0, 0.5, 30, true, true).unwrap();
/// assert_eq!(tube.vertex_count(), 30 * 2 * 4);
/// ```
pub fn create_cylinder(
    radius: f64,
    height: f64,
    divisions: u32,
    outside: bool,
    inside: bool,
) -> Result<MeshBuffers, MeshError> {
    build_cylinder_mesh(&CylinderParams::new(radius, height, divisions).with_faces(outside, inside))
}
