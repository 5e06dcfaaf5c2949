//! # Sphere Primitive
//!
//! Generates a sphere shell using latitude/longitude tessellation, limited
//! to the latitude band selected by the clip range.

use super::allocate;
use crate::error::MeshError;
use crate::math::radial_normal;
use crate::mesh::MeshBuffers;
use crate::params::SphereParams;
use crate::quad::emit_faces;
use config::constants::LATITUDE_LIMIT_DEGREES;
use glam::DVec3;
use tracing::{debug, warn};

/// Builds the shell mesh described by `params`.
///
/// # Algorithm
///
/// - Latitude bands `j` in `0..divisions_y` (outer loop), longitude steps
///   `i` in `0..divisions_xz` (inner loop)
/// - Clip bounds map onto latitudes `90° * clip_min_y ..= 90° * clip_max_y`
/// - Each cell is a quad whose upper edge (`p0`, `p1`) sits on the higher
///   latitude; every corner gets its own radial normal
///
/// With integer-degree stepping the latitude step is the truncated band
/// height divided by `divisions_y` in integer arithmetic, so the shell may
/// stop short of `clip_max_y`.
///
/// # Returns
///
/// - An empty mesh when neither face is enabled or the clip range is
///   inverted, empty, or outside `[-1, 1]`.
/// - [`MeshError::InvalidParameter`] for a negative or non-finite radius,
///   fewer than three longitude divisions, or zero latitude divisions.
/// - [`MeshError::DegenerateNormal`] for a zero radius.
///
/// # Example
///
/// ```rust
/// use revolve_mesh::{build_sphere_mesh, SphereParams};
///
/// let mesh = build_sphere_mesh(&SphereParams::new(5.0, 16, 8)).unwrap();
/// assert_eq!(mesh.vertex_count(), 16 * 8 * 4);
/// assert!(mesh.validate());
/// ```
pub fn build_sphere_mesh(params: &SphereParams) -> Result<MeshBuffers, MeshError> {
    if params.faces.is_empty() {
        debug!("sphere has no enabled faces, skipping");
        return Ok(MeshBuffers::new());
    }

    if !params.clip_is_valid() {
        debug!(
            clip_min_y = params.clip_min_y,
            clip_max_y = params.clip_max_y,
            "sphere clip range selects nothing, skipping"
        );
        return Ok(MeshBuffers::new());
    }

    params.validate()?;
    let mut mesh = allocate(params.quad_count())?;

    let min_y = LATITUDE_LIMIT_DEGREES * params.clip_min_y;
    let max_y = LATITUDE_LIMIT_DEGREES * params.clip_max_y;
    let step_y = params
        .stepping
        .latitude_step_degrees(max_y - min_y, params.divisions_y);

    for j in 0..params.divisions_y {
        let ja0 = (min_y + f64::from(j) * step_y).to_radians();
        let ja1 = (min_y + f64::from(j + 1) * step_y).to_radians();

        for i in 0..params.divisions_xz {
            let ia0 = params.stepping.longitude(i, params.divisions_xz);
            let ia1 = params.stepping.longitude(i + 1, params.divisions_xz);

            let corners = [
                point_on_sphere(params.radius, ja1, ia0),
                point_on_sphere(params.radius, ja1, ia1),
                point_on_sphere(params.radius, ja0, ia0),
                point_on_sphere(params.radius, ja0, ia1),
            ];

            let normals = corner_normals(&corners).map_err(|err| {
                warn!(band = j, quad = i, "sphere quad collapsed: {err}");
                err
            })?;

            emit_faces(&mut mesh, &corners, &normals, params.faces);
        }
    }

    debug!(
        divisions_xz = params.divisions_xz,
        divisions_y = params.divisions_y,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "built sphere mesh"
    );

    Ok(mesh)
}

/// Builds a sphere shell from positional parameters.
///
/// # Arguments
///
/// * `radius` - The radius of the sphere
/// * `divisions_xz` - Number of quads around the Y axis
/// * `divisions_y` - Number of latitude bands
/// * `clip_min_y`, `clip_max_y` - Latitude band in `[-1, 1]`
/// * `outside` - Emit outward-facing quads
/// * `inside` - Emit inward-facing quads
///
/// # Example
///
/// ```rust
/// use revolve_mesh::primitives::create_sphere;
///
/// // Upper hemisphere seen from inside, like a dome
/// let dome = create_sphere(10.0, 24, 6, 0.0, 1.0, false, true).unwrap();
/// assert!(dome.vertices().iter().all(|v| v.y >= -1e-9));
/// ```
#[allow(clippy::too_many_arguments)]
pub fn create_sphere(
    radius: f64,
    divisions_xz: u32,
    divisions_y: u32,
    clip_min_y: f64,
    clip_max_y: f64,
    outside: bool,
    inside: bool,
) -> Result<MeshBuffers, MeshError> {
    let params = SphereParams::new(radius, divisions_xz, divisions_y)
        .with_clip(clip_min_y, clip_max_y)
        .with_faces(outside, inside);
    build_sphere_mesh(&params)
}

/// Point at `latitude`/`longitude` (radians) on a sphere of `radius`.
fn point_on_sphere(radius: f64, latitude: f64, longitude: f64) -> DVec3 {
    let (sin_lat, cos_lat) = latitude.sin_cos();
    let (sin_lon, cos_lon) = longitude.sin_cos();
    DVec3::new(cos_lat * cos_lon, sin_lat, cos_lat * sin_lon) * radius
}

fn corner_normals(corners: &[DVec3; 4]) -> Result<[DVec3; 4], MeshError> {
    Ok([
        radial_normal(corners[0])?,
        radial_normal(corners[1])?,
        radial_normal(corners[2])?,
        radial_normal(corners[3])?,
    ])
}
