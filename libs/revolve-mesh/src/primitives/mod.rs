//! # Primitives
//!
//! Mesh builders for the open cylinder wall and the clipped sphere shell.

pub mod cylinder;
pub mod sphere;

pub use cylinder::{build_cylinder_mesh, create_cylinder};
pub use sphere::{build_sphere_mesh, create_sphere};

use crate::error::MeshError;
use crate::mesh::MeshBuffers;
use config::constants::{MAX_VERTICES, VERTICES_PER_QUAD};

/// Allocates buffers for `quad_count` quads after checking the size limits.
///
/// `None` means the quad count itself overflowed.
fn allocate(quad_count: Option<usize>) -> Result<MeshBuffers, MeshError> {
    let vertex_count = quad_count.and_then(|quads| quads.checked_mul(VERTICES_PER_QUAD));
    match (quad_count, vertex_count) {
        (Some(quads), Some(count)) if count <= MAX_VERTICES => Ok(MeshBuffers::with_capacity(quads)),
        _ => Err(MeshError::TooManyVertices {
            count: vertex_count.unwrap_or(usize::MAX),
            max: MAX_VERTICES,
        }),
    }
}
