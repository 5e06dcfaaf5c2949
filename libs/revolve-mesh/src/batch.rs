//! # Batch Building
//!
//! Builds independent shapes on the rayon thread pool. Builders share no
//! state, so requests need no coordination beyond collecting results in
//! input order.

use crate::error::MeshError;
use crate::mesh::MeshBuffers;
use crate::params::ShapeParams;
use rayon::prelude::*;
use tracing::debug;

/// Builds every shape in parallel, returning results in input order.
///
/// # Example
///
/// ```rust
/// use revolve_mesh::batch::build_batch;
/// use revolve_mesh::{CylinderParams, ShapeParams, SphereParams};
///
/// let shapes = [
///     ShapeParams::from(CylinderParams::new(1.0, 1.0, 8)),
///     ShapeParams::from(SphereParams::new(1.0, 8, 4)),
/// ];
/// let meshes = build_batch(&shapes);
/// assert_eq!(meshes.len(), 2);
/// assert!(meshes.iter().all(|mesh| mesh.is_ok()));
/// ```
pub fn build_batch(shapes: &[ShapeParams]) -> Vec<Result<MeshBuffers, MeshError>> {
    debug!(shapes = shapes.len(), "building shape batch");
    shapes.par_iter().map(ShapeParams::build).collect()
}

/// Builds every shape in parallel and concatenates them into one mesh.
///
/// Fails with the first error in input order, or with
/// [`MeshError::TooManyVertices`] when the combined mesh exceeds the
/// vertex limit.
pub fn build_merged(shapes: &[ShapeParams]) -> Result<MeshBuffers, MeshError> {
    let mut merged = MeshBuffers::new();
    for mesh in build_batch(shapes) {
        merged.merge(&mesh?)?;
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{CylinderParams, SphereParams};
    use crate::primitives::{build_cylinder_mesh, build_sphere_mesh};

    fn mixed_shapes() -> Vec<ShapeParams> {
        vec![
            CylinderParams::new(1.0, 2.0, 6).into(),
            SphereParams::new(1.0, 6, 3).with_faces(true, true).into(),
            CylinderParams::new(0.5, 0.5, 12).with_faces(false, true).into(),
        ]
    }

    #[test]
    fn test_batch_preserves_order() {
        let shapes = mixed_shapes();
        let meshes = build_batch(&shapes);
        for (shape, mesh) in shapes.iter().zip(meshes) {
            assert_eq!(mesh.unwrap(), shape.build().unwrap());
        }
    }

    #[test]
    fn test_batch_keeps_individual_errors() {
        let shapes = vec![
            CylinderParams::new(1.0, 1.0, 2).into(),
            SphereParams::new(1.0, 8, 4).into(),
        ];
        let meshes = build_batch(&shapes);
        assert!(meshes[0].is_err());
        assert!(meshes[1].is_ok());
    }

    #[test]
    fn test_merged_concatenates() {
        let cylinder = build_cylinder_mesh(&CylinderParams::new(1.0, 1.0, 4)).unwrap();
        let sphere = build_sphere_mesh(&SphereParams::new(1.0, 4, 2)).unwrap();
        let merged = build_merged(&[
            CylinderParams::new(1.0, 1.0, 4).into(),
            SphereParams::new(1.0, 4, 2).into(),
        ])
        .unwrap();

        assert_eq!(
            merged.vertex_count(),
            cylinder.vertex_count() + sphere.vertex_count()
        );
        assert_eq!(
            merged.triangle_count(),
            cylinder.triangle_count() + sphere.triangle_count()
        );
        assert!(merged.validate());
    }

    #[test]
    fn test_merged_fails_on_error() {
        let result = build_merged(&[
            SphereParams::new(0.0, 8, 4).into(),
            CylinderParams::new(1.0, 1.0, 4).into(),
        ]);
        assert!(matches!(result, Err(MeshError::DegenerateNormal { .. })));
    }

    #[test]
    fn test_empty_batch() {
        assert!(build_batch(&[]).is_empty());
        assert!(build_merged(&[]).unwrap().is_empty());
    }
}
