//! # Revolve Mesh
//!
//! Flat-shaded triangle meshes for two solids of revolution: the open side
//! wall of a cylinder and a latitude-clipped sphere shell.
//!
//! ## Architecture
//!
//! ```text
//! params (CylinderParams / SphereParams)
//!     → primitives (angular sweep over a parameter grid)
//!     → quad (outward / inward quads, 4 vertices each)
//!     → MeshBuffers (vertices, normals, indices)
//!     → host (renderer / collider sinks)
//! ```
//!
//! ## Algorithms
//!
//! - **Cylinder**: one quad per angular step, flat normal from a cross product
//! - **Sphere**: one quad per latitude/longitude cell, radial corner normals
//! - **Faces**: outward and inward quads never share vertices, so both can
//!   be enabled at once for a double-sided shell
//!
//! ## Usage
//!
//! ```rust
//! use revolve_mesh::{build_sphere_mesh, SphereParams};
//!
//! let params = SphereParams::new(1.0, 4, 2).with_faces(true, true);
//! let mesh = build_sphere_mesh(&params)?;
//! assert_eq!(mesh.vertex_count(), 4 * 2 * 2 * 4);
//! # Ok::<(), revolve_mesh::MeshError>(())
//! ```

pub mod angle;
pub mod batch;
pub mod error;
pub mod host;
pub mod math;
pub mod mesh;
pub mod params;
pub mod primitives;
pub mod quad;

pub use angle::AngleStepping;
pub use error::MeshError;
pub use mesh::MeshBuffers;
pub use params::{CylinderParams, ShapeParams, SphereParams};
pub use primitives::{build_cylinder_mesh, build_sphere_mesh};
pub use quad::Faces;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn assert_buffer_invariants(mesh: &MeshBuffers) {
        assert_eq!(mesh.normals().len(), mesh.vertices().len());
        assert_eq!(mesh.indices().len() % 3, 0);
        let count = mesh.vertex_count() as u32;
        assert!(mesh.indices().iter().all(|&index| index < count));
    }

    #[test]
    fn test_invariants_hold_across_parameters() {
        init_tracing();
        for divisions in [3, 4, 7, 30, 100] {
            for faces in [Faces::OUTSIDE, Faces::INSIDE, Faces::BOTH] {
                let mut params = CylinderParams::new(1.0, 0.5, divisions);
                params.faces = faces;
                assert_buffer_invariants(&build_cylinder_mesh(&params).unwrap());

                let mut params = SphereParams::new(2.0, divisions, 5).with_clip(-0.8, 0.6);
                params.faces = faces;
                assert_buffer_invariants(&build_sphere_mesh(&params).unwrap());
            }
        }
    }

    #[test]
    fn test_no_faces_yields_empty_for_both_shapes() {
        init_tracing();
        let cylinder = build_cylinder_mesh(&CylinderParams::default().with_faces(false, false));
        let sphere = build_sphere_mesh(&SphereParams::default().with_faces(false, false));
        assert!(cylinder.unwrap().is_empty());
        assert!(sphere.unwrap().is_empty());
    }

    #[test]
    fn test_full_sphere_magnitudes() {
        let radius = 4.0;
        let mesh = primitives::create_sphere(radius, 4, 2, -1.0, 1.0, true, false).unwrap();
        for v in mesh.vertices() {
            assert_relative_eq!(v.length(), radius, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_defaults_build() {
        init_tracing();
        let cylinder = build_cylinder_mesh(&CylinderParams::default()).unwrap();
        assert_eq!(cylinder.vertex_count(), 30 * 2 * 4);

        let sphere = build_sphere_mesh(&SphereParams::default()).unwrap();
        assert_eq!(sphere.vertex_count(), 30 * 15 * 2 * 4);
    }

    #[test]
    fn test_gpu_exports_match_counts() {
        let mesh = build_sphere_mesh(&SphereParams::new(1.0, 8, 4)).unwrap();
        assert_eq!(mesh.vertices_f32().len(), mesh.vertex_count() * 3);
        assert_eq!(mesh.normals_f32().len(), mesh.vertex_count() * 3);
        assert_eq!(mesh.indices_u32().len(), mesh.triangle_count() * 3);
        assert!(mesh.vertices_f32().iter().all(|v| v.is_finite()));
    }
}
