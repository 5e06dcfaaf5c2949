//! # Host Contract
//!
//! The builders stop at [`MeshBuffers`]. A host that draws or collides
//! with the result implements [`MeshSink`] for its renderer and collider
//! and calls [`publish`]; nothing in this crate knows about either.

use crate::mesh::MeshBuffers;

/// Receives finished mesh buffers, e.g. a renderer or a collision shape.
pub trait MeshSink {
    fn accept(&mut self, mesh: &MeshBuffers);
}

impl<F> MeshSink for F
where
    F: FnMut(&MeshBuffers),
{
    fn accept(&mut self, mesh: &MeshBuffers) {
        self(mesh)
    }
}

/// Rigid-body settings the owning object should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyHints {
    /// Moved only by the host, never by the physics solver.
    pub kinematic: bool,
    pub use_gravity: bool,
}

impl BodyHints {
    /// Generated shapes are static geometry.
    pub const STATIC_SHAPE: BodyHints = BodyHints {
        kinematic: true,
        use_gravity: false,
    };
}

/// Where a finished mesh goes.
pub struct MeshTarget<'a> {
    pub renderer: &'a mut dyn MeshSink,
    pub collider: Option<&'a mut dyn MeshSink>,
}

/// Hands `mesh` to the renderer and, when present, to the collider.
///
/// An empty mesh is not delivered, leaving whatever the sinks held
/// before untouched. The body hints apply either way.
///
/// # Example
///
/// ```rust
/// use revolve_mesh::host::{publish, BodyHints, MeshTarget};
/// use revolve_mesh::{build_cylinder_mesh, CylinderParams, MeshBuffers};
///
/// let mesh = build_cylinder_mesh(&CylinderParams::default()).unwrap();
///
/// let mut drawn = 0;
/// let mut renderer = |m: &MeshBuffers| drawn = m.triangle_count();
/// let hints = publish(&mesh, MeshTarget { renderer: &mut renderer, collider: None });
///
/// assert_eq!(hints, BodyHints::STATIC_SHAPE);
/// assert_eq!(drawn, mesh.triangle_count());
/// ```
pub fn publish(mesh: &MeshBuffers, target: MeshTarget<'_>) -> BodyHints {
    if !mesh.is_empty() {
        target.renderer.accept(mesh);
        if let Some(collider) = target.collider {
            collider.accept(mesh);
        }
    }
    BodyHints::STATIC_SHAPE
}
