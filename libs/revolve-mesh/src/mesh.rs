//! # Mesh Buffers
//!
//! Output aggregate of every builder: vertex positions, per-vertex normals
//! and a flat triangle index list.

use crate::error::MeshError;
use config::constants::{INDICES_PER_QUAD, MAX_VERTICES, VERTICES_PER_QUAD};
use glam::DVec3;

/// Vertex, normal and index buffers of a generated mesh.
///
/// `normals` is always parallel to `vertices`, and `indices` always holds
/// whole triangles. Quads never share vertex slots, so every triangle
/// carries its own flat normals.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the host boundary for GPU rendering.
///
/// # Example
///
/// ```rust
/// use revolve_mesh::{build_cylinder_mesh, CylinderParams};
///
/// let mesh = build_cylinder_mesh(&CylinderParams::new(1.0, 1.0, 4)).unwrap();
/// assert_eq!(mesh.normals().len(), mesh.vertices().len());
/// assert_eq!(mesh.indices().len() % 3, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Vertex normals, one per vertex
    normals: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    indices: Vec<u32>,
}

impl MeshBuffers {
    /// Creates empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates buffers pre-sized for `quad_count` emitted quads.
    pub fn with_capacity(quad_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(quad_count * VERTICES_PER_QUAD),
            normals: Vec::with_capacity(quad_count * VERTICES_PER_QUAD),
            indices: Vec::with_capacity(quad_count * INDICES_PER_QUAD),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns a reference to the flat index list.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Iterates the index list one triangle at a time.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Appends a vertex with its normal and returns its index.
    pub(crate) fn push_vertex(&mut self, position: DVec3, normal: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals.push(normal);
        index
    }

    /// Appends a triangle by vertex indices.
    pub(crate) fn push_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.indices.extend_from_slice(&[v0, v1, v2]);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Merges another mesh into this one.
    ///
    /// Indices of `other` are rebased past the current vertex count.
    ///
    /// # Errors
    ///
    /// [`MeshError::TooManyVertices`] when the combined mesh would exceed
    /// `MAX_VERTICES`; `self` is left unchanged.
    pub fn merge(&mut self, other: &MeshBuffers) -> Result<(), MeshError> {
        self.merge_within(other, MAX_VERTICES)
    }

    fn merge_within(&mut self, other: &MeshBuffers, max: usize) -> Result<(), MeshError> {
        let total = self.vertices.len().checked_add(other.vertices.len());
        let offset = match total {
            Some(count) if count <= max => u32::try_from(self.vertices.len()).ok(),
            _ => None,
        };
        let Some(offset) = offset else {
            return Err(MeshError::TooManyVertices {
                count: total.unwrap_or(usize::MAX),
                max,
            });
        };

        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.indices
            .extend(other.indices.iter().map(|index| index + offset));
        Ok(())
    }

    /// Validates the buffer invariants.
    ///
    /// Checks:
    /// - One normal per vertex
    /// - Index list holds whole triangles
    /// - All indices name an existing vertex
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        if self.normals.len() != self.vertices.len() {
            return false;
        }

        if self.indices.len() % 3 != 0 {
            return false;
        }

        let vertex_count = self.vertices.len() as u32;
        self.indices.iter().all(|&index| index < vertex_count)
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        flatten_f32(&self.vertices)
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten_f32(&self.normals)
    }

    /// Exports triangle indices as u32 array for GPU.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.indices.clone()
    }
}

fn flatten_f32(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}
