//! # LOD Mesh Data
//!
//! Vertex and triangle records consumed by the outside marker.
//!
//! The marker only borrows these arrays. They are normally produced by the
//! LOD input stage; [`LodMesh::from_indexed`] builds them from a plain indexed
//! triangle list, computing triangle normals and per-vertex adjacency.

use crate::error::{OutsideError, OutsideResult};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Offset of a vertex in the vertex array.
pub type VertexIndex = u32;

/// Offset of a triangle in the triangle array.
pub type TriangleIndex = u32;

/// A mesh vertex with its triangle adjacency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LodVertex {
    /// Vertex position
    pub position: DVec3,
    /// Triangles using this vertex
    pub triangles: Vec<TriangleIndex>,
}

impl LodVertex {
    /// Creates a vertex without adjacency.
    pub fn new(position: DVec3) -> Self {
        Self {
            position,
            triangles: Vec::new(),
        }
    }
}

/// A mesh triangle with a precomputed unit normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LodTriangle {
    /// Vertex indices in winding order
    pub vertices: [VertexIndex; 3],
    /// Unit face normal
    pub normal: DVec3,
}

impl LodTriangle {
    /// Creates a triangle and computes its normal from `vertices`.
    pub fn new(indices: [VertexIndex; 3], vertices: &[LodVertex]) -> Self {
        Self {
            vertices: indices,
            normal: face_normal(indices, |i| vertices[i as usize].position),
        }
    }

    /// Returns true if the triangle references the given vertex.
    #[inline]
    pub fn has_vertex(&self, vertex: VertexIndex) -> bool {
        self.vertices.contains(&vertex)
    }
}

/// Unit normal of a triangle, `(p1 - p0) x (p2 - p1)` normalized.
///
/// Zero-area triangles produce a zero normal.
pub(crate) fn face_normal(indices: [VertexIndex; 3], position: impl Fn(VertexIndex) -> DVec3) -> DVec3 {
    let p0 = position(indices[0]);
    let p1 = position(indices[1]);
    let p2 = position(indices[2]);
    (p1 - p0).cross(p2 - p1).normalize_or_zero()
}

/// Owned vertex and triangle arrays in the layout the marker expects.
///
/// # Example
///
/// ```rust
/// use lod_outside::LodMesh;
/// use glam::DVec3;
///
/// let positions = [DVec3::ZERO, DVec3::X, DVec3::Y];
/// let mesh = LodMesh::from_indexed(&positions, &[[0, 1, 2]]).unwrap();
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.triangles()[0].normal, DVec3::Z);
/// assert_eq!(mesh.vertices()[1].triangles, vec![0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LodMesh {
    vertices: Vec<LodVertex>,
    triangles: Vec<LodTriangle>,
}

impl LodMesh {
    /// Builds vertex and triangle arrays from positions and index triplets.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `positions` is empty or an index is out of
    /// range.
    pub fn from_indexed(positions: &[DVec3], indices: &[[VertexIndex; 3]]) -> OutsideResult<Self> {
        if positions.is_empty() {
            return Err(OutsideError::invalid_input("Mesh has no vertices"));
        }
        if TriangleIndex::try_from(indices.len()).is_err() {
            return Err(OutsideError::invalid_input(format!(
                "Too many triangles: {}",
                indices.len()
            )));
        }

        let mut vertices: Vec<LodVertex> = positions.iter().copied().map(LodVertex::new).collect();
        let mut triangles = Vec::with_capacity(indices.len());

        for (tri_index, tri) in indices.iter().enumerate() {
            if let Some(&bad) = tri.iter().find(|&&v| v as usize >= vertices.len()) {
                return Err(OutsideError::invalid_input(format!(
                    "Triangle {} references vertex {} but the mesh has {} vertices",
                    tri_index,
                    bad,
                    vertices.len()
                )));
            }

            triangles.push(LodTriangle::new(*tri, &vertices));
            for &v in tri {
                let refs = &mut vertices[v as usize].triangles;
                let tri_index = tri_index as TriangleIndex;
                if !refs.contains(&tri_index) {
                    refs.push(tri_index);
                }
            }
        }

        Ok(Self {
            vertices,
            triangles,
        })
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the vertex array.
    #[inline]
    pub fn vertices(&self) -> &[LodVertex] {
        &self.vertices
    }

    /// Returns the triangle array.
    #[inline]
    pub fn triangles(&self) -> &[LodTriangle] {
        &self.triangles
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some(first) = self.vertices.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        self.vertices[1..]
            .iter()
            .fold((first.position, first.position), |(min, max), v| {
                (min.min(v.position), max.max(v.position))
            })
    }

    /// Radius of the sphere around the bounding box center that encloses
    /// every vertex.
    pub fn bounding_sphere_radius(&self) -> f64 {
        let (min, max) = self.bounding_box();
        let center = (min + max) * 0.5;
        self.vertices
            .iter()
            .map(|v| v.position.distance(center))
            .fold(0.0, f64::max)
    }
}
