//! # Debug Hull Export
//!
//! Turns the convex hull into render-ready buffers for visual inspection.
//!
//! The export is a triangle soup: every hull triangle gets three fresh
//! vertices and sequential indices, so flat shading needs no extra work on
//! the consumer side. Creating the actual GPU mesh is left to a
//! [`HullMeshFactory`]; [`MeshLibrary`] is an in-memory implementation.


use crate::error::{OutsideError, OutsideResult};
use crate::hull::HullTriangle;
use crate::mesh::LodVertex;
use config::constants::DEBUG_HULL_MATERIAL;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

// =============================================================================
// EXPORT BUFFERS
// =============================================================================

/// Hull triangle soup ready to upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugHullMesh {
    /// Mesh name, unique within the factory
    pub name: String,
    /// Resource group the mesh belongs to
    pub group: String,
    /// Material applied to the single submesh
    pub material: String,
    /// Vertex positions as [x, y, z, x, y, z, ...]
    pub vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    pub indices: Vec<u32>,
    /// Minimum corner of the emitted positions
    pub bounds_min: DVec3,
    /// Maximum corner of the emitted positions
    pub bounds_max: DVec3,
    /// Half the bounding box diagonal
    pub bounding_sphere_radius: f64,
}

impl DebugHullMesh {
    /// Builds the export buffers for `hull`.
    ///
    /// # Errors
    ///
    /// Returns `ExportFailed` if the hull is empty.
    pub fn from_hull(
        name: impl Into<String>,
        group: impl Into<String>,
        hull: &[HullTriangle],
        vertices: &[LodVertex],
    ) -> OutsideResult<Self> {
        if hull.is_empty() {
            return Err(OutsideError::export_failed("Convex hull has no triangles"));
        }

        let mut buffer = Vec::with_capacity(hull.len() * 9);
        let mut indices = Vec::with_capacity(hull.len() * 3);
        let mut min = DVec3::splat(f64::INFINITY);
        let mut max = DVec3::splat(f64::NEG_INFINITY);

        for tri in hull {
            for &v in &tri.vertices {
                let p = vertices[v as usize].position;
                indices.push(indices.len() as u32);
                buffer.extend([p.x as f32, p.y as f32, p.z as f32]);
                min = min.min(p);
                max = max.max(p);
            }
        }

        Ok(Self {
            name: name.into(),
            group: group.into(),
            material: DEBUG_HULL_MATERIAL.to_string(),
            vertices: buffer,
            indices,
            bounds_min: min,
            bounds_max: max,
            bounding_sphere_radius: min.distance(max) / 2.0,
        })
    }

    /// Returns the number of emitted vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

// =============================================================================
// MESH FACTORY
// =============================================================================

/// Creates renderable meshes from debug hull buffers.
pub trait HullMeshFactory {
    /// Opaque reference to a created mesh.
    type Handle;

    /// Returns true if a mesh named `name` already exists in `group`.
    fn contains(&self, name: &str, group: &str) -> bool;

    /// Creates a mesh from the buffers.
    fn create(&mut self, mesh: DebugHullMesh) -> OutsideResult<Self::Handle>;
}

/// Handle into a [`MeshLibrary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshId(usize);

/// In-memory mesh store.
#[derive(Debug, Clone, Default)]
pub struct MeshLibrary {
    meshes: Vec<DebugHullMesh>,
}

impl MeshLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mesh behind `id`.
    pub fn get(&self, id: MeshId) -> Option<&DebugHullMesh> {
        self.meshes.get(id.0)
    }

    /// Returns the mesh named `name` in `group`.
    pub fn find(&self, name: &str, group: &str) -> Option<&DebugHullMesh> {
        self.meshes
            .iter()
            .find(|m| m.name == name && m.group == group)
    }

    /// Returns the number of stored meshes.
    #[inline]
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Returns true if no mesh has been created.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

impl HullMeshFactory for MeshLibrary {
    type Handle = MeshId;

    fn contains(&self, name: &str, group: &str) -> bool {
        self.find(name, group).is_some()
    }

    fn create(&mut self, mesh: DebugHullMesh) -> OutsideResult<MeshId> {
        if self.contains(&mesh.name, &mesh.group) {
            return Err(OutsideError::MeshAlreadyExists {
                name: mesh.name,
                group: mesh.group,
            });
        }
        if mesh.vertices.len() != mesh.indices.len() * 3 {
            return Err(OutsideError::export_failed(format!(
                "Mesh '{}' has {} floats for {} indices",
                mesh.name,
                mesh.vertices.len(),
                mesh.indices.len()
            )));
        }

        debug!(
            "Created debug mesh '{}' in group '{}' with {} triangles",
            mesh.name,
            mesh.group,
            mesh.triangle_count()
        );
        self.meshes.push(mesh);
        Ok(MeshId(self.meshes.len() - 1))
    }
}
