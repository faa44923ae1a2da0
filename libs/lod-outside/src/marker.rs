//! # Outside Marker
//!
//! Engine facade tying hull generation and outer wall classification
//! together over one borrowed mesh.
//!
//! ## Usage
//!
//! ```rust
//! use lod_outside::{LodMesh, OutsideMarker};
//! use glam::DVec3;
//!
//! let positions = [
//!     DVec3::new(0.0, 0.0, 0.0),
//!     DVec3::new(1.0, 0.0, 0.0),
//!     DVec3::new(0.0, 1.0, 0.0),
//!     DVec3::new(0.0, 0.0, 1.0),
//! ];
//! let mesh = LodMesh::from_indexed(&positions, &[[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]])?;
//!
//! let mut marker = OutsideMarker::new(
//!     mesh.vertices(),
//!     mesh.triangles(),
//!     mesh.bounding_sphere_radius(),
//!     0.9,
//! )?;
//! marker.mark_outside()?;
//!
//! assert_eq!(marker.hull().len(), 4);
//! assert_eq!(marker.outer_wall_vertices().count(), 4);
//! # Ok::<(), lod_outside::OutsideError>(())
//! ```

use crate::classify::OuterWallClassifier;
use crate::debug_mesh::{DebugHullMesh, HullMeshFactory};
use crate::error::{OutsideError, OutsideResult};
use crate::hull::{HullBuilder, HullTriangle};
use crate::mesh::{LodTriangle, LodVertex, VertexIndex};
use crate::outside::OutsideData;
use config::constants::{
    hull_epsilon, validate_radius, validate_walk_angle, OutsideConfig, EPSILON_SCALE,
};
use glam::DVec3;
use tracing::info;

/// Classifies which vertices of a mesh belong to its outer wall.
///
/// The marker borrows the vertex and triangle arrays and owns the per-vertex
/// [`OutsideData`] records, the hull triangles and the scratch buffers.
#[derive(Debug)]
pub struct OutsideMarker<'a> {
    vertices: &'a [LodVertex],
    outside: Vec<OutsideData>,
    builder: HullBuilder<'a>,
    classifier: OuterWallClassifier<'a>,
}

impl<'a> OutsideMarker<'a> {
    /// Creates a marker with the default tolerance scale.
    ///
    /// `walk_angle` is the cosine threshold of the flood fill. The hull
    /// tolerance is `bounding_sphere_radius * f64::EPSILON * 4`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if:
    /// - `vertices` is empty
    /// - `bounding_sphere_radius` is not positive and finite
    /// - `walk_angle` is NaN or outside `[-1.0001, 1.0001]`
    /// - a triangle or an adjacency list holds an out-of-range index
    pub fn new(
        vertices: &'a [LodVertex],
        triangles: &'a [LodTriangle],
        bounding_sphere_radius: f64,
        walk_angle: f64,
    ) -> OutsideResult<Self> {
        validate_walk_angle(walk_angle)?;
        Self::build(vertices, triangles, bounding_sphere_radius, walk_angle, EPSILON_SCALE)
    }

    /// Creates a marker from a configuration.
    ///
    /// # Errors
    ///
    /// Same as [`OutsideMarker::new`], plus `InvalidInput` for a non-positive
    /// epsilon scale.
    pub fn with_config(
        vertices: &'a [LodVertex],
        triangles: &'a [LodTriangle],
        bounding_sphere_radius: f64,
        config: &OutsideConfig,
    ) -> OutsideResult<Self> {
        let config = OutsideConfig::new(config.walk_angle, config.epsilon_scale)?;
        Self::build(
            vertices,
            triangles,
            bounding_sphere_radius,
            config.walk_angle,
            config.epsilon_scale,
        )
    }

    fn build(
        vertices: &'a [LodVertex],
        triangles: &'a [LodTriangle],
        bounding_sphere_radius: f64,
        walk_angle: f64,
        epsilon_scale: f64,
    ) -> OutsideResult<Self> {
        if vertices.is_empty() {
            return Err(OutsideError::invalid_input("Vertex list is empty"));
        }
        validate_radius(bounding_sphere_radius)?;
        validate_indices(vertices, triangles)?;

        let epsilon = hull_epsilon(bounding_sphere_radius, epsilon_scale);
        Ok(Self {
            vertices,
            outside: vec![OutsideData::default(); vertices.len()],
            builder: HullBuilder::new(vertices, epsilon),
            classifier: OuterWallClassifier::new(vertices, triangles, walk_angle),
        })
    }

    /// Generates the hull, then marks the outer wall vertices.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateGeometry` if the vertices do not span 3-D space.
    pub fn mark_outside(&mut self) -> OutsideResult<()> {
        self.generate_hull()?;
        self.mark_vertices()?;
        Ok(())
    }

    /// Rebuilds the convex hull from scratch.
    ///
    /// Resets `is_inside_hull` and `is_outer_wall_vertex` on every vertex.
    /// On error the hull is left empty.
    pub fn generate_hull(&mut self) -> OutsideResult<()> {
        self.builder.build(&mut self.outside)
    }

    /// Runs the flood fill over the current hull and returns the number of
    /// outer wall vertices.
    ///
    /// # Errors
    ///
    /// Returns `HullNotGenerated` if no hull has been built.
    pub fn mark_vertices(&mut self) -> OutsideResult<usize> {
        if self.builder.hull().is_empty() {
            return Err(OutsideError::HullNotGenerated);
        }
        self.classifier
            .mark_vertices(self.builder.hull(), &mut self.outside)
    }

    /// Per-vertex classification records, parallel to the vertex array.
    #[inline]
    pub fn outside_data(&self) -> &[OutsideData] {
        &self.outside
    }

    /// Returns true if the vertex was marked as outer wall.
    ///
    /// Out-of-range indices return false.
    pub fn is_outer_wall_vertex(&self, index: VertexIndex) -> bool {
        self.outside
            .get(index as usize)
            .is_some_and(|d| d.is_outer_wall_vertex)
    }

    /// Iterates the indices of all outer wall vertices in ascending order.
    pub fn outer_wall_vertices(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        self.outside
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_outer_wall_vertex)
            .map(|(i, _)| i as VertexIndex)
    }

    /// Hull triangles of the last successful generation.
    #[inline]
    pub fn hull(&self) -> &[HullTriangle] {
        self.builder.hull()
    }

    /// Centroid of the seed tetrahedron.
    #[inline]
    pub fn centroid(&self) -> DVec3 {
        self.builder.centroid()
    }

    /// Hull tolerance derived from the bounding sphere radius.
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.builder.epsilon()
    }

    /// Cosine threshold of the flood fill.
    #[inline]
    pub fn walk_angle(&self) -> f64 {
        self.classifier.walk_angle()
    }

    /// Regenerates the hull and hands it to `factory` as a debug mesh.
    ///
    /// Classification results are cleared by the regeneration.
    ///
    /// # Errors
    ///
    /// - `MeshAlreadyExists` if `factory` already holds `name` in `group`
    /// - `DegenerateGeometry` if the hull cannot be built
    /// - any error returned by the factory
    pub fn create_debug_hull_mesh<F: HullMeshFactory>(
        &mut self,
        name: &str,
        group: &str,
        factory: &mut F,
    ) -> OutsideResult<F::Handle> {
        if factory.contains(name, group) {
            return Err(OutsideError::MeshAlreadyExists {
                name: name.to_string(),
                group: group.to_string(),
            });
        }

        self.generate_hull()?;
        let mesh = DebugHullMesh::from_hull(name, group, self.builder.hull(), self.vertices)?;
        info!(
            "Exporting convex hull '{}' with {} triangles, bounding radius {}",
            name,
            mesh.triangle_count(),
            mesh.bounding_sphere_radius
        );
        factory.create(mesh)
    }
}

/// Checks every triangle corner and adjacency entry against the array sizes.
fn validate_indices(vertices: &[LodVertex], triangles: &[LodTriangle]) -> OutsideResult<()> {
    for (i, tri) in triangles.iter().enumerate() {
        if let Some(&bad) = tri.vertices.iter().find(|&&v| v as usize >= vertices.len()) {
            return Err(OutsideError::invalid_input(format!(
                "Triangle {} references vertex {} but there are {} vertices",
                i,
                bad,
                vertices.len()
            )));
        }
    }
    for (i, vertex) in vertices.iter().enumerate() {
        if let Some(&bad) = vertex.triangles.iter().find(|&&t| t as usize >= triangles.len()) {
            return Err(OutsideError::invalid_input(format!(
                "Vertex {} references triangle {} but there are {} triangles",
                i,
                bad,
                triangles.len()
            )));
        }
    }
    Ok(())
}
