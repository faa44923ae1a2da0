//! # LOD Outside
//!
//! Outer-wall vertex classification for LOD mesh simplification.
//! Marks the vertices that form the visible exterior of a mesh, so a
//! simplifier can collapse hidden interior geometry first.
//!
//! ## Architecture
//!
//! ```text
//! LodMesh → HullBuilder (convex hull) → OuterWallClassifier (flood fill) → OutsideData
//!                    └→ DebugHullMesh → HullMeshFactory
//! ```
//!
//! ## Algorithms
//!
//! - **Hull**: incremental furthest-point QuickHull seeded by a tetrahedron
//! - **Classification**: per hull face flood fill over mesh adjacency, gated
//!   by the cosine between the hull normal and each mesh triangle normal
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
//! let mut marker = OutsideMarker::new(mesh.vertices(), mesh.triangles(), 1.0, 0.5)?;
//! marker.mark_outside()?;
//! assert!(marker.is_outer_wall_vertex(0));
//! # Ok::<(), lod_outside::OutsideError>(())
//! ```

pub mod classify;
pub mod debug_mesh;
pub mod error;
pub mod geometry;
pub mod hull;
pub mod marker;
pub mod mesh;
pub mod outside;

#[cfg(test)]
mod fixtures;

pub use classify::OuterWallClassifier;
pub use debug_mesh::{DebugHullMesh, HullMeshFactory, MeshId, MeshLibrary};
pub use error::{OutsideError, OutsideResult};
pub use hull::{HullBuilder, HullTriangle};
pub use marker::OutsideMarker;
pub use mesh::{LodMesh, LodTriangle, LodVertex, TriangleIndex, VertexIndex};
pub use outside::OutsideData;
