//! # Outside Data
//!
//! Per-vertex classification record, stored in an array parallel to the
//! mesh vertex array.

use serde::{Deserialize, Serialize};

/// Classification state of one mesh vertex.
///
/// # Example
///
/// ```rust
/// use lod_outside::OutsideData;
///
/// let data = OutsideData::default();
/// assert!(!data.is_inside_hull);
/// assert!(!data.is_outer_wall_vertex);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutsideData {
    /// Consumed as a hull vertex or proven interior; skipped by the
    /// furthest-point search.
    pub is_inside_hull: bool,
    /// Reachable from a hull face; the classification result.
    pub is_outer_wall_vertex: bool,
    /// Visited by the current flood fill pass.
    pub is_outer_wall_vertex_in_pass: bool,
}
