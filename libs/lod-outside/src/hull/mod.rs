//! # Convex Hull
//!
//! Incremental furthest-point (QuickHull style) convex hull over the vertex
//! array of a LOD mesh.
//!
//! ## Algorithm
//!
//! 1. Seed a tetrahedron from extreme vertices:
//!    - lowest Y vertex
//!    - vertex furthest from it
//!    - vertex furthest from the line through both
//!    - vertex furthest from the plane through all three
//! 2. Sweep the triangle list. For every live triangle pick the furthest
//!    vertex in front of it and insert it:
//!    - collect triangles visible from the vertex
//!    - tombstone them and extract the horizon loop
//!    - connect every horizon edge to the vertex
//! 3. Triangles appended during the sweep are visited by the same sweep.
//! 4. Compact the tombstoned triangles away.
//!
//! Hull triangles reference the original vertex array and are oriented away
//! from the seed tetrahedron centroid, which stays strictly inside the hull.
//!
//! ## Coplanar vertices
//!
//! A vertex within epsilon of a triangle plane is absorbed if it lies inside
//! that triangle, and the whole insertion is abandoned. Otherwise the
//! triangle counts as visible and the hull grows across the flat region.

mod horizon;


pub use horizon::{canonical_edge, Edge};

use crate::error::{OutsideError, OutsideResult};
use crate::geometry::{is_inside_triangle, point_line_distance_sq, tetrahedron_volume};
use crate::mesh::{face_normal, LodVertex, VertexIndex};
use crate::outside::OutsideData;
use glam::DVec3;
use horizon::{all_edges_paired, retain_boundary_edges};
use tracing::{debug, info, trace, warn};

// =============================================================================
// HULL TRIANGLE
// =============================================================================

/// Triangle of the convex hull.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullTriangle {
    /// Indices into the original vertex array
    pub vertices: [VertexIndex; 3],
    /// Outward unit normal
    pub normal: DVec3,
    /// Pending deletion
    removed: bool,
}

impl HullTriangle {
    /// Creates a triangle and computes its normal from the current winding.
    pub fn new(indices: [VertexIndex; 3], vertices: &[LodVertex]) -> Self {
        let mut tri = Self {
            vertices: indices,
            normal: DVec3::ZERO,
            removed: false,
        };
        tri.compute_normal(vertices);
        tri
    }

    /// Recomputes the normal after the winding changed.
    fn compute_normal(&mut self, vertices: &[LodVertex]) {
        self.normal = face_normal(self.vertices, |i| vertices[i as usize].position);
    }

    /// Returns true if the triangle is waiting to be compacted away.
    #[inline]
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Dot product of the normal with the first corner.
    #[inline]
    pub fn plane_offset(&self, vertices: &[LodVertex]) -> f64 {
        self.normal.dot(vertices[self.vertices[0] as usize].position)
    }

    /// Signed distance of `point` from the triangle plane, positive in front.
    #[inline]
    pub fn signed_distance(&self, point: DVec3, vertices: &[LodVertex]) -> f64 {
        self.normal.dot(point) - self.plane_offset(vertices)
    }

    /// Returns true if `point` is strictly in front of the plane.
    ///
    /// No tolerance is applied; callers only use this against the centroid,
    /// which never lies on a hull plane.
    #[inline]
    pub fn faces_point(&self, point: DVec3, vertices: &[LodVertex]) -> bool {
        self.plane_offset(vertices) < self.normal.dot(point)
    }

    fn corners(&self, vertices: &[LodVertex]) -> [DVec3; 3] {
        self.vertices.map(|i| vertices[i as usize].position)
    }

    fn edges(&self) -> [Edge; 3] {
        let [a, b, c] = self.vertices;
        [canonical_edge(a, b), canonical_edge(b, c), canonical_edge(c, a)]
    }
}

/// Builds a triangle whose normal points away from `centroid`.
fn oriented_triangle(
    indices: [VertexIndex; 3],
    vertices: &[LodVertex],
    centroid: DVec3,
) -> HullTriangle {
    let mut tri = HullTriangle::new(indices, vertices);
    if tri.faces_point(centroid, vertices) {
        tri.vertices.swap(0, 1);
        tri.compute_normal(vertices);
    }
    tri
}

// =============================================================================
// HULL BUILDER
// =============================================================================

/// Incremental convex hull builder.
///
/// The builder owns the hull triangle list and reuses its scratch buffers
/// across insertions. It borrows the vertex array for its whole lifetime.
#[derive(Debug)]
pub struct HullBuilder<'a> {
    vertices: &'a [LodVertex],
    epsilon: f64,
    centroid: DVec3,
    hull: Vec<HullTriangle>,
    visible: Vec<usize>,
    edges: Vec<Edge>,
}

impl<'a> HullBuilder<'a> {
    /// Creates a builder over `vertices` using the given tolerance.
    pub fn new(vertices: &'a [LodVertex], epsilon: f64) -> Self {
        Self {
            vertices,
            epsilon,
            centroid: DVec3::ZERO,
            hull: Vec::new(),
            visible: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Returns the finished hull triangles.
    ///
    /// Empty until [`HullBuilder::build`] succeeds.
    #[inline]
    pub fn hull(&self) -> &[HullTriangle] {
        &self.hull
    }

    /// Centroid of the seed tetrahedron.
    #[inline]
    pub fn centroid(&self) -> DVec3 {
        self.centroid
    }

    /// Tolerance used for coplanarity tests.
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Builds the hull, recording consumed vertices in `outside`.
    ///
    /// Resets `is_inside_hull` and `is_outer_wall_vertex` on every record
    /// first, so the builder can be rerun. On error the hull is left empty.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the vertex array is empty or `outside` has a
    ///   different length
    /// - `DegenerateGeometry` if the vertices do not span 3-D space
    pub fn build(&mut self, outside: &mut [OutsideData]) -> OutsideResult<()> {
        if self.vertices.is_empty() {
            return Err(OutsideError::invalid_input("Cannot build a hull without vertices"));
        }
        if outside.len() != self.vertices.len() {
            return Err(OutsideError::invalid_input(format!(
                "Outside data has {} records for {} vertices",
                outside.len(),
                self.vertices.len()
            )));
        }

        self.hull.clear();
        self.hull.reserve(self.vertices.len());
        for data in outside.iter_mut() {
            data.is_inside_hull = false;
            data.is_outer_wall_vertex = false;
        }

        self.seed(outside)?;

        let mut inserted = 0usize;
        let mut i = 0;
        while i < self.hull.len() {
            if !self.hull[i].removed {
                if let Some(vertex) = self.furthest_vertex(i, outside) {
                    if self.add_vertex(vertex, outside) > 0 {
                        inserted += 1;
                    }
                }
            }
            i += 1;
        }
        self.compact();

        info!(
            "Built convex hull with {} triangles ({} vertices inserted after seeding)",
            self.hull.len(),
            inserted
        );
        if !self.is_closed() {
            warn!("Convex hull is not closed; input likely contains coincident vertices");
        }

        Ok(())
    }

    /// Returns true if every hull edge is shared by exactly two triangles.
    pub fn is_closed(&self) -> bool {
        let mut edges: Vec<Edge> = self
            .hull
            .iter()
            .filter(|tri| !tri.removed)
            .flat_map(HullTriangle::edges)
            .collect();
        !edges.is_empty() && all_edges_paired(&mut edges)
    }

    #[inline]
    fn position(&self, index: VertexIndex) -> DVec3 {
        self.vertices[index as usize].position
    }

    /// Returns the first vertex maximizing `measure`, if any scores above zero.
    fn arg_max(&self, measure: impl Fn(DVec3) -> f64) -> Option<VertexIndex> {
        let mut best = 0.0;
        let mut found = None;
        for (i, v) in self.vertices.iter().enumerate() {
            let value = measure(v.position);
            if value > best {
                best = value;
                found = Some(i as VertexIndex);
            }
        }
        found
    }

    /// Builds the seed tetrahedron and its centroid.
    fn seed(&mut self, outside: &mut [OutsideData]) -> OutsideResult<()> {
        let mut a = 0;
        let mut min_y = f64::INFINITY;
        for (i, v) in self.vertices.iter().enumerate() {
            if v.position.y < min_y {
                min_y = v.position.y;
                a = i as VertexIndex;
            }
        }
        let pa = self.position(a);

        let b = self
            .arg_max(|p| pa.distance_squared(p))
            .ok_or_else(|| OutsideError::degenerate("All vertices share one position"))?;
        let pb = self.position(b);

        let c = self
            .arg_max(|p| point_line_distance_sq(pa, pb, p))
            .ok_or_else(|| OutsideError::degenerate("All vertices are collinear"))?;
        let pc = self.position(c);

        let normal = (pb - pa).cross(pc - pa).normalize();
        let d = self
            .arg_max(|p| normal.dot(p - pa).abs())
            .ok_or_else(|| OutsideError::degenerate("All vertices are coplanar"))?;
        let pd = self.position(d);

        let volume = tetrahedron_volume(pa, pb, pc, pd);
        if volume <= self.epsilon {
            return Err(OutsideError::degenerate(format!(
                "Seed tetrahedron volume {volume:e} does not exceed tolerance {:e}",
                self.epsilon
            )));
        }

        debug!(
            "Seed tetrahedron vertices [{}, {}, {}, {}], volume {}",
            a, b, c, d, volume
        );

        self.centroid = (pa + pb + pc + pd) / 4.0;
        for v in [a, b, c, d] {
            outside[v as usize].is_inside_hull = true;
        }

        let vertices = self.vertices;
        let centroid = self.centroid;
        self.hull.extend(
            [[a, b, c], [a, b, d], [a, c, d], [b, c, d]]
                .into_iter()
                .map(|indices| oriented_triangle(indices, vertices, centroid)),
        );

        Ok(())
    }

    /// Finds the unconsumed vertex furthest in front of triangle `tri`.
    fn furthest_vertex(&self, tri: usize, outside: &[OutsideData]) -> Option<VertexIndex> {
        let tri = &self.hull[tri];
        let offset = tri.plane_offset(self.vertices);

        let mut best = 0.0;
        let mut found = None;
        for (i, v) in self.vertices.iter().enumerate() {
            if outside[i].is_inside_hull {
                continue;
            }
            let distance = tri.normal.dot(v.position) - offset;
            if distance > best {
                best = distance;
                found = Some(i as VertexIndex);
            }
        }
        found
    }

    /// Inserts `vertex` into the hull and returns the horizon size.
    ///
    /// Zero means the vertex turned out to be inside the hull.
    fn add_vertex(&mut self, vertex: VertexIndex, outside: &mut [OutsideData]) -> usize {
        outside[vertex as usize].is_inside_hull = true;

        self.visible.clear();
        self.edges.clear();
        if !self.collect_visible(self.position(vertex)) {
            return 0;
        }
        self.extract_horizon();
        self.fill_horizon(vertex);

        trace!(
            "Inserted vertex {} replacing {} triangles with {}",
            vertex,
            self.visible.len(),
            self.edges.len()
        );
        self.edges.len()
    }

    /// Collects the live triangles visible from `point`.
    ///
    /// Returns false if nothing is visible or `point` lies inside a coplanar
    /// hull triangle.
    fn collect_visible(&mut self, point: DVec3) -> bool {
        let vertices = self.vertices;
        let epsilon = self.epsilon;

        for (i, tri) in self.hull.iter().enumerate() {
            if tri.removed {
                continue;
            }
            let plane = tri.plane_offset(vertices);
            let projected = tri.normal.dot(point);
            if (projected - plane).abs() <= epsilon {
                if is_inside_triangle(point, tri.corners(vertices), tri.normal, epsilon) {
                    self.visible.clear();
                    return false;
                }
                self.visible.push(i);
            } else if plane < projected {
                self.visible.push(i);
            }
        }

        !self.visible.is_empty()
    }

    /// Tombstones the visible triangles and leaves their boundary in `edges`.
    fn extract_horizon(&mut self) {
        for &i in &self.visible {
            let tri = &mut self.hull[i];
            tri.removed = true;
            self.edges.extend(tri.edges());
        }
        retain_boundary_edges(&mut self.edges);
        debug_assert!(!self.edges.is_empty(), "visible region has no boundary");
    }

    /// Connects every horizon edge to `vertex`.
    fn fill_horizon(&mut self, vertex: VertexIndex) {
        let vertices = self.vertices;
        let centroid = self.centroid;
        self.hull.extend(
            self.edges
                .iter()
                .map(|&(a, b)| oriented_triangle([a, b, vertex], vertices, centroid)),
        );
    }

    /// Removes tombstoned triangles; triangle order is not preserved.
    fn compact(&mut self) {
        let mut i = 0;
        while i < self.hull.len() {
            if self.hull[i].removed {
                self.hull.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }
}
