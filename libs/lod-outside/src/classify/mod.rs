//! # Outer Wall Classification
//!
//! Flood fill from every hull triangle across mesh triangles whose normals
//! stay close to the hull triangle normal.
//!
//! A vertex is an outer wall vertex if some pass reaches it. Each pass keeps
//! its own visited set, so a vertex reached by one hull face is still walked
//! again by the next one; the classification flag is only ever set.
//!
//! The walk angle is a cosine: a mesh triangle is crossed while
//! `hull_normal · triangle_normal > walk_angle`.


use crate::error::{OutsideError, OutsideResult};
use crate::hull::HullTriangle;
use crate::mesh::{LodTriangle, LodVertex, VertexIndex};
use crate::outside::OutsideData;
use tracing::{debug, info};

/// Marks mesh vertices reachable from the hull surface.
#[derive(Debug)]
pub struct OuterWallClassifier<'a> {
    vertices: &'a [LodVertex],
    triangles: &'a [LodTriangle],
    walk_angle: f64,
    stack: Vec<VertexIndex>,
}

impl<'a> OuterWallClassifier<'a> {
    /// Creates a classifier over the mesh arrays.
    ///
    /// Adjacency lists in `vertices` must index into `triangles`.
    pub fn new(vertices: &'a [LodVertex], triangles: &'a [LodTriangle], walk_angle: f64) -> Self {
        Self {
            vertices,
            triangles,
            walk_angle,
            stack: Vec::new(),
        }
    }

    /// Cosine threshold for crossing a mesh triangle.
    #[inline]
    pub fn walk_angle(&self) -> f64 {
        self.walk_angle
    }

    /// Clears `is_outer_wall_vertex` and runs one pass per hull triangle.
    ///
    /// Returns the number of outer wall vertices.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `outside` is not parallel to the vertex array.
    pub fn mark_vertices(
        &mut self,
        hull: &[HullTriangle],
        outside: &mut [OutsideData],
    ) -> OutsideResult<usize> {
        if outside.len() != self.vertices.len() {
            return Err(OutsideError::invalid_input(format!(
                "Outside data has {} records for {} vertices",
                outside.len(),
                self.vertices.len()
            )));
        }

        for data in outside.iter_mut() {
            data.is_outer_wall_vertex = false;
        }
        for face in hull {
            self.flood_pass(face, outside);
        }

        let count = outside.iter().filter(|d| d.is_outer_wall_vertex).count();
        info!(
            "Marked {} of {} vertices as outer wall (walk angle {})",
            count,
            self.vertices.len(),
            self.walk_angle
        );
        Ok(count)
    }

    /// Floods outward from the corners of one hull triangle.
    pub(crate) fn flood_pass(&mut self, face: &HullTriangle, outside: &mut [OutsideData]) {
        for data in outside.iter_mut() {
            data.is_outer_wall_vertex_in_pass = false;
        }
        self.stack.clear();
        self.visit(face.vertices, outside);

        let vertices = self.vertices;
        let triangles = self.triangles;
        let mut crossed = 0usize;
        while let Some(vertex) = self.stack.pop() {
            for &t in &vertices[vertex as usize].triangles {
                let tri = &triangles[t as usize];
                if face.normal.dot(tri.normal) > self.walk_angle {
                    crossed += 1;
                    self.visit(tri.vertices, outside);
                }
            }
        }

        debug!(
            "Flood pass from hull triangle {:?} crossed {} mesh triangles",
            face.vertices, crossed
        );
    }

    fn visit(&mut self, corners: [VertexIndex; 3], outside: &mut [OutsideData]) {
        for v in corners {
            let data = &mut outside[v as usize];
            if !data.is_outer_wall_vertex_in_pass {
                data.is_outer_wall_vertex_in_pass = true;
                data.is_outer_wall_vertex = true;
                self.stack.push(v);
            }
        }
    }
}
