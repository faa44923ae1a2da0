//! Mesh fixtures shared by the unit tests.

use crate::mesh::{LodMesh, VertexIndex};
use glam::DVec3;

/// Axis-aligned box with outward winding, 8 vertices and 12 triangles.
pub fn cuboid(min: DVec3, max: DVec3) -> LodMesh {
    let positions = [
        DVec3::new(min.x, min.y, min.z),
        DVec3::new(max.x, min.y, min.z),
        DVec3::new(max.x, max.y, min.z),
        DVec3::new(min.x, max.y, min.z),
        DVec3::new(min.x, min.y, max.z),
        DVec3::new(max.x, min.y, max.z),
        DVec3::new(max.x, max.y, max.z),
        DVec3::new(min.x, max.y, max.z),
    ];
    LodMesh::from_indexed(&positions, &CUBOID_TRIANGLES).unwrap()
}

pub const CUBOID_TRIANGLES: [[VertexIndex; 3]; 12] = [
    [0, 2, 1],
    [0, 3, 2],
    [4, 5, 6],
    [4, 6, 7],
    [0, 1, 5],
    [0, 5, 4],
    [2, 3, 7],
    [2, 7, 6],
    [0, 4, 7],
    [0, 7, 3],
    [1, 2, 6],
    [1, 6, 5],
];

pub fn unit_cube() -> LodMesh {
    cuboid(DVec3::ZERO, DVec3::ONE)
}

/// Unit cube whose faces are split into an `n` x `n` grid of quads.
///
/// Grid vertices on faces and edges are coplanar with the hull.
pub fn grid_cube(n: u32) -> LodMesh {
    fn vertex_id(p: DVec3, positions: &mut Vec<DVec3>) -> VertexIndex {
        match positions.iter().position(|&q| q == p) {
            Some(i) => i as VertexIndex,
            None => {
                positions.push(p);
                (positions.len() - 1) as VertexIndex
            }
        }
    }

    let mut positions: Vec<DVec3> = Vec::new();
    let mut indices = Vec::new();
    for axis in 0..3 {
        for side in [0.0, 1.0] {
            for i in 0..n {
                for j in 0..n {
                    let point = |a: u32, b: u32| {
                        let mut c = [0.0; 3];
                        c[axis] = side;
                        c[(axis + 1) % 3] = a as f64 / n as f64;
                        c[(axis + 2) % 3] = b as f64 / n as f64;
                        DVec3::from_array(c)
                    };
                    let mut quad = [
                        vertex_id(point(i, j), &mut positions),
                        vertex_id(point(i + 1, j), &mut positions),
                        vertex_id(point(i + 1, j + 1), &mut positions),
                        vertex_id(point(i, j + 1), &mut positions),
                    ];
                    if side == 0.0 {
                        quad.reverse();
                    }
                    indices.push([quad[0], quad[1], quad[2]]);
                    indices.push([quad[0], quad[2], quad[3]]);
                }
            }
        }
    }

    LodMesh::from_indexed(&positions, &indices).unwrap()
}

/// Deterministic points in `[-1, 1]^3` from a 64-bit LCG.
pub fn random_points(count: usize, seed: u64) -> Vec<DVec3> {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };
    (0..count)
        .map(|_| {
            let x = next() * 2.0 - 1.0;
            let y = next() * 2.0 - 1.0;
            let z = next() * 2.0 - 1.0;
            DVec3::new(x, y, z)
        })
        .collect()
}

/// Points spread evenly over the unit sphere.
pub fn fibonacci_sphere(count: usize) -> Vec<DVec3> {
    let golden = std::f64::consts::PI * (3.0 - 5.0_f64.sqrt());
    (0..count)
        .map(|i| {
            let y = 1.0 - 2.0 * (i as f64 + 0.5) / count as f64;
            let r = (1.0 - y * y).sqrt();
            let theta = golden * i as f64;
            DVec3::new(r * theta.cos(), y, r * theta.sin())
        })
        .collect()
}

/// Point cloud without triangles.
pub fn cloud(points: &[DVec3]) -> LodMesh {
    LodMesh::from_indexed(points, &[]).unwrap()
}

/// Unit cube enclosing an inward-facing cube cavity at `[0.3, 0.7]^3`.
///
/// Cavity vertices start at index 8.
pub fn cavity_cube() -> LodMesh {
    let outer = unit_cube();
    let inner = cuboid(DVec3::splat(0.3), DVec3::splat(0.7));

    let positions: Vec<DVec3> = outer
        .vertices()
        .iter()
        .chain(inner.vertices())
        .map(|v| v.position)
        .collect();
    let indices: Vec<[VertexIndex; 3]> = CUBOID_TRIANGLES
        .iter()
        .copied()
        .chain(CUBOID_TRIANGLES.iter().map(|&[a, b, c]| [a + 8, c + 8, b + 8]))
        .collect();

    LodMesh::from_indexed(&positions, &indices).unwrap()
}

/// Flat 4 x 1 x 4 slab with a square pit sunk into its top face.
///
/// Vertices 8..12 ring the pit opening on the top face and vertex 12 is the
/// pit bottom. Pit wall normals make a cosine of about 0.53 with +y.
pub fn pit_slab() -> LodMesh {
    let positions = [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(4.0, 0.0, 0.0),
        DVec3::new(4.0, 0.0, 4.0),
        DVec3::new(0.0, 0.0, 4.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(4.0, 1.0, 0.0),
        DVec3::new(4.0, 1.0, 4.0),
        DVec3::new(0.0, 1.0, 4.0),
        DVec3::new(1.5, 1.0, 1.5),
        DVec3::new(2.5, 1.0, 1.5),
        DVec3::new(2.5, 1.0, 2.5),
        DVec3::new(1.5, 1.0, 2.5),
        DVec3::new(2.0, 0.2, 2.0),
    ];
    let indices = [
        // bottom and sides
        [0, 1, 2],
        [0, 2, 3],
        [0, 4, 5],
        [0, 5, 1],
        [1, 5, 6],
        [1, 6, 2],
        [2, 6, 7],
        [2, 7, 3],
        [3, 7, 4],
        [3, 4, 0],
        // top ring around the opening
        [4, 8, 5],
        [5, 8, 9],
        [5, 9, 6],
        [6, 9, 10],
        [6, 10, 7],
        [7, 10, 11],
        [7, 11, 4],
        [4, 11, 8],
        // pit walls
        [8, 12, 9],
        [9, 12, 10],
        [10, 12, 11],
        [11, 12, 8],
    ];
    LodMesh::from_indexed(&positions, &indices).unwrap()
}

/// Floor quad on `y = 0` with a wall quad standing on its `z = 0` edge.
///
/// Floor normals are +y and wall normals are +z; vertices 4 and 5 belong to
/// the wall only.
pub fn floor_and_wall() -> LodMesh {
    let positions = [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 1.0),
        DVec3::new(0.0, 0.0, 1.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
    ];
    LodMesh::from_indexed(&positions, &[[0, 3, 2], [0, 2, 1], [0, 1, 5], [0, 5, 4]]).unwrap()
}
