//! Meshes shared by the integration tests.

#![allow(dead_code)]

use glam::DVec3;
use lod_outside::{LodMesh, OutsideMarker, VertexIndex};

pub const BOX_TRIANGLES: [[VertexIndex; 3]; 12] = [
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

pub fn box_corners(min: DVec3, max: DVec3) -> [DVec3; 8] {
    [
        DVec3::new(min.x, min.y, min.z),
        DVec3::new(max.x, min.y, min.z),
        DVec3::new(max.x, max.y, min.z),
        DVec3::new(min.x, max.y, min.z),
        DVec3::new(min.x, min.y, max.z),
        DVec3::new(max.x, min.y, max.z),
        DVec3::new(max.x, max.y, max.z),
        DVec3::new(min.x, max.y, max.z),
    ]
}

pub fn unit_cube() -> LodMesh {
    LodMesh::from_indexed(&box_corners(DVec3::ZERO, DVec3::ONE), &BOX_TRIANGLES).unwrap()
}

/// Unit cube with an inward-facing cavity; cavity vertices are 8..16.
pub fn cavity_cube() -> LodMesh {
    let mut positions = box_corners(DVec3::ZERO, DVec3::ONE).to_vec();
    positions.extend(box_corners(DVec3::splat(0.3), DVec3::splat(0.7)));

    let mut indices = BOX_TRIANGLES.to_vec();
    indices.extend(BOX_TRIANGLES.iter().map(|&[a, b, c]| [a + 8, c + 8, b + 8]));
    LodMesh::from_indexed(&positions, &indices).unwrap()
}

/// 4 x 1 x 4 slab with a pyramidal pit; vertex 12 is the pit bottom.
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
        [0, 1, 2], [0, 2, 3], [0, 4, 5], [0, 5, 1], [1, 5, 6],
        [1, 6, 2], [2, 6, 7], [2, 7, 3], [3, 7, 4], [3, 4, 0],
        [4, 8, 5], [5, 8, 9], [5, 9, 6], [6, 9, 10], [6, 10, 7],
        [7, 10, 11], [7, 11, 4], [4, 11, 8],
        [8, 12, 9], [9, 12, 10], [10, 12, 11], [11, 12, 8],
    ];
    LodMesh::from_indexed(&positions, &indices).unwrap()
}

/// Deterministic points in `[-1, 1]^3`.
pub fn random_points(count: usize, seed: u64) -> Vec<DVec3> {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64 * 2.0 - 1.0
    };
    (0..count).map(|_| DVec3::new(next(), next(), next())).collect()
}

pub fn marker(mesh: &LodMesh, walk_angle: f64) -> OutsideMarker<'_> {
    OutsideMarker::new(
        mesh.vertices(),
        mesh.triangles(),
        mesh.bounding_sphere_radius(),
        walk_angle,
    )
    .unwrap()
}

pub fn outer_wall(mesh: &LodMesh, walk_angle: f64) -> Vec<VertexIndex> {
    let mut marker = marker(mesh, walk_angle);
    marker.mark_outside().unwrap();
    marker.outer_wall_vertices().collect()
}
