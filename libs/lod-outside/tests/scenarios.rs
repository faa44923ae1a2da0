mod common;

use common::{cavity_cube, marker, outer_wall, pit_slab, unit_cube};
use glam::DVec3;
use lod_outside::{LodMesh, OutsideError, OutsideMarker};

#[test]
fn cube_marks_every_vertex() {
    let mesh = unit_cube();
    let mut marker = marker(&mesh, 0.9);
    marker.mark_outside().unwrap();

    assert_eq!(marker.hull().len(), 12);
    assert_eq!(marker.outer_wall_vertices().count(), 8);
}

#[test]
fn centered_cube_marks_every_vertex() {
    let positions = common::box_corners(DVec3::splat(-0.5), DVec3::splat(0.5));
    let mesh = LodMesh::from_indexed(&positions, &common::BOX_TRIANGLES).unwrap();
    assert_eq!(outer_wall(&mesh, 0.9).len(), 8);
}

#[test]
fn cavity_stays_unmarked() {
    let mesh = cavity_cube();
    let mut marker = marker(&mesh, 0.5);
    marker.mark_outside().unwrap();

    assert_eq!(marker.hull().len(), 12);
    for tri in marker.hull() {
        assert!(tri.vertices.iter().all(|&v| v < 8), "hull uses cavity vertex");
    }
    assert_eq!(marker.outer_wall_vertices().collect::<Vec<_>>(), (0..8).collect::<Vec<_>>());
    assert!((8..16).all(|v| !marker.is_outer_wall_vertex(v)));
}

#[test]
fn pit_bottom_depends_on_walk_angle() {
    let mesh = pit_slab();
    assert!(!outer_wall(&mesh, 0.707).contains(&12));
    assert!(outer_wall(&mesh, 0.4).contains(&12));
}

#[test]
fn planar_mesh_is_degenerate() {
    let positions = [DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y];
    let mesh = LodMesh::from_indexed(&positions, &[[0, 1, 2], [0, 2, 3]]).unwrap();
    let mut marker = marker(&mesh, 0.5);

    let err = marker.mark_outside().unwrap_err();
    assert!(matches!(err, OutsideError::DegenerateGeometry { .. }));
    assert!(marker.hull().is_empty());
    assert_eq!(marker.outer_wall_vertices().count(), 0);
}

#[test]
fn flat_tetrahedron_below_tolerance_is_degenerate() {
    let positions = [DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::new(0.3, 0.3, 1e-17)];
    let mesh = LodMesh::from_indexed(&positions, &[]).unwrap();
    let mut marker = marker(&mesh, 0.5);
    assert!(matches!(
        marker.mark_outside(),
        Err(OutsideError::DegenerateGeometry { .. })
    ));
}

#[test]
fn invalid_configuration_is_rejected() {
    let mesh = unit_cube();
    let cases = [(0.0, 0.5), (-1.0, 0.5), (f64::INFINITY, 0.5), (1.0, -2.0), (1.0, f64::NAN)];
    for (radius, walk_angle) in cases {
        let result = OutsideMarker::new(mesh.vertices(), mesh.triangles(), radius, walk_angle);
        assert!(
            matches!(result, Err(OutsideError::InvalidInput { .. })),
            "radius {radius}, walk angle {walk_angle}"
        );
    }
}

#[test]
fn regenerating_hull_clears_classification() {
    let mesh = unit_cube();
    let mut marker = marker(&mesh, 0.5);
    marker.mark_outside().unwrap();
    assert_eq!(marker.outer_wall_vertices().count(), 8);

    marker.generate_hull().unwrap();
    assert_eq!(marker.outer_wall_vertices().count(), 0);
    assert_eq!(marker.mark_vertices().unwrap(), 8);
}
