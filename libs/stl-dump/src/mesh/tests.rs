//! # Mesh Builder Tests
//!
//! Triangle counts and exact corner placement for every marker.

use super::*;
use approx::assert_abs_diff_eq;
use config::constants::{CONE_TRIANGLE_COUNT, SPHERE_TRIANGLE_COUNT};

fn square() -> [Vec3; 4] {
    [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ]
}

#[test]
fn test_mesh_new() {
    let mesh = Mesh::new();
    assert!(mesh.is_empty());
    assert_eq!(mesh.triangle_count(), 0);
}

#[test]
fn test_add_triangle_keeps_order() {
    let mut mesh = Mesh::new();
    mesh.add_triangle(Vec3::ZERO, Vec3::X, Vec3::Y)
        .add_triangle(Vec3::X, Vec3::Y, Vec3::Z);
    assert_eq!(mesh.triangle_count(), 2);
    assert_eq!(mesh.triangles()[0].vertices, [Vec3::ZERO, Vec3::X, Vec3::Y]);
    assert_eq!(mesh.triangles()[1].vertices, [Vec3::X, Vec3::Y, Vec3::Z]);
}

#[test]
fn test_add_point_is_fully_degenerate() {
    let p = Vec3::new(1.0, 2.0, 3.0);
    let mut mesh = Mesh::new();
    mesh.add_point(p);
    assert_eq!(mesh.triangles()[0].vertices, [p, p, p]);
}

#[test]
fn test_add_edge_repeats_end_point() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-1.0, 0.0, 5.0);
    let mut mesh = Mesh::new();
    mesh.add_edge(a, b);
    assert_eq!(mesh.triangles()[0].vertices, [a, b, b]);
}

#[test]
fn test_add_quad_appends_two() {
    let [p1, p2, p3, p4] = square();
    let mut mesh = Mesh::new();
    mesh.add_quad(p1, p2, p3, p4);
    assert_eq!(mesh.triangle_count(), 2);
}

/// Both diagonals of a square tie, and ties split along p1-p3.
#[test]
fn test_add_quad_square_splits_along_p1_p3() {
    let [p1, p2, p3, p4] = square();
    let mut mesh = Mesh::new();
    mesh.add_quad(p1, p2, p3, p4);
    assert_eq!(mesh.triangles()[0].vertices, [p1, p2, p3]);
    assert_eq!(mesh.triangles()[1].vertices, [p1, p3, p4]);
}

#[test]
fn test_add_quad_rectangle_tie() {
    let mut mesh = Mesh::new();
    let (p1, p2, p3, p4) = (
        Vec3::ZERO,
        Vec3::new(4.0, 0.0, 0.0),
        Vec3::new(4.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );
    mesh.add_quad(p1, p2, p3, p4);
    assert_eq!(mesh.triangles()[0].vertices, [p1, p2, p3]);
}

/// p3 sits next to p1, so cutting along p1-p3 would leave a sliver.
#[test]
fn test_add_quad_avoids_sliver() {
    let p1 = Vec3::ZERO;
    let p2 = Vec3::new(1.0, -1.0, 0.0);
    let p3 = Vec3::new(0.2, 0.0, 0.0);
    let p4 = Vec3::new(1.0, 1.0, 0.0);
    let mut mesh = Mesh::new();
    mesh.add_quad(p1, p2, p3, p4);
    assert_eq!(mesh.triangles()[0].vertices, [p1, p2, p4]);
    assert_eq!(mesh.triangles()[1].vertices, [p2, p3, p4]);
}

#[test]
fn test_add_cone_appends_six() {
    let mut mesh = Mesh::new();
    mesh.add_cone(Vec3::new(1.0, 2.0, 3.0), Vec3::new(-4.0, 0.5, 7.0), 0.05);
    assert_eq!(mesh.triangle_count(), CONE_TRIANGLE_COUNT);
}

#[test]
fn test_add_cone_along_z() {
    let apex = Vec3::new(0.0, 0.0, 2.0);
    let mut mesh = Mesh::new();
    mesh.add_cone(Vec3::ZERO, apex, 0.5);

    let c0 = Vec3::new(-0.5, 0.0, 0.0);
    let c1 = Vec3::new(0.0, 0.5, 0.0);
    let c2 = Vec3::new(0.5, 0.0, 0.0);
    let c3 = Vec3::new(0.0, -0.5, 0.0);
    let tris = mesh.triangles();
    assert_eq!(tris[0].vertices, [c0, c1, c2]);
    assert_eq!(tris[1].vertices, [c0, c2, c3]);
    assert_eq!(tris[2].vertices, [c0, c1, apex]);
    assert_eq!(tris[3].vertices, [c1, c2, apex]);
    assert_eq!(tris[4].vertices, [c2, c3, apex]);
    assert_eq!(tris[5].vertices, [c3, c0, apex]);
}

#[test]
fn test_add_cone_base_is_perpendicular() {
    let base = Vec3::new(1.0, 1.0, 1.0);
    let apex = Vec3::new(3.0, -2.0, 5.0);
    let axis = (apex - base).normalize();
    let mut mesh = Mesh::new();
    mesh.add_cone(base, apex, 0.25);

    for side in &mesh.triangles()[2..] {
        for corner in &side.vertices[..2] {
            let offset = *corner - base;
            assert_abs_diff_eq!(offset.dot(axis), 0.0, epsilon = 1e-5);
            assert_abs_diff_eq!(offset.length(), 0.25, epsilon = 1e-5);
        }
        assert_eq!(side[2], apex);
    }
}

#[test]
fn test_add_scaled_cone_tracks_length() {
    let base = Vec3::ZERO;
    let apex = Vec3::new(0.0, 10.0, 0.0);
    let mut mesh = Mesh::new();
    mesh.add_scaled_cone(base, apex, 0.05);

    let corner = mesh.triangles()[2][0];
    assert_abs_diff_eq!(corner.distance(base), 0.5, epsilon = 1e-6);
}

/// A zero-length arrow still appends six triangles, with NaN corners.
#[test]
fn test_add_cone_zero_length_propagates_nan() {
    let p = Vec3::new(1.0, 1.0, 1.0);
    let mut mesh = Mesh::new();
    mesh.add_cone(p, p, 0.05);
    assert_eq!(mesh.triangle_count(), 6);
    assert!(mesh.triangles()[2][0].is_nan());
}

#[test]
fn test_add_sphere_appends_twenty() {
    let mut mesh = Mesh::new();
    mesh.add_sphere(Vec3::new(5.0, 5.0, 5.0), 0.1);
    assert_eq!(mesh.triangle_count(), SPHERE_TRIANGLE_COUNT);
}

#[test]
fn test_add_sphere_is_centered() {
    let center = Vec3::new(-3.0, 2.0, 8.0);
    let radius = 2.0;
    let mut mesh = Mesh::new();
    mesh.add_sphere(center, radius);

    let expected = radius * (1.0 + config::constants::GOLDEN_RATIO.powi(2)).sqrt();
    for corner in mesh.iter().flat_map(|t| t.vertices) {
        assert_abs_diff_eq!(corner.distance(center), expected, epsilon = 1e-4);
    }
}

#[test]
fn test_merge_concatenates() {
    let mut a = Mesh::new();
    a.add_point(Vec3::ZERO);
    let mut b = Mesh::new();
    b.add_point(Vec3::ZERO).add_edge(Vec3::X, Vec3::Y);

    a.merge(&b).merge(&b);
    assert_eq!(a.triangle_count(), 5);
    assert_eq!(a.triangles()[1], b.triangles()[0]);
    assert_eq!(a.triangles()[4], b.triangles()[1]);
}

#[test]
fn test_collect_and_extend() {
    let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
    let mut mesh: Mesh = std::iter::repeat(tri).take(3).collect();
    mesh.extend([tri]);
    assert_eq!(mesh.triangle_count(), 4);
    assert_eq!(mesh.into_iter().count(), 4);
}

#[test]
fn test_serde_round_trip() {
    let mut mesh = Mesh::new();
    mesh.add_edge(Vec3::ZERO, Vec3::new(1.5, -2.0, 0.25));
    let json = serde_json::to_string(&mesh).unwrap();
    let back: Mesh = serde_json::from_str(&json).unwrap();
    assert_eq!(back, mesh);
}
