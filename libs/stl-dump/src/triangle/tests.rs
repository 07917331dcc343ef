//! Tests for the triangle record.

use super::*;
use approx::assert_abs_diff_eq;

fn read_f32(bytes: &[u8], offset: usize) -> f32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&bytes[offset..offset + 4]);
    f32::from_le_bytes(word)
}

#[test]
fn test_new_uses_placeholder_normal() {
    let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
    assert_eq!(tri.normal, Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(tri.attribute, 0);
}

#[test]
fn test_area_right_triangle() {
    let area = Triangle::area(Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0), Vec3::new(0.0, 4.0, 0.0));
    assert_abs_diff_eq!(area, 6.0, epsilon = 1e-5);
}

#[test]
fn test_area_is_order_independent() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-2.0, 0.5, 1.0);
    let c = Vec3::new(0.0, -1.0, 4.0);
    let area = Triangle::area(a, b, c);
    assert_eq!(Triangle::area(c, a, b), area);
    assert_eq!(Triangle::area(b, a, c), area);
}

#[test]
fn test_area_of_collinear_points_is_zero() {
    let area = Triangle::area(Vec3::ZERO, Vec3::X, Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(area, 0.0);
}

#[test]
fn test_area_of_coincident_points_is_zero() {
    let p = Vec3::new(1.0, 1.0, 1.0);
    assert_eq!(Triangle::area(p, p, p), 0.0);
}

/// NaN coordinates are not rejected.
#[test]
fn test_area_propagates_nan() {
    let nan = Vec3::splat(f32::NAN);
    assert!(Triangle::area(nan, Vec3::X, Vec3::Y).is_nan());
}

#[test]
fn test_index_is_permissive() {
    let tri = Triangle::new(Vec3::X, Vec3::Y, Vec3::Z);
    assert_eq!(tri[0], Vec3::X);
    assert_eq!(tri[1], Vec3::Y);
    assert_eq!(tri[2], Vec3::Z);
    assert_eq!(tri[3], Vec3::Z);
    assert_eq!(tri[usize::MAX], Vec3::Z);
}

#[test]
fn test_index_mut_writes_through() {
    let mut tri = Triangle::new(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO);
    tri[1] = Vec3::ONE;
    tri[7] = Vec3::NEG_ONE;
    assert_eq!(tri.vertices, [Vec3::ZERO, Vec3::ONE, Vec3::NEG_ONE]);
}

#[test]
fn test_face_normal() {
    let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
    assert_eq!(tri.face_normal(), Vec3::Z);

    let flipped = Triangle::new(Vec3::ZERO, Vec3::Y, Vec3::X);
    assert_eq!(flipped.face_normal(), -Vec3::Z);
}

#[test]
fn test_face_normal_of_degenerate_is_zero() {
    let point = Triangle::new(Vec3::ONE, Vec3::ONE, Vec3::ONE);
    assert_eq!(point.face_normal(), Vec3::ZERO);
}

#[test]
fn test_to_bytes_layout() {
    let tri = Triangle::new(
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(4.0, 5.0, 6.0),
        Vec3::new(7.0, 8.0, 9.0),
    );
    let bytes = tri.to_bytes();
    assert_eq!(bytes.len(), 50);

    let expected = [0.0, 0.0, 1.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
    for (i, value) in expected.iter().enumerate() {
        assert_eq!(read_f32(&bytes, i * 4), *value);
    }
    assert_eq!(&bytes[48..], &[0, 0]);
}

/// Stored floats come back with identical bit patterns, including NaN and -0.
#[test]
fn test_to_bytes_is_lossless() {
    let tri = Triangle::new(
        Vec3::new(0.1, -0.0, f32::MIN_POSITIVE),
        Vec3::new(f32::NAN, f32::INFINITY, 1e-38),
        Vec3::new(12_345.5, -7.25, f32::MAX),
    );
    let bytes = tri.to_bytes();
    let originals = std::iter::once(tri.normal)
        .chain(tri.vertices)
        .flat_map(|v| v.to_array());
    for (i, value) in originals.enumerate() {
        assert_eq!(read_f32(&bytes, i * 4).to_bits(), value.to_bits());
    }
}

#[test]
fn test_to_bytes_with_normal_overrides_stored() {
    let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
    let bytes = tri.to_bytes_with_normal(Vec3::new(0.5, 0.25, -1.0));
    assert_eq!(read_f32(&bytes, 0), 0.5);
    assert_eq!(read_f32(&bytes, 4), 0.25);
    assert_eq!(read_f32(&bytes, 8), -1.0);
    assert_eq!(tri.normal, Triangle::PLACEHOLDER_NORMAL);
}
