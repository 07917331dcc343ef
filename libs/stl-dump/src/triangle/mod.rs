//! # Triangle Record
//!
//! One facet of a triangle soup, laid out like a binary STL record.

use config::constants::STL_TRIANGLE_SIZE_BYTES;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::{Index, IndexMut};

/// A triangle with its own copy of every vertex.
///
/// The normal is a fixed placeholder rather than the true face normal; STL
/// viewers recompute normals from the winding anyway. The record encodes to
/// exactly [`Triangle::ENCODED_LEN`] bytes.
///
/// # Example
///
/// ```rust
/// use stl_dump::{Triangle, Vec3};
///
/// let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
/// assert_eq!(tri.normal, Triangle::PLACEHOLDER_NORMAL);
/// assert_eq!(tri[1], Vec3::X);
/// assert_eq!(tri.to_bytes().len(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// Facet normal as stored in the file
    pub normal: Vec3,
    /// Corners in winding order
    pub vertices: [Vec3; 3],
    /// Attribute byte count, always written as zero
    pub attribute: u16,
}

const _: () = assert!(Triangle::ENCODED_LEN == 4 * 3 * 4 + 2);

impl Triangle {
    /// Normal written for every facet unless computed normals are requested.
    pub const PLACEHOLDER_NORMAL: Vec3 = Vec3::Z;

    /// Size of one encoded record.
    pub const ENCODED_LEN: usize = STL_TRIANGLE_SIZE_BYTES;

    /// Creates a triangle with the placeholder normal.
    pub const fn new(p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        Self {
            normal: Self::PLACEHOLDER_NORMAL,
            vertices: [p1, p2, p3],
            attribute: 0,
        }
    }

    /// Area of the triangle spanned by three points, by Heron's formula.
    ///
    /// The side lengths are sorted and combined in Kahan's arrangement, so the
    /// result does not depend on the order of the arguments and congruent
    /// triangles compare exactly equal. A negative radicand, or a NaN side,
    /// yields NaN, which is returned as such.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stl_dump::{Triangle, Vec3};
    ///
    /// let area = Triangle::area(Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0), Vec3::new(0.0, 3.0, 0.0));
    /// assert!((area - 6.0).abs() < 1e-5);
    /// ```
    pub fn area(p1: Vec3, p2: Vec3, p3: Vec3) -> f32 {
        let mut sides = [p1.distance(p2), p1.distance(p3), p2.distance(p3)];
        sides.sort_by(|x, y| y.partial_cmp(x).unwrap_or(Ordering::Equal));
        let [a, b, c] = sides;
        0.25 * ((a + (b + c)) * (c - (a - b)) * (c + (a - b)) * (a + (b - c))).sqrt()
    }

    /// Unit normal from the winding, or zero for degenerate triangles.
    pub fn face_normal(&self) -> Vec3 {
        let [v0, v1, v2] = self.vertices;
        (v1 - v0).cross(v2 - v0).normalize_or_zero()
    }

    /// Encodes the record with its stored normal.
    pub fn to_bytes(&self) -> [u8; Self::ENCODED_LEN] {
        self.to_bytes_with_normal(self.normal)
    }

    /// Encodes the record, substituting `normal` for the stored one.
    ///
    /// Layout: normal, then the three vertices, each as three little-endian
    /// `f32`, followed by the little-endian attribute.
    pub fn to_bytes_with_normal(&self, normal: Vec3) -> [u8; Self::ENCODED_LEN] {
        let mut bytes = [0u8; Self::ENCODED_LEN];
        let floats = std::iter::once(normal)
            .chain(self.vertices)
            .flat_map(|v| v.to_array());
        for (chunk, value) in bytes.chunks_exact_mut(4).zip(floats) {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        bytes[Self::ENCODED_LEN - 2..].copy_from_slice(&self.attribute.to_le_bytes());
        bytes
    }
}

/// Indices 0 and 1 select the first two vertices; anything else selects the
/// third.
impl Index<usize> for Triangle {
    type Output = Vec3;

    fn index(&self, index: usize) -> &Vec3 {
        match index {
            0 => &self.vertices[0],
            1 => &self.vertices[1],
            _ => &self.vertices[2],
        }
    }
}

impl IndexMut<usize> for Triangle {
    fn index_mut(&mut self, index: usize) -> &mut Vec3 {
        match index {
            0 => &mut self.vertices[0],
            1 => &mut self.vertices[1],
            _ => &mut self.vertices[2],
        }
    }
}

#[cfg(test)]
mod tests;
