//! # Mesh Builder
//!
//! Append-only triangle soup with constructors for debug markers.

use crate::core::vec3::auxiliary_axis;
use crate::primitives::icosahedron;
use crate::triangle::Triangle;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// An ordered collection of independent triangles.
///
/// Vertices are never shared or merged; insertion order only decides the
/// file layout. Builder methods return `&mut Self` so markers can be
/// chained.
///
/// # Example
///
/// ```rust
/// use stl_dump::{Mesh, Vec3};
///
/// let mut mesh = Mesh::new();
/// mesh.add_point(Vec3::ZERO)
///     .add_edge(Vec3::ZERO, Vec3::X)
///     .add_sphere(Vec3::Y, 0.5);
/// assert_eq!(mesh.triangle_count(), 22);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mesh with room for `triangle_count` triangles.
    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh holds no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns the triangles in insertion order.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Iterates over the triangles in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    /// Appends a ready-made triangle.
    pub fn push(&mut self, triangle: Triangle) -> &mut Self {
        self.triangles.push(triangle);
        self
    }

    /// Appends the triangle `(p1, p2, p3)`.
    pub fn add_triangle(&mut self, p1: Vec3, p2: Vec3, p3: Vec3) -> &mut Self {
        self.push(Triangle::new(p1, p2, p3))
    }

    /// Marks a point with the fully degenerate triangle `(p, p, p)`.
    pub fn add_point(&mut self, p: Vec3) -> &mut Self {
        self.add_triangle(p, p, p)
    }

    /// Marks a segment with the degenerate triangle `(p1, p2, p2)`.
    pub fn add_edge(&mut self, p1: Vec3, p2: Vec3) -> &mut Self {
        self.add_triangle(p1, p2, p2)
    }

    /// Splits the quad `p1 p2 p3 p4` into two triangles.
    ///
    /// The diagonal whose smaller triangle is larger wins, which avoids thin
    /// slivers. Ties go to the `p1–p3` diagonal. A NaN area only loses to a
    /// number, as with C's `fmin`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stl_dump::{Mesh, Vec3};
    ///
    /// let mut mesh = Mesh::new();
    /// mesh.add_quad(Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y);
    /// assert_eq!(mesh.triangle_count(), 2);
    /// assert_eq!(mesh.triangles()[1].vertices, [Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0), Vec3::Y]);
    /// ```
    pub fn add_quad(&mut self, p1: Vec3, p2: Vec3, p3: Vec3, p4: Vec3) -> &mut Self {
        let along_13 = Triangle::area(p1, p2, p3).min(Triangle::area(p1, p3, p4));
        let along_24 = Triangle::area(p1, p2, p4).min(Triangle::area(p2, p3, p4));

        if along_13 < along_24 {
            self.add_triangle(p1, p2, p4).add_triangle(p2, p3, p4)
        } else {
            self.add_triangle(p1, p2, p3).add_triangle(p1, p3, p4)
        }
    }

    /// Adds an arrow head from `base` to `apex`.
    ///
    /// The base is a square of half-diagonal `base_size` perpendicular to the
    /// axis, split by [`add_quad`](Self::add_quad), followed by four side
    /// triangles meeting at `apex`. Always appends six triangles. A zero-length
    /// axis produces NaN corners.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stl_dump::{Mesh, Vec3};
    ///
    /// let mut mesh = Mesh::new();
    /// mesh.add_cone(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0), 0.1);
    /// assert_eq!(mesh.triangle_count(), 6);
    /// ```
    pub fn add_cone(&mut self, base: Vec3, apex: Vec3, base_size: f32) -> &mut Self {
        let direction = (apex - base).normalize();
        let basis_x = direction.cross(auxiliary_axis(direction)).normalize() * base_size;
        let basis_y = basis_x.cross(direction).normalize() * base_size;

        let corners = [
            base + basis_x,
            base + basis_y,
            base - basis_x,
            base - basis_y,
        ];
        self.add_quad(corners[0], corners[1], corners[2], corners[3]);
        for i in 0..corners.len() {
            self.add_triangle(corners[i], corners[(i + 1) % corners.len()], apex);
        }
        self
    }

    /// Adds an arrow head whose base grows with its length.
    ///
    /// The base half-diagonal is `ratio * |apex - base|`.
    pub fn add_scaled_cone(&mut self, base: Vec3, apex: Vec3, ratio: f32) -> &mut Self {
        self.add_cone(base, apex, ratio * base.distance(apex))
    }

    /// Adds an icosahedron around `center`, scaled by `radius`.
    ///
    /// Always appends twenty triangles.
    pub fn add_sphere(&mut self, center: Vec3, radius: f32) -> &mut Self {
        for [p1, p2, p3] in icosahedron(center, radius) {
            self.add_triangle(p1, p2, p3);
        }
        self
    }

    /// Appends every triangle of `other`, duplicates included.
    pub fn merge(&mut self, other: &Mesh) -> &mut Self {
        self.triangles.extend_from_slice(&other.triangles);
        self
    }
}

impl Extend<Triangle> for Mesh {
    fn extend<I: IntoIterator<Item = Triangle>>(&mut self, iter: I) {
        self.triangles.extend(iter);
    }
}

impl FromIterator<Triangle> for Mesh {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self {
            triangles: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Mesh {
    type Item = Triangle;
    type IntoIter = std::vec::IntoIter<Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mesh {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<Triangle>> for Mesh {
    fn from(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }
}

#[cfg(test)]
mod tests;
