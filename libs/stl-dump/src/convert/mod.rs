//! # Primitive Converters
//!
//! Stateless helpers that turn ordered point sequences into meshes.
//!
//! ```text
//! &[Vec3] ── direction ──> cones between consecutive points
//!         ── line ───────> edge markers between consecutive points
//!         ── sphere ─────> one icosahedron per point
//!         ── points ─────> one point marker per point
//! ```

use crate::core::vec3::bounds;
use crate::mesh::Mesh;
use crate::triangle::Triangle;
use config::constants::{
    CONE_BASE_SIZE, CONE_TRIANGLE_COUNT, ONE_SPHERE_RADIUS, RATIO_SPHERE_RADIUS,
    SPHERE_TRIANGLE_COUNT,
};
use glam::Vec3;

/// Draws a chain of arrows, one cone per consecutive pair of points.
///
/// Fewer than two points give an empty mesh.
///
/// # Example
///
/// ```rust
/// use stl_dump::convert::direction;
/// use stl_dump::Vec3;
///
/// assert!(direction(&[Vec3::ZERO]).is_empty());
/// assert_eq!(direction(&[Vec3::ZERO, Vec3::X]).triangle_count(), 6);
/// ```
pub fn direction(points: &[Vec3]) -> Mesh {
    let mut mesh = Mesh::with_capacity(points.len().saturating_sub(1) * CONE_TRIANGLE_COUNT);
    for pair in points.windows(2) {
        mesh.add_cone(pair[0], pair[1], CONE_BASE_SIZE);
    }
    mesh
}

/// Draws a polyline, one edge marker per consecutive pair of points.
pub fn line(points: &[Vec3]) -> Mesh {
    let mut mesh = Mesh::with_capacity(points.len().saturating_sub(1));
    for pair in points.windows(2) {
        mesh.add_edge(pair[0], pair[1]);
    }
    mesh
}

/// Radius used by [`sphere`] for this point cloud.
///
/// `None` for an empty cloud, [`ONE_SPHERE_RADIUS`] for a single point,
/// otherwise the bounding-box diagonal times [`RATIO_SPHERE_RADIUS`].
///
/// # Example
///
/// ```rust
/// use stl_dump::convert::sphere_radius;
/// use stl_dump::Vec3;
///
/// let radius = sphere_radius(&[Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)]).unwrap();
/// assert!((radius - 0.25).abs() < 1e-6);
/// ```
pub fn sphere_radius(points: &[Vec3]) -> Option<f32> {
    match points {
        [] => None,
        [_] => Some(ONE_SPHERE_RADIUS),
        _ => {
            let (min, max) = bounds(points)?;
            Some(max.distance(min) * RATIO_SPHERE_RADIUS)
        }
    }
}

/// Marks every point with a sphere sized relative to the whole cloud.
pub fn sphere(points: &[Vec3]) -> Mesh {
    let Some(radius) = sphere_radius(points) else {
        return Mesh::new();
    };
    let mut mesh = Mesh::with_capacity(points.len() * SPHERE_TRIANGLE_COUNT);
    for &center in points {
        mesh.add_sphere(center, radius);
    }
    mesh
}

/// Marks every point with a degenerate point triangle.
pub fn points(points: &[Vec3]) -> Mesh {
    let mut mesh = Mesh::with_capacity(points.len());
    for &p in points {
        mesh.add_point(p);
    }
    mesh
}

impl From<&[Vec3]> for Mesh {
    fn from(cloud: &[Vec3]) -> Self {
        points(cloud)
    }
}

impl From<Vec<Vec3>> for Mesh {
    fn from(cloud: Vec<Vec3>) -> Self {
        points(&cloud)
    }
}

impl<const N: usize> From<[Vec3; N]> for Mesh {
    fn from(cloud: [Vec3; N]) -> Self {
        points(&cloud)
    }
}

impl From<&Mesh> for Mesh {
    fn from(mesh: &Mesh) -> Self {
        mesh.clone()
    }
}

impl From<Triangle> for Mesh {
    fn from(triangle: Triangle) -> Self {
        Self::from(vec![triangle])
    }
}

impl From<&[Triangle]> for Mesh {
    fn from(triangles: &[Triangle]) -> Self {
        Self::from(triangles.to_vec())
    }
}

impl<const N: usize> From<[Triangle; N]> for Mesh {
    fn from(triangles: [Triangle; N]) -> Self {
        triangles.into_iter().collect()
    }
}
