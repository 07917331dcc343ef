//! Thin wrapper around `glam::Vec3` shared across the builders.
//!
//! `glam` already provides component-wise arithmetic, scalar multiply and
//! divide, `distance`, `normalize` and `cross`. Normalizing a zero vector
//! yields NaN components, which are carried into the output geometry rather
//! than rejected.

use std::cmp::Ordering;

pub use glam::Vec3;

/// Returns the unit X, Y and Z axes in that order.
///
/// # Examples
/// ```
/// use stl_dump::core::vec3::cardinal_axes;
/// use stl_dump::Vec3;
/// assert_eq!(cardinal_axes(), [Vec3::X, Vec3::Y, Vec3::Z]);
/// ```
pub fn cardinal_axes() -> [Vec3; 3] {
    [Vec3::X, Vec3::Y, Vec3::Z]
}

/// Picks a cardinal axis that is never parallel to `direction`.
///
/// Each axis is paired with the matching component of `direction`; the pairs
/// are sorted ascending by that component (stable, NaN compares equal) and
/// the axis holding the second-smallest value wins. For a unit vector that
/// component can never be the dominant one, so `direction × axis` stays
/// well away from zero.
///
/// # Examples
/// ```
/// use stl_dump::core::vec3::auxiliary_axis;
/// use stl_dump::Vec3;
/// assert_eq!(auxiliary_axis(Vec3::Z), Vec3::Y);
/// assert_eq!(auxiliary_axis(Vec3::new(0.8, 0.6, 0.0)), Vec3::Y);
/// ```
pub fn auxiliary_axis(direction: Vec3) -> Vec3 {
    let [x, y, z] = cardinal_axes();
    let mut bidders = [(direction.x, x), (direction.y, y), (direction.z, z)];
    bidders.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    bidders[1].1
}

/// Computes the axis-aligned bounding box of `points`.
///
/// Returns `None` for an empty slice.
///
/// # Examples
/// ```
/// use stl_dump::core::vec3::bounds;
/// use stl_dump::Vec3;
/// let (min, max) = bounds(&[Vec3::new(1.0, -2.0, 0.0), Vec3::new(-1.0, 4.0, 3.0)]).unwrap();
/// assert_eq!(min, Vec3::new(-1.0, -2.0, 0.0));
/// assert_eq!(max, Vec3::new(1.0, 4.0, 3.0));
/// ```
pub fn bounds(points: &[Vec3]) -> Option<(Vec3, Vec3)> {
    let (first, rest) = points.split_first()?;
    Some(
        rest.iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p))),
    )
}
