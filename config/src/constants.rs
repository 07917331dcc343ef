//! # Configuration Constants
//!
//! Centralized constants for the STL dump pipeline. Marker sizes, the
//! sphere tessellation parameter and the binary STL layout are defined here.
//!
//! ## Categories
//!
//! - **Markers**: Default sizes for cone and sphere debug markers
//! - **Tessellation**: The golden ratio driving the icosahedron table
//! - **File Format**: Binary STL layout and file naming

// =============================================================================
// MARKER CONSTANTS
// =============================================================================

/// Default half-diagonal of a cone's square base, in model units.
///
/// Used by direction arrows when the caller does not pick a size. When the
/// proportional cone variant is used, this value is instead read as a
/// ratio of base size to cone length.
///
/// # Example
///
/// ```rust
/// use config::constants::CONE_BASE_SIZE;
///
/// assert_eq!(CONE_BASE_SIZE, 0.05);
/// ```
pub const CONE_BASE_SIZE: f32 = 1.0 / 20.0;

/// Radius of a sphere marker when a cloud holds a single point.
///
/// A lone point has no bounding box to scale against, so a fixed radius
/// is used.
///
/// # Example
///
/// ```rust
/// use config::constants::ONE_SPHERE_RADIUS;
///
/// let points = 1;
/// let radius = if points < 2 { ONE_SPHERE_RADIUS } else { 0.0 };
/// assert_eq!(radius, 0.1);
/// ```
pub const ONE_SPHERE_RADIUS: f32 = 0.1;

/// Ratio between a sphere marker's radius and the diagonal of the
/// axis-aligned bounding box of the whole point cloud.
///
/// # Example
///
/// ```rust
/// use config::constants::RATIO_SPHERE_RADIUS;
///
/// let diagonal = 10.0_f32;
/// assert_eq!(diagonal * RATIO_SPHERE_RADIUS, 0.25);
/// ```
pub const RATIO_SPHERE_RADIUS: f32 = 0.025;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Golden ratio used to lay out the icosahedron vertices.
///
/// The twelve vertices sit on three mutually orthogonal golden rectangles
/// with sides `2` and `2 * GOLDEN_RATIO`.
///
/// # Example
///
/// ```rust
/// use config::constants::GOLDEN_RATIO;
///
/// // phi^2 = phi + 1
/// assert!((GOLDEN_RATIO * GOLDEN_RATIO - GOLDEN_RATIO - 1.0).abs() < 1e-6);
/// ```
pub const GOLDEN_RATIO: f32 = 1.618_033_988_75;

/// Number of triangles appended by one sphere marker.
pub const SPHERE_TRIANGLE_COUNT: usize = 20;

/// Number of triangles appended by one cone marker (base quad + 4 sides).
pub const CONE_TRIANGLE_COUNT: usize = 6;

// =============================================================================
// FILE FORMAT CONSTANTS
// =============================================================================

/// Size of the free-form header at the start of a binary STL file.
///
/// See <https://en.wikipedia.org/wiki/STL_(file_format)#Binary_STL>.
///
/// # Example
///
/// ```rust
/// use config::constants::{STL_HEADER_SIZE_BYTES, STL_COUNT_SIZE_BYTES};
///
/// assert_eq!(STL_HEADER_SIZE_BYTES + STL_COUNT_SIZE_BYTES, 84);
/// ```
pub const STL_HEADER_SIZE_BYTES: usize = 80;

/// Size of the little-endian triangle count following the header.
pub const STL_COUNT_SIZE_BYTES: usize = 4;

/// Size of one binary STL triangle record: 12 `f32` plus a 2-byte attribute.
///
/// # Example
///
/// ```rust
/// use config::constants::STL_TRIANGLE_SIZE_BYTES;
///
/// assert_eq!(STL_TRIANGLE_SIZE_BYTES, 12 * 4 + 2);
/// ```
pub const STL_TRIANGLE_SIZE_BYTES: usize = 50;

/// Extension forced onto every exported file, without the leading dot.
///
/// # Example
///
/// ```rust
/// use config::constants::STL_EXTENSION;
/// use std::path::Path;
///
/// let path = Path::new("dump.txt").with_extension(STL_EXTENSION);
/// assert_eq!(path, Path::new("dump.stl"));
/// ```
pub const STL_EXTENSION: &str = "stl";

/// Separator between a file stem and its auto-generated index.
///
/// # Example
///
/// ```rust
/// use config::constants::FILE_NAME_SEPARATOR;
///
/// let name = format!("chain{}{}", FILE_NAME_SEPARATOR, 3);
/// assert_eq!(name, "chain_3");
/// ```
pub const FILE_NAME_SEPARATOR: char = '_';

/// File stem used when a dump name has no file component, such as `""`
/// or `".."`.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_DUMP_STEM;
///
/// assert!(!DEFAULT_DUMP_STEM.is_empty());
/// ```
pub const DEFAULT_DUMP_STEM: &str = "dump";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Computes the exact size of a binary STL file holding `triangles` records.
///
/// # Example
///
/// ```rust
/// use config::constants::binary_stl_size;
///
/// assert_eq!(binary_stl_size(0), 84);
/// assert_eq!(binary_stl_size(2), 184);
/// ```
#[inline]
pub const fn binary_stl_size(triangles: usize) -> usize {
    STL_HEADER_SIZE_BYTES + STL_COUNT_SIZE_BYTES + triangles * STL_TRIANGLE_SIZE_BYTES
}
