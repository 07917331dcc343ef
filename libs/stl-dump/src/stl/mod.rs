//! # STL Codec
//!
//! Write-only encoders for binary and text STL.
//!
//! ## Binary layout
//!
//! ```text
//! offset 0    80 bytes   header (free-form, zero padded)
//! offset 80    4 bytes   triangle count, little-endian u32
//! offset 84   50 bytes   per triangle: 12 little-endian f32 + 2 zero bytes
//! ```
//!
//! ## Text layout
//!
//! A `solid <label>` line, then one `facet normal` block per triangle, each
//! preceded by an empty line. No `endsolid` line is written; the viewers
//! this is aimed at accept its absence.

pub mod binary;
pub mod text;

pub use binary::{encode_binary, write_binary, StlHeader};
pub use text::{encode_text, write_text};

use crate::triangle::Triangle;
use glam::Vec3;

/// Which normal goes into each facet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NormalMode {
    /// The normal stored in the triangle, `(0, 0, 1)` for everything the
    /// builder creates.
    #[default]
    Placeholder,
    /// The unit normal computed from the winding; zero for degenerate
    /// markers.
    Computed,
}

impl NormalMode {
    /// Returns the normal to write for `triangle`.
    pub fn normal_of(self, triangle: &Triangle) -> Vec3 {
        match self {
            NormalMode::Placeholder => triangle.normal,
            NormalMode::Computed => triangle.face_normal(),
        }
    }
}

/// STL encoding flavour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StlFormat {
    /// Binary STL.
    #[default]
    Binary,
    /// ASCII STL.
    Text,
}

/// Encoding options shared by both formats.
///
/// # Example
///
/// ```rust
/// use stl_dump::stl::{NormalMode, StlOptions};
///
/// let options = StlOptions::default().with_label("frame 12");
/// assert_eq!(options.normal_mode, NormalMode::Placeholder);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StlOptions {
    /// Normal written into each facet.
    pub normal_mode: NormalMode,
    /// Binary header text (truncated to 80 bytes) or text `solid` name.
    /// The text encoder writes control characters as spaces.
    pub label: String,
}

impl StlOptions {
    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the normal mode.
    pub fn with_normal_mode(mut self, normal_mode: NormalMode) -> Self {
        self.normal_mode = normal_mode;
        self
    }
}
