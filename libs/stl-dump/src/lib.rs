//! # STL Dump
//!
//! Debug geometry to STL. Build a triangle soup from points, segments,
//! arrows and spheres, then write it out as binary or text STL for a mesh
//! viewer.
//!
//! ## Architecture
//!
//! ```text
//! convert (point sequences) ──> Mesh ──> stl (codec) ──> export (files)
//!                                 ▲                          ▲
//!                  primitives ────┘              Dumper ─────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use stl_dump::{convert, Mesh, Vec3};
//!
//! let path = [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0)];
//! let mut mesh = convert::direction(&path);
//! mesh.merge(&convert::sphere(&path));
//! assert_eq!(mesh.triangle_count(), 2 * 6 + 3 * 20);
//! ```

pub mod convert;
pub mod core;
pub mod dumper;
pub mod error;
pub mod export;
pub mod mesh;
pub mod primitives;
pub mod stl;
pub mod triangle;

pub use config::dump::DumpConfig;
pub use convert::{direction, line, points, sphere};
pub use crate::core::vec3::Vec3;
pub use dumper::Dumper;
pub use error::{DumpError, DumpResult};
pub use mesh::Mesh;
pub use stl::{NormalMode, StlFormat, StlOptions};
pub use triangle::Triangle;
