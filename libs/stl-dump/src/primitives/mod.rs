//! # Primitives
//!
//! Fixed tessellations used by the mesh builder.

pub mod icosahedron;

pub use icosahedron::{icosahedron, ICOSAHEDRON_FACES};
