//! # Dump Errors
//!
//! Error types for encoding and writing STL files.
//!
//! ## Error Policy
//!
//! - Codec and export functions return explicit errors
//! - Degenerate geometry is never an error: NaN/Inf coordinates are written
//!   as-is so the problem shows up in the viewer
//! - [`Dumper`](crate::Dumper) is the boundary that logs and swallows errors

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while exporting a mesh.
///
/// ## Example
///
/// ```rust
/// use stl_dump::{DumpError, Mesh, Vec3};
///
/// let mut mesh = Mesh::new();
/// mesh.add_point(Vec3::ZERO);
/// match mesh.export_binary("/nonexistent-dir/points") {
///     Ok(_) => {}
///     Err(DumpError::Io { path, .. }) => eprintln!("cannot open {}", path.display()),
///     Err(e) => eprintln!("other error: {}", e),
/// }
/// ```
#[derive(Debug, Error)]
pub enum DumpError {
    /// The output file could not be created.
    #[error("Cannot open '{path}': {source}")]
    Io {
        /// Path that was being opened
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// Writing to an already open sink failed.
    #[error("Write failed: {0}")]
    Write(#[from] std::io::Error),

    /// The triangle count does not fit the 32-bit field of a binary STL.
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles {
        /// Number of triangles in the mesh
        count: usize,
        /// Largest count the format can store
        max: usize,
    },

    /// Invalid dump configuration.
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::dump::ConfigError),
}

impl DumpError {
    /// Creates an error for a file that could not be opened.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for dump operations.
pub type DumpResult<T> = Result<T, DumpError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let err = DumpError::io("out/cube.stl", io::Error::from(io::ErrorKind::NotFound));
        assert!(err.to_string().contains("out/cube.stl"));

        let err = DumpError::TooManyTriangles {
            count: 5_000_000_000,
            max: u32::MAX as usize,
        };
        assert!(err.to_string().contains("5000000000"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: DumpError = config::dump::ConfigError::EmptyOutputDir.into();
        assert!(matches!(err, DumpError::Config(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DumpError>();
    }
}
