//! Binary STL encoder.

use super::StlOptions;
use crate::error::{DumpError, DumpResult};
use crate::triangle::Triangle;
use config::constants::{binary_stl_size, STL_COUNT_SIZE_BYTES, STL_HEADER_SIZE_BYTES};
use std::io::Write;

/// The 84 bytes preceding the triangle records.
///
/// See <https://en.wikipedia.org/wiki/STL_(file_format)#Binary_STL>.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StlHeader {
    /// Free-form header bytes.
    pub header: [u8; STL_HEADER_SIZE_BYTES],
    /// Number of triangle records that follow.
    pub triangle_count: u32,
}

impl StlHeader {
    /// Size of the encoded header including the count.
    pub const ENCODED_LEN: usize = STL_HEADER_SIZE_BYTES + STL_COUNT_SIZE_BYTES;

    /// Creates a zero-filled header for `triangle_count` records.
    pub fn new(triangle_count: u32) -> Self {
        Self {
            header: [0u8; STL_HEADER_SIZE_BYTES],
            triangle_count,
        }
    }

    /// Builds the header for `triangles`, failing when the count does not
    /// fit in 32 bits.
    pub fn for_triangles(triangles: &[Triangle]) -> DumpResult<Self> {
        let count = u32::try_from(triangles.len()).map_err(|_| DumpError::TooManyTriangles {
            count: triangles.len(),
            max: u32::MAX as usize,
        })?;
        Ok(Self::new(count))
    }

    /// Copies `label` into the header, truncated to 80 bytes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stl_dump::stl::StlHeader;
    ///
    /// let header = StlHeader::new(3).with_label("debug");
    /// assert_eq!(&header.header[..5], b"debug");
    /// assert_eq!(header.header[5], 0);
    /// ```
    pub fn with_label(mut self, label: &str) -> Self {
        let bytes = label.as_bytes();
        let len = bytes.len().min(STL_HEADER_SIZE_BYTES);
        self.header = [0u8; STL_HEADER_SIZE_BYTES];
        self.header[..len].copy_from_slice(&bytes[..len]);
        self
    }

    /// Encodes the header and the little-endian count.
    pub fn to_bytes(&self) -> [u8; Self::ENCODED_LEN] {
        let mut bytes = [0u8; Self::ENCODED_LEN];
        bytes[..STL_HEADER_SIZE_BYTES].copy_from_slice(&self.header);
        bytes[STL_HEADER_SIZE_BYTES..].copy_from_slice(&self.triangle_count.to_le_bytes());
        bytes
    }
}

/// Writes `triangles` as binary STL.
///
/// An empty slice still produces a valid 84-byte file; skipping empty
/// meshes is the caller's decision.
pub fn write_binary<W: Write>(
    writer: &mut W,
    triangles: &[Triangle],
    options: &StlOptions,
) -> DumpResult<()> {
    let header = StlHeader::for_triangles(triangles)?.with_label(&options.label);
    writer.write_all(&header.to_bytes())?;
    for triangle in triangles {
        let normal = options.normal_mode.normal_of(triangle);
        writer.write_all(&triangle.to_bytes_with_normal(normal))?;
    }
    Ok(())
}

/// Encodes `triangles` as binary STL into a new buffer.
///
/// # Example
///
/// ```rust
/// use stl_dump::stl::{encode_binary, StlOptions};
/// use stl_dump::{Mesh, Vec3};
///
/// let mut mesh = Mesh::new();
/// mesh.add_sphere(Vec3::ZERO, 1.0);
/// let bytes = encode_binary(mesh.triangles(), &StlOptions::default()).unwrap();
/// assert_eq!(bytes.len(), 84 + 20 * 50);
/// assert_eq!(&bytes[80..84], &20u32.to_le_bytes());
/// ```
pub fn encode_binary(triangles: &[Triangle], options: &StlOptions) -> DumpResult<Vec<u8>> {
    let mut bytes = Vec::with_capacity(binary_stl_size(triangles.len()));
    write_binary(&mut bytes, triangles, options)?;
    Ok(bytes)
}
