//! File export for meshes.
//!
//! Every path gets its extension replaced with `.stl`. Each call opens,
//! writes and closes its own file handle.

use crate::error::{DumpError, DumpResult};
use crate::mesh::Mesh;
use crate::stl::{write_binary, write_text, StlFormat, StlOptions};
use config::constants::STL_EXTENSION;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Returns `path` with its extension forced to `.stl`.
///
/// # Examples
/// ```
/// use stl_dump::export::stl_path;
/// use std::path::Path;
///
/// assert_eq!(stl_path("out/cube"), Path::new("out/cube.stl"));
/// assert_eq!(stl_path("out/cube.txt"), Path::new("out/cube.stl"));
/// ```
pub fn stl_path(path: impl AsRef<Path>) -> PathBuf {
    path.as_ref().with_extension(STL_EXTENSION)
}

impl Mesh {
    /// Writes the mesh as binary STL.
    ///
    /// An empty mesh is a no-op: no file is created and `Ok(None)` is
    /// returned. Otherwise returns the path actually written.
    ///
    /// # Examples
    /// ```
    /// use stl_dump::Mesh;
    ///
    /// let written = Mesh::new().export_binary("never-created").unwrap();
    /// assert!(written.is_none());
    /// ```
    pub fn export_binary(&self, path: impl AsRef<Path>) -> DumpResult<Option<PathBuf>> {
        self.export(path, StlFormat::Binary, &StlOptions::default())
    }

    /// Writes the mesh as text STL and returns the path written.
    ///
    /// Unlike binary export, an empty mesh still produces a file holding
    /// only the `solid` line.
    pub fn export_text(&self, path: impl AsRef<Path>) -> DumpResult<PathBuf> {
        let path = stl_path(path);
        self.write_file(&path, StlFormat::Text, &StlOptions::default())?;
        Ok(path)
    }

    /// Writes the mesh in `format` with explicit encoding options.
    ///
    /// Returns `Ok(None)` for an empty mesh in binary format.
    pub fn export(
        &self,
        path: impl AsRef<Path>,
        format: StlFormat,
        options: &StlOptions,
    ) -> DumpResult<Option<PathBuf>> {
        if format == StlFormat::Binary && self.is_empty() {
            return Ok(None);
        }
        let path = stl_path(path);
        self.write_file(&path, format, options)?;
        Ok(Some(path))
    }

    fn write_file(&self, path: &Path, format: StlFormat, options: &StlOptions) -> DumpResult<()> {
        let file = File::create(path).map_err(|source| DumpError::io(path, source))?;
        let mut writer = BufWriter::new(file);
        match format {
            StlFormat::Binary => write_binary(&mut writer, self.triangles(), options)?,
            StlFormat::Text => write_text(&mut writer, self.triangles(), options)?,
        }
        writer.flush()?;

        debug!(
            path = %path.display(),
            triangles = self.triangle_count(),
            ?format,
            "wrote STL"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("stl-dump-export-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_stl_path_replaces_extension() {
        assert_eq!(stl_path("a/b.bin"), Path::new("a/b.stl"));
        assert_eq!(stl_path("a/b.stl"), Path::new("a/b.stl"));
        assert_eq!(stl_path("b"), Path::new("b.stl"));
    }

    #[test]
    fn test_export_binary_writes_file() {
        let dir = scratch_dir("binary");
        let mut mesh = Mesh::new();
        mesh.add_sphere(Vec3::ZERO, 1.0).add_sphere(Vec3::X, 1.0);

        let path = mesh.export_binary(dir.join("spheres.dat")).unwrap().unwrap();
        assert_eq!(path, dir.join("spheres.stl"));
        assert_eq!(fs::metadata(&path).unwrap().len(), 84 + 40 * 50);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_export_binary_empty_creates_nothing() {
        let dir = scratch_dir("empty");
        let written = Mesh::new().export_binary(dir.join("empty")).unwrap();
        assert!(written.is_none());
        assert!(!dir.join("empty.stl").exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_export_text_empty_writes_header() {
        let dir = scratch_dir("text");
        let path = Mesh::new().export_text(dir.join("empty")).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "solid \n");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_export_into_missing_dir_fails() {
        let dir = scratch_dir("missing");
        let mut mesh = Mesh::new();
        mesh.add_point(Vec3::ZERO);
        let err = mesh.export_binary(dir.join("no/such/dir/p")).unwrap_err();
        assert!(matches!(err, DumpError::Io { .. }));
        fs::remove_dir_all(&dir).unwrap();
    }
}
