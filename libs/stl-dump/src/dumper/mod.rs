//! # Dumper
//!
//! Fire-and-forget entry point for debug dumps.
//!
//! A [`Dumper`] owns the injected [`DumpConfig`] and the encoding options.
//! Its `save*` methods never fail: errors are logged and turned into `None`
//! so a dump can never abort the host program.
//!
//! ```text
//! save(name, mesh)
//!   ├── disabled ──────────> trace!, None
//!   ├── export error ──────> warn!, None
//!   └── written ───────────> Some(path)
//! ```

use crate::error::DumpResult;
use crate::export::stl_path;
use crate::mesh::Mesh;
use crate::stl::{StlFormat, StlOptions};
use config::constants::{FILE_NAME_SEPARATOR, STL_EXTENSION};
use config::dump::DumpConfig;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};

/// Writes meshes into the configured output directory.
///
/// # Example
///
/// ```rust
/// use stl_dump::{DumpConfig, Dumper, Vec3};
///
/// let dumper = Dumper::new(DumpConfig::disabled());
/// assert!(dumper.save("points", [Vec3::ZERO, Vec3::X]).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dumper {
    config: DumpConfig,
    options: StlOptions,
}

impl Dumper {
    /// Creates a dumper with default encoding options.
    pub fn new(config: DumpConfig) -> Self {
        Self {
            config,
            options: StlOptions::default(),
        }
    }

    /// Validates the raw switches and creates a dumper.
    ///
    /// # Errors
    ///
    /// Returns [`DumpError::Config`](crate::DumpError::Config) when
    /// `output_dir` is empty.
    pub fn from_parts(enabled: bool, output_dir: impl Into<PathBuf>) -> DumpResult<Self> {
        Ok(Self::new(DumpConfig::new(enabled, output_dir)?))
    }

    /// Replaces the encoding options used by every save.
    pub fn with_options(mut self, options: StlOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the injected configuration.
    pub fn config(&self) -> &DumpConfig {
        &self.config
    }

    /// Returns the encoding options.
    pub fn options(&self) -> &StlOptions {
        &self.options
    }

    /// Returns true when saves touch the filesystem.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Saves `mesh` as binary STL to `output_dir/name.stl`.
    ///
    /// A `name` without a file component is replaced by
    /// [`DEFAULT_DUMP_STEM`](config::constants::DEFAULT_DUMP_STEM), so the
    /// file always lands inside the output directory.
    ///
    /// Returns `None` when disabled, when the mesh is empty, or when writing
    /// failed.
    pub fn save(&self, name: impl AsRef<Path>, mesh: impl Into<Mesh>) -> Option<PathBuf> {
        if !self.is_enabled() {
            trace!(name = %name.as_ref().display(), "dump disabled, skipping");
            return None;
        }
        self.write(self.config.resolve(name), mesh.into(), StlFormat::Binary)
    }

    /// Saves `mesh` as text STL to `output_dir/name.stl`.
    ///
    /// An empty mesh still writes the `solid` line.
    pub fn save_text(&self, name: impl AsRef<Path>, mesh: impl Into<Mesh>) -> Option<PathBuf> {
        if !self.is_enabled() {
            trace!(name = %name.as_ref().display(), "dump disabled, skipping");
            return None;
        }
        self.write(self.config.resolve(name), mesh.into(), StlFormat::Text)
    }

    /// Saves `mesh` as binary STL under the first free `<stem>_<N>.stl`.
    ///
    /// Numbering starts at zero. The existence check and the create are
    /// separate steps, so two concurrent dumps may pick the same name.
    pub fn save_incremental(
        &self,
        name: impl AsRef<Path>,
        mesh: impl Into<Mesh>,
    ) -> Option<PathBuf> {
        if !self.is_enabled() {
            trace!(name = %name.as_ref().display(), "dump disabled, skipping");
            return None;
        }
        let path = self.next_incremental_path(name);
        self.write(path, mesh.into(), StlFormat::Binary)
    }

    /// Returns the first `<stem>_<N>.stl` in the output directory that does
    /// not exist yet.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stl_dump::Dumper;
    /// use std::path::Path;
    ///
    /// let dumper = Dumper::from_parts(true, "/nonexistent-dump-dir").unwrap();
    /// assert_eq!(
    ///     dumper.next_incremental_path("step.stl"),
    ///     Path::new("/nonexistent-dump-dir/step_0.stl")
    /// );
    /// ```
    pub fn next_incremental_path(&self, name: impl AsRef<Path>) -> PathBuf {
        let base = self.config.resolve(name);
        let parent = base.parent().map(Path::to_path_buf).unwrap_or_default();
        let stem = base
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut index: u64 = 0;
        loop {
            let candidate =
                parent.join(format!("{stem}{FILE_NAME_SEPARATOR}{index}.{STL_EXTENSION}"));
            if !candidate.exists() {
                return candidate;
            }
            index += 1;
        }
    }

    fn write(&self, path: PathBuf, mesh: Mesh, format: StlFormat) -> Option<PathBuf> {
        match mesh.export(&path, format, &self.options) {
            Ok(Some(written)) => Some(written),
            Ok(None) => {
                trace!(path = %stl_path(&path).display(), "empty mesh, nothing written");
                None
            }
            Err(e) => {
                warn!(path = %stl_path(&path).display(), error = %e, "STL dump failed");
                None
            }
        }
    }
}
