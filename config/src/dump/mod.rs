//! Runtime switches for the dump pipeline.
//!
//! The enable flag and the output directory are passed explicitly to the
//! dumper instead of living in mutable global state.

use crate::constants::DEFAULT_DUMP_STEM;
use std::fmt;
use std::path::{Path, PathBuf};

/// Immutable snapshot of the dump settings.
///
/// # Examples
/// ```
/// use config::dump::DumpConfig;
/// let config = DumpConfig::default();
/// assert!(config.enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpConfig {
    /// When false every save is skipped without touching the filesystem.
    pub enabled: bool,
    /// Directory that relative file names are resolved against.
    pub output_dir: PathBuf,
}

impl DumpConfig {
    /// Builds a configuration, rejecting an empty output directory.
    ///
    /// # Examples
    /// ```
    /// use config::dump::DumpConfig;
    /// let cfg = DumpConfig::new(true, "/tmp/stl").expect("valid config");
    /// assert_eq!(cfg.output_dir.to_str(), Some("/tmp/stl"));
    /// ```
    pub fn new(enabled: bool, output_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let output_dir = output_dir.into();
        if output_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutputDir);
        }
        Ok(Self {
            enabled,
            output_dir,
        })
    }

    /// Returns a disabled configuration.
    ///
    /// # Examples
    /// ```
    /// use config::dump::DumpConfig;
    /// assert!(!DumpConfig::disabled().enabled);
    /// ```
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Resolves `name` against the output directory.
    ///
    /// Absolute names are returned unchanged. A name without a file
    /// component (`""`, `"."`, `".."`) resolves to
    /// [`DEFAULT_DUMP_STEM`] inside the output directory.
    ///
    /// # Examples
    /// ```
    /// use config::dump::DumpConfig;
    /// use std::path::Path;
    /// let cfg = DumpConfig::new(true, "out").unwrap();
    /// assert_eq!(cfg.resolve("cube"), Path::new("out").join("cube"));
    /// assert_eq!(cfg.resolve(""), Path::new("out").join("dump"));
    /// ```
    pub fn resolve(&self, name: impl AsRef<Path>) -> PathBuf {
        let name = name.as_ref();
        if name.file_name().is_none() {
            return self.output_dir.join(DEFAULT_DUMP_STEM);
        }
        self.output_dir.join(name)
    }
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            output_dir: PathBuf::from("."),
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the output directory path is empty.
    EmptyOutputDir,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyOutputDir => write!(f, "output directory must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}
