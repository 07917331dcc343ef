//! # Config Crate
//!
//! Centralized configuration for the STL dump pipeline.
//! Marker sizes, file format constants and the runtime dump switches are
//! defined here so the geometry code never carries literals of its own.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{CONE_BASE_SIZE, RATIO_SPHERE_RADIUS};
//! use config::dump::DumpConfig;
//!
//! let diagonal = 40.0_f32;
//! let radius = diagonal * RATIO_SPHERE_RADIUS;
//! assert_eq!(radius, 1.0);
//! assert!(CONE_BASE_SIZE < radius);
//!
//! let cfg = DumpConfig::new(true, "dumps").unwrap();
//! assert!(cfg.enabled);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Injected Switches**: The enable flag and output folder are values,
//!   not process-wide globals

pub mod constants;
pub mod dump;
