//! Core value types shared across the builders.
//!
//! Includes the vector alias (`Vec3`) and its helpers.

pub mod vec3;
