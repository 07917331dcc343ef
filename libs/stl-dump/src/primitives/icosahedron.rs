//! # Icosahedron
//!
//! Fixed 20-face tessellation used for sphere markers.
//!
//! The twelve vertices lie on three mutually orthogonal golden rectangles,
//! `(0, ±φ, ±1)`, `(±1, 0, ±φ)` and `(±φ, ±1, 0)`, so the circumradius is
//! `sqrt(1 + φ²)` rather than one. The face order is part of the output
//! contract: changing it changes the bytes of every dump holding a sphere.

use config::constants::{GOLDEN_RATIO, SPHERE_TRIANGLE_COUNT};
use glam::Vec3;

const PHI: f32 = GOLDEN_RATIO;

const fn v(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

/// Faces of the unscaled icosahedron, in emission order.
pub const ICOSAHEDRON_FACES: [[Vec3; 3]; SPHERE_TRIANGLE_COUNT] = [
    // fan around (0, -φ, 1)
    [v(0.0, -PHI, 1.0), v(-PHI, -1.0, 0.0), v(-1.0, 0.0, PHI)],
    [v(0.0, -PHI, 1.0), v(-1.0, 0.0, PHI), v(1.0, 0.0, PHI)],
    [v(0.0, -PHI, 1.0), v(1.0, 0.0, PHI), v(PHI, -1.0, 0.0)],
    [v(0.0, -PHI, 1.0), v(PHI, -1.0, 0.0), v(0.0, -PHI, -1.0)],
    [v(0.0, -PHI, 1.0), v(0.0, -PHI, -1.0), v(-PHI, -1.0, 0.0)],
    // fan around (0, φ, -1)
    [v(0.0, PHI, -1.0), v(-PHI, 1.0, 0.0), v(0.0, PHI, 1.0)],
    [v(0.0, PHI, -1.0), v(0.0, PHI, 1.0), v(PHI, 1.0, 0.0)],
    [v(0.0, PHI, -1.0), v(PHI, 1.0, 0.0), v(1.0, 0.0, -PHI)],
    [v(0.0, PHI, -1.0), v(1.0, 0.0, -PHI), v(-1.0, 0.0, -PHI)],
    [v(0.0, PHI, -1.0), v(-1.0, 0.0, -PHI), v(-PHI, 1.0, 0.0)],
    // belt
    [v(0.0, -PHI, -1.0), v(-1.0, 0.0, -PHI), v(-PHI, -1.0, 0.0)],
    [v(-1.0, 0.0, -PHI), v(-PHI, -1.0, 0.0), v(-PHI, 1.0, 0.0)],
    [v(-PHI, -1.0, 0.0), v(-PHI, 1.0, 0.0), v(-1.0, 0.0, PHI)],
    [v(-PHI, 1.0, 0.0), v(-1.0, 0.0, PHI), v(0.0, PHI, 1.0)],
    [v(-1.0, 0.0, PHI), v(0.0, PHI, 1.0), v(1.0, 0.0, PHI)],
    [v(1.0, 0.0, PHI), v(0.0, PHI, 1.0), v(PHI, 1.0, 0.0)],
    [v(PHI, -1.0, 0.0), v(PHI, 1.0, 0.0), v(1.0, 0.0, PHI)],
    [v(PHI, 1.0, 0.0), v(PHI, -1.0, 0.0), v(1.0, 0.0, -PHI)],
    [v(0.0, -PHI, -1.0), v(PHI, -1.0, 0.0), v(1.0, 0.0, -PHI)],
    [v(0.0, -PHI, -1.0), v(-1.0, 0.0, -PHI), v(1.0, 0.0, -PHI)],
];

/// Returns the faces scaled by `radius` and moved to `center`.
pub fn icosahedron(center: Vec3, radius: f32) -> impl Iterator<Item = [Vec3; 3]> {
    ICOSAHEDRON_FACES
        .into_iter()
        .map(move |face| face.map(|corner| corner * radius + center))
}
