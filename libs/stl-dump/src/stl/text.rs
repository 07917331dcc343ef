//! Text (ASCII) STL encoder.

use super::StlOptions;
use crate::error::DumpResult;
use crate::triangle::Triangle;
use std::io::Write;

/// Encodes `triangles` as text STL.
///
/// Control characters in the label are replaced by spaces so the `solid`
/// line stays a single line. Coordinates use the shortest representation
/// that reads back to the same `f32`. The output ends after the last `endfacet`; no `endsolid` line is
/// emitted.
///
/// # Example
///
/// ```rust
/// use stl_dump::stl::{encode_text, StlOptions};
/// use stl_dump::{Triangle, Vec3};
///
/// let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::new(0.5, 2.0, 0.0));
/// let text = encode_text(&[tri], &StlOptions::default());
/// assert_eq!(
///     text,
///     "solid \n\nfacet normal 0 0 1\nouter loop\nvertex 0 0 0\nvertex 1 0 0\n\
///      vertex 0.5 2 0\nendloop\nendfacet\n"
/// );
/// ```
pub fn encode_text(triangles: &[Triangle], options: &StlOptions) -> String {
    let mut out = String::new();
    let label = options.label.replace(char::is_control, " ");
    out.push_str(&format!("solid {label}\n"));

    for triangle in triangles {
        let n = options.normal_mode.normal_of(triangle);
        out.push('\n');
        out.push_str(&format!("facet normal {} {} {}\n", n.x, n.y, n.z));
        out.push_str("outer loop\n");
        for v in &triangle.vertices {
            out.push_str(&format!("vertex {} {} {}\n", v.x, v.y, v.z));
        }
        out.push_str("endloop\n");
        out.push_str("endfacet\n");
    }

    out
}

/// Writes `triangles` as text STL.
pub fn write_text<W: Write>(
    writer: &mut W,
    triangles: &[Triangle],
    options: &StlOptions,
) -> DumpResult<()> {
    writer.write_all(encode_text(triangles, options).as_bytes())?;
    Ok(())
}
