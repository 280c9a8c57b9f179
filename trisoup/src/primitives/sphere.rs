//! Sphere approximation by recursive icosahedron subdivision

use glam::Vec3;
use tracing::debug;

use crate::error::MeshError;
use crate::icosahedron;
use crate::soup::TriangleSoup;

/// Upper bound on the subdivision level.
///
/// Each level quadruples the triangle count (`20 × 4^level` for the full
/// sphere), so the guard bounds both recursion depth and output memory.
pub const MAX_SUBDIVISION_LEVEL: u32 = 10;

/// Generate a sphere as triangle soup by subdividing the unit icosahedron.
///
/// # Arguments
/// * `level` - Subdivision depth, 0 to [`MAX_SUBDIVISION_LEVEL`]; level 0
///   emits the 20 base faces unmodified
/// * `radius` - Sphere radius; must be positive and finite
///
/// # Returns
/// Soup with `20 × 4^level` triangles. All vertices are normalized onto the
/// unit sphere first; if `radius != 1.0` every component is scaled by
/// `radius` afterwards.
pub fn generate_sphere(level: u32, radius: f32) -> Result<TriangleSoup, MeshError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(MeshError::InvalidArgument(format!(
            "radius must be positive and finite, got {radius}"
        )));
    }

    let mut soup = subdivide(&icosahedron::VERTICES, &icosahedron::FACES, level)?;
    if radius != 1.0 {
        soup.scale(radius);
    }

    debug!(
        "generated sphere: level={}, radius={}, triangles={}",
        level,
        radius,
        soup.triangle_count()
    );
    Ok(soup)
}

/// Recursively subdivide a triangulated base mesh onto the unit sphere.
///
/// Each face is split into 4 sub-triangles per level: the three edge
/// midpoints are normalized to unit length (projecting them onto the unit
/// sphere) and the split recurses on `(v1,m12,m31)`, `(v2,m23,m12)`,
/// `(v3,m31,m23)`, `(m12,m23,m31)`. At level 0 the face vertices are emitted
/// exactly as given.
///
/// Shared edges of adjacent faces produce their midpoints redundantly; the
/// output is pure triangle soup with no deduplication.
///
/// # Arguments
/// * `vertices` - Base vertex table
/// * `faces` - Index triples into `vertices`
/// * `level` - Subdivision depth, 0 to [`MAX_SUBDIVISION_LEVEL`]
///
/// # Returns
/// Soup with `faces.len() × 4^level` triangles, in face-table order.
pub fn subdivide(
    vertices: &[Vec3],
    faces: &[[usize; 3]],
    level: u32,
) -> Result<TriangleSoup, MeshError> {
    if level > MAX_SUBDIVISION_LEVEL {
        return Err(MeshError::InvalidArgument(format!(
            "subdivision level {level} exceeds maximum {MAX_SUBDIVISION_LEVEL}"
        )));
    }
    for (face_index, face) in faces.iter().enumerate() {
        for &i in face {
            if i >= vertices.len() {
                return Err(MeshError::InvalidArgument(format!(
                    "face {face_index} references vertex {i}, table has {}",
                    vertices.len()
                )));
            }
        }
    }

    let mut soup = TriangleSoup::with_triangle_capacity(faces.len() * 4usize.pow(level));
    for &[a, b, c] in faces {
        subdivide_face(&mut soup, vertices[a], vertices[b], vertices[c], level)?;
    }
    Ok(soup)
}

fn subdivide_face(
    soup: &mut TriangleSoup,
    v1: Vec3,
    v2: Vec3,
    v3: Vec3,
    level: u32,
) -> Result<(), MeshError> {
    if level == 0 {
        soup.push_triangle(v1, v2, v3);
        return Ok(());
    }

    let m12 = midpoint_on_unit_sphere(v1, v2)?;
    let m23 = midpoint_on_unit_sphere(v2, v3)?;
    let m31 = midpoint_on_unit_sphere(v3, v1)?;

    subdivide_face(soup, v1, m12, m31, level - 1)?;
    subdivide_face(soup, v2, m23, m12, level - 1)?;
    subdivide_face(soup, v3, m31, m23, level - 1)?;
    subdivide_face(soup, m12, m23, m31, level - 1)
}

/// Edge midpoint projected onto the unit sphere.
///
/// The midpoint of two unit vectors can only collapse to the origin for
/// antipodal inputs, which a sane base mesh never produces as an edge; the
/// guard turns that case into an error instead of NaN positions.
fn midpoint_on_unit_sphere(a: Vec3, b: Vec3) -> Result<Vec3, MeshError> {
    let mid = (a + b) * 0.5;
    let length = mid.length();
    if length <= f32::EPSILON {
        return Err(MeshError::ZeroLengthVector);
    }
    Ok(mid / length)
}
