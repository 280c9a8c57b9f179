//! Fixed-data primitives (triangle, triangle fan, cube)
//!
//! Hard-coded shapes emitted through the same flat-packing path as the
//! procedural generators.

use glam::Vec3;
use tracing::debug;

use crate::error::MeshError;
use crate::soup::TriangleSoup;

/// Unit-cube triangle list, 12 triangles with half-extent 1.
const CUBE_CORNERS: [[Vec3; 3]; 12] = [
    [
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, 1.0),
    ],
    [
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
    ],
    [
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, 1.0),
    ],
    [
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(1.0, 1.0, 1.0),
    ],
    [
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
    ],
    [
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
    ],
    [
        Vec3::new(-1.0, 1.0, 1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, -1.0, -1.0),
    ],
    [
        Vec3::new(-1.0, 1.0, 1.0),
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
    ],
    [
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
    ],
    [
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
    ],
    [
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, 1.0),
    ],
    [
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(-1.0, -1.0, -1.0),
    ],
];

/// Fan rim points in the z = 0 plane, wound counter-clockwise from +Y.
const FAN_RIM: [Vec3; 8] = [
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(-0.7, 0.7, 0.0),
    Vec3::new(-1.0, 0.0, 0.0),
    Vec3::new(-0.7, -0.7, 0.0),
    Vec3::new(0.0, -1.0, 0.0),
    Vec3::new(0.7, -0.7, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(0.7, 0.7, 0.0),
];

/// A single triangle in the z = 0 plane.
///
/// # Returns
/// Soup with 1 triangle (9 floats).
pub fn generate_triangle() -> TriangleSoup {
    let mut soup = TriangleSoup::with_triangle_capacity(1);
    soup.push_triangle(
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
    );
    soup
}

/// A small fan around a center vertex raised to z = 1.
///
/// The fan is emitted as a triangle list with the center vertex repeated
/// (the output contract is non-indexed `TRIANGLES` data), so the 9 source
/// vertices become 7 triangles.
///
/// # Returns
/// Soup with 7 triangles (63 floats).
pub fn generate_triangle_fan() -> TriangleSoup {
    let center = Vec3::new(0.0, 0.0, 1.0);
    let mut soup = TriangleSoup::with_triangle_capacity(FAN_RIM.len() - 1);
    for rim in FAN_RIM.windows(2) {
        soup.push_triangle(center, rim[0], rim[1]);
    }
    soup
}

/// A cube around the origin.
///
/// # Arguments
/// * `size` - Half-extent along each axis; must be positive and finite
///
/// # Returns
/// Soup with 12 triangles (108 floats).
pub fn generate_cube(size: f32) -> Result<TriangleSoup, MeshError> {
    if !size.is_finite() || size <= 0.0 {
        return Err(MeshError::InvalidArgument(format!(
            "size must be positive and finite, got {size}"
        )));
    }

    let mut soup = TriangleSoup::with_triangle_capacity(CUBE_CORNERS.len());
    for [v1, v2, v3] in CUBE_CORNERS {
        soup.push_triangle(v1 * size, v2 * size, v3 * size);
    }

    debug!("generated cube: size={}, triangles={}", size, soup.triangle_count());
    Ok(soup)
}
