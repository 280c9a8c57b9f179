//! Parametric torus tessellation

use glam::Vec3;
use std::f32::consts::PI;
use tracing::debug;

use crate::error::MeshError;
use crate::soup::TriangleSoup;

/// Generate a torus as triangle soup.
///
/// Samples the surface on a `rings × sides` grid: the outer loop steps the
/// main-loop angle θ in `2π/rings` increments over ring pairs `(θ0, θ1)`, the
/// inner loop steps the tube angle φ in `2π/sides` increments. Each cell
/// emits two triangles, so the soup holds `2 × sides × (rings − 1)` triangles.
///
/// The main loop runs `rings − 1` times and emits no closing band between the
/// last and first ring; the seam is part of the output contract and consumers
/// size their buffers from it.
///
/// # Arguments
/// * `torus_radius` - Distance from torus center to tube center
/// * `tube_radius` - Tube cross-section radius
/// * `sides` - Segments around the tube (min 3)
/// * `rings` - Segments around the main loop (min 3)
///
/// # Returns
/// Soup with `2 × sides × (rings − 1)` triangles.
pub fn generate_torus(
    torus_radius: f32,
    tube_radius: f32,
    sides: u32,
    rings: u32,
) -> Result<TriangleSoup, MeshError> {
    if sides < 3 {
        return Err(MeshError::InvalidArgument(format!(
            "sides must be at least 3, got {sides}"
        )));
    }
    if rings < 3 {
        return Err(MeshError::InvalidArgument(format!(
            "rings must be at least 3, got {rings}"
        )));
    }

    let ring_step = 2.0 * PI / rings as f32;
    let side_step = 2.0 * PI / sides as f32;

    let mut soup =
        TriangleSoup::with_triangle_capacity(2 * sides as usize * (rings as usize - 1));

    for ring in 0..rings - 1 {
        let theta0 = ring as f32 * ring_step;
        let theta1 = (ring + 1) as f32 * ring_step;
        let (sin0, cos0) = theta0.sin_cos();
        let (sin1, cos1) = theta1.sin_cos();

        for side in 0..sides {
            let phi = side as f32 * side_step;
            let radial = tube_radius * phi.cos() + torus_radius;
            let z = tube_radius * phi.sin();

            let a = Vec3::new(cos1 * radial, -sin1 * radial, z);
            let b = Vec3::new(cos0 * radial, -sin0 * radial, z);
            // a.z == b.z, so the cell closes with the two axis-aligned
            // corners of the (a, b) diagonal in that z-plane
            let c = Vec3::new(b.x, a.y, a.z);
            let d = Vec3::new(a.x, b.y, b.z);

            soup.push_triangle(a, d, c);
            soup.push_triangle(c, d, b);
        }
    }

    debug!(
        "generated torus: torus_radius={}, tube_radius={}, sides={}, rings={}, triangles={}",
        torus_radius,
        tube_radius,
        sides,
        rings,
        soup.triangle_count()
    );
    Ok(soup)
}
