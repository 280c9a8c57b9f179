//! Triangle-soup primitive generators
//!
//! Every generator builds a fresh [`TriangleSoup`](crate::TriangleSoup) per
//! call; there is no caching and no shared state between invocations.

mod basic;
mod sphere;
mod torus;

pub use basic::{generate_cube, generate_triangle, generate_triangle_fan};
pub use sphere::{MAX_SUBDIVISION_LEVEL, generate_sphere, subdivide};
pub use torus::generate_torus;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use crate::icosahedron;
    use glam::Vec3;

    /// Euclidean norm of the vertex starting at `positions[i * 3]`.
    fn vertex_norm(positions: &[f32], i: usize) -> f32 {
        let v = &positions[i * 3..i * 3 + 3];
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn test_sphere_counts() {
        for level in 0..=3 {
            let soup = generate_sphere(level, 1.0).unwrap();
            let expected = 9 * 20 * 4usize.pow(level);
            assert_eq!(soup.positions().len(), expected, "level {level}");
            assert_eq!(soup.triangle_count(), 20 * 4usize.pow(level));
        }
    }

    #[test]
    fn test_sphere_vertices_on_unit_sphere() {
        let soup = generate_sphere(2, 1.0).unwrap();
        let positions = soup.positions();
        for i in 0..soup.vertex_count() {
            let norm = vertex_norm(positions, i);
            assert!(
                (norm - 1.0).abs() < 1e-5,
                "vertex {i} off the unit sphere: norm = {norm}"
            );
        }
    }

    #[test]
    fn test_sphere_level0_is_flattened_base() {
        let soup = generate_sphere(0, 1.0).unwrap();
        assert_eq!(soup.vertex_count(), 60);
        assert_eq!(soup.positions().len(), 180);

        // Triangles come out in face-table order with winding intact
        let [a, b, c] = icosahedron::FACES[0];
        let expected = [
            icosahedron::VERTICES[a],
            icosahedron::VERTICES[b],
            icosahedron::VERTICES[c],
        ];
        for (i, v) in expected.iter().enumerate() {
            assert_eq!(soup.positions()[i * 3..i * 3 + 3], [v.x, v.y, v.z]);
        }

        // Every emitted vertex is one of the 12 base coordinates
        let positions = soup.positions();
        for i in 0..soup.vertex_count() {
            let v = Vec3::new(
                positions[i * 3],
                positions[i * 3 + 1],
                positions[i * 3 + 2],
            );
            assert!(
                icosahedron::VERTICES.contains(&v),
                "vertex {v} is not a base icosahedron vertex"
            );
        }
    }

    #[test]
    fn test_sphere_radius_scales_unit_output() {
        let unit = generate_sphere(2, 1.0).unwrap();
        let scaled = generate_sphere(2, 2.5).unwrap();
        assert_eq!(unit.positions().len(), scaled.positions().len());
        for (u, s) in unit.positions().iter().zip(scaled.positions()) {
            assert_eq!(u * 2.5, *s);
        }
    }

    #[test]
    fn test_subdivide_one_step_quadruples_a_face() {
        let vertices = [Vec3::Y, Vec3::new(-1.0, -1.0, 0.0), Vec3::new(1.0, -1.0, 0.0)];
        let soup = subdivide(&vertices, &[[0, 1, 2]], 1).unwrap();
        assert_eq!(soup.triangle_count(), 4);
        assert_eq!(soup.positions().len(), 36);
    }

    #[test]
    fn test_subdivide_rejects_out_of_range_face_index() {
        let vertices = [Vec3::X, Vec3::Y, Vec3::Z];
        let err = subdivide(&vertices, &[[0, 1, 3]], 0).unwrap_err();
        assert!(matches!(err, MeshError::InvalidArgument(_)));
    }

    #[test]
    fn test_subdivide_degenerate_midpoint_errors() {
        // Midpoint of two antipodal vertices is the origin and cannot be
        // projected onto the sphere.
        let vertices = [Vec3::X, -Vec3::X, Vec3::Y];
        let err = subdivide(&vertices, &[[0, 1, 2]], 1).unwrap_err();
        assert_eq!(err, MeshError::ZeroLengthVector);
    }

    #[test]
    fn test_sphere_invalid_arguments() {
        assert!(matches!(
            generate_sphere(MAX_SUBDIVISION_LEVEL + 1, 1.0),
            Err(MeshError::InvalidArgument(_))
        ));
        assert!(matches!(
            generate_sphere(1, 0.0),
            Err(MeshError::InvalidArgument(_))
        ));
        assert!(matches!(
            generate_sphere(1, -2.0),
            Err(MeshError::InvalidArgument(_))
        ));
        assert!(matches!(
            generate_sphere(1, f32::NAN),
            Err(MeshError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_torus_counts() {
        for (sides, rings) in [(3, 3), (4, 4), (8, 6), (30, 30)] {
            let soup = generate_torus(0.6, 0.3, sides, rings).unwrap();
            let expected = 9 * 2 * sides as usize * (rings as usize - 1);
            assert_eq!(
                soup.positions().len(),
                expected,
                "sides={sides}, rings={rings}"
            );
        }
    }

    #[test]
    fn test_torus_small_output_finite() {
        let soup = generate_torus(0.6, 0.3, 4, 4).unwrap();
        assert_eq!(soup.positions().len(), 216);
        for c in soup.positions() {
            assert!(c.is_finite());
        }
    }

    #[test]
    fn test_torus_height_bounded_by_tube_radius() {
        // Every emitted vertex inherits z = tube_radius * sin(phi) from its
        // phi sample, including the synthesized diagonal corners
        let tube_radius = 0.3;
        let soup = generate_torus(0.6, tube_radius, 8, 8).unwrap();
        for v in soup.positions().chunks_exact(3) {
            assert!(v[2].abs() <= tube_radius + 1e-6);
        }
    }

    #[test]
    fn test_torus_invalid_arguments() {
        assert!(matches!(
            generate_torus(0.6, 0.3, 2, 4),
            Err(MeshError::InvalidArgument(_))
        ));
        assert!(matches!(
            generate_torus(0.6, 0.3, 4, 2),
            Err(MeshError::InvalidArgument(_))
        ));
        assert!(matches!(
            generate_torus(0.6, 0.3, 0, 0),
            Err(MeshError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_generators_are_deterministic() {
        assert_eq!(
            generate_sphere(3, 2.0).unwrap(),
            generate_sphere(3, 2.0).unwrap()
        );
        assert_eq!(
            generate_torus(0.9, 0.5, 10, 10).unwrap(),
            generate_torus(0.9, 0.5, 10, 10).unwrap()
        );
    }

    #[test]
    fn test_fixed_primitive_counts() {
        assert_eq!(generate_triangle().positions().len(), 9);
        assert_eq!(generate_triangle_fan().positions().len(), 63);
        assert_eq!(generate_cube(1.0).unwrap().positions().len(), 108);
    }

    #[test]
    fn test_cube_scales_corners() {
        let soup = generate_cube(2.0).unwrap();
        for c in soup.positions() {
            assert_eq!(c.abs(), 2.0);
        }
        assert!(matches!(
            generate_cube(0.0),
            Err(MeshError::InvalidArgument(_))
        ));
    }
}
