//! Procedural triangle-soup mesh generation
//!
//! Generators for simple 3D primitives that emit **unindexed triangle soup**:
//! a single flat `Vec<f32>` of vertex positions (3 floats per vertex, 9 per
//! triangle, no index buffer, shared vertices duplicated). The output is pure
//! numeric data with no graphics API dependency; consumers bind it as a
//! 3-component position attribute and issue a non-indexed triangle draw.
//!
//! # Modules
//!
//! - [`soup`] - [`TriangleSoup`], the flat vertex packer all generators emit into
//! - [`icosahedron`] - base vertex/face tables for sphere subdivision
//! - [`primitives`] - the generators (sphere, torus, triangle, fan, cube)
//! - [`error`] - [`MeshError`]

pub mod error;
pub mod icosahedron;
pub mod primitives;
pub mod soup;

pub use error::MeshError;
pub use soup::TriangleSoup;

// Re-export the generators
pub use primitives::{
    MAX_SUBDIVISION_LEVEL, generate_cube, generate_sphere, generate_torus, generate_triangle,
    generate_triangle_fan, subdivide,
};
