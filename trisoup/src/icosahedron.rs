//! Unit icosahedron base tables
//!
//! 12 vertices and 20 faces of a regular icosahedron inscribed in the unit
//! sphere, used as the base mesh for sphere approximation by subdivision.
//! Pure constant data.

use glam::Vec3;

const X: f32 = 0.525_731_1;
const Z: f32 = 0.850_650_8;

/// The 12 icosahedron vertices, all unit length.
pub const VERTICES: [Vec3; 12] = [
    Vec3::new(-X, 0.0, Z),
    Vec3::new(X, 0.0, Z),
    Vec3::new(-X, 0.0, -Z),
    Vec3::new(X, 0.0, -Z),
    Vec3::new(0.0, Z, X),
    Vec3::new(0.0, Z, -X),
    Vec3::new(0.0, -Z, X),
    Vec3::new(0.0, -Z, -X),
    Vec3::new(Z, X, 0.0),
    Vec3::new(-Z, X, 0.0),
    Vec3::new(Z, -X, 0.0),
    Vec3::new(-Z, -X, 0.0),
];

/// The 20 faces as index triples into [`VERTICES`], consistently wound.
pub const FACES: [[usize; 3]; 20] = [
    [0, 4, 1],
    [0, 9, 4],
    [9, 5, 4],
    [4, 5, 8],
    [4, 8, 1],
    [8, 10, 1],
    [8, 3, 10],
    [5, 3, 8],
    [5, 2, 3],
    [2, 7, 3],
    [7, 10, 3],
    [7, 6, 10],
    [7, 11, 6],
    [11, 0, 6],
    [0, 1, 6],
    [6, 1, 10],
    [9, 0, 11],
    [9, 11, 2],
    [9, 2, 5],
    [7, 2, 11],
];
