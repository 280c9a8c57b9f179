//! Flat vertex packing
//!
//! [`TriangleSoup`] is the output type of every generator in this crate: one
//! contiguous, ordered `Vec<f32>` of vertex positions with no index buffer.
//! Vertices shared between adjacent triangles are stored redundantly; that is
//! the contract, not an oversight, and consumers size their draw calls from it.

use glam::Vec3;

/// An unindexed triangle list, flattened to `[x, y, z, x, y, z, ...]`.
///
/// Invariant: the underlying buffer length is always a multiple of 9
/// (3 vertices × 3 components per triangle) once built through
/// [`push_triangle`](Self::push_triangle).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleSoup {
    positions: Vec<f32>,
}

impl TriangleSoup {
    /// Create an empty soup.
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
        }
    }

    /// Create an empty soup with room for `triangles` triangles.
    pub fn with_triangle_capacity(triangles: usize) -> Self {
        Self {
            positions: Vec::with_capacity(triangles * 9),
        }
    }

    /// Append one vertex (3 components, in order).
    pub fn push_vertex(&mut self, v: Vec3) {
        self.positions.extend_from_slice(&[v.x, v.y, v.z]);
    }

    /// Append one triangle as three consecutive vertices.
    ///
    /// Winding order is preserved exactly as given; back-face culling is the
    /// consumer's concern.
    pub fn push_triangle(&mut self, v1: Vec3, v2: Vec3, v3: Vec3) {
        self.push_vertex(v1);
        self.push_vertex(v2);
        self.push_vertex(v3);
    }

    /// Number of vertices (flat length / 3).
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles (flat length / 9).
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 9
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The flat position sequence.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Consume the soup and hand the flat position sequence to the caller.
    pub fn into_positions(self) -> Vec<f32> {
        self.positions
    }

    /// Multiply every component by `factor`.
    pub fn scale(&mut self, factor: f32) {
        for c in &mut self.positions {
            *c *= factor;
        }
    }

    /// Byte view over the positions, suitable for direct GPU buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_triangle_layout() {
        let mut soup = TriangleSoup::new();
        soup.push_triangle(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
        );

        assert_eq!(soup.vertex_count(), 3);
        assert_eq!(soup.triangle_count(), 1);
        assert_eq!(
            soup.positions(),
            &[0.0, 1.0, 0.0, -1.0, -1.0, 0.0, 1.0, -1.0, 0.0]
        );

        let flat = soup.into_positions();
        assert_eq!(flat.len(), 9);
    }

    #[test]
    fn test_no_deduplication() {
        // Shared vertices must be stored redundantly
        let v = Vec3::new(1.0, 2.0, 3.0);
        let mut soup = TriangleSoup::new();
        soup.push_triangle(v, Vec3::ZERO, Vec3::X);
        soup.push_triangle(v, Vec3::X, Vec3::Y);

        assert_eq!(soup.vertex_count(), 6);
        assert_eq!(soup.positions()[0..3], soup.positions()[9..12]);
    }

    #[test]
    fn test_scale() {
        let mut soup = TriangleSoup::new();
        soup.push_triangle(Vec3::X, Vec3::Y, Vec3::Z);
        soup.scale(2.5);
        assert_eq!(
            soup.positions(),
            &[2.5, 0.0, 0.0, 0.0, 2.5, 0.0, 0.0, 0.0, 2.5]
        );
    }

    #[test]
    fn test_as_bytes() {
        let mut soup = TriangleSoup::new();
        soup.push_triangle(Vec3::X, Vec3::Y, Vec3::Z);

        let bytes = soup.as_bytes();
        assert_eq!(bytes.len(), 9 * std::mem::size_of::<f32>());
        assert_eq!(&bytes[0..4], &1.0f32.to_le_bytes());
    }
}
