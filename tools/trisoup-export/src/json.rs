//! JSON document writer

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use trisoup::TriangleSoup;

/// On-disk JSON form of a generated mesh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshDocument {
    pub vertex_count: usize,
    pub triangle_count: usize,
    /// Flat position stream, 3 floats per vertex.
    pub positions: Vec<f32>,
}

impl From<&TriangleSoup> for MeshDocument {
    fn from(soup: &TriangleSoup) -> Self {
        Self {
            vertex_count: soup.vertex_count(),
            triangle_count: soup.triangle_count(),
            positions: soup.positions().to_vec(),
        }
    }
}

/// Write a triangle soup to `output` as a JSON document.
pub fn write_json(soup: &TriangleSoup, output: &Path) -> Result<()> {
    let file =
        File::create(output).with_context(|| format!("Failed to create output: {:?}", output))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer(writer, &MeshDocument::from(soup))?;

    tracing::info!(
        "Wrote JSON mesh: {} vertices, {} triangles -> {:?}",
        soup.vertex_count(),
        soup.triangle_count(),
        output
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_counts_match_soup() {
        let soup = trisoup::generate_torus(0.6, 0.3, 4, 4).unwrap();
        let doc = MeshDocument::from(&soup);
        assert_eq!(doc.vertex_count, 24);
        assert_eq!(doc.triangle_count, 8);
        assert_eq!(doc.positions.len(), 216);
    }

    #[test]
    fn test_write_json_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sphere.json");

        let soup = trisoup::generate_sphere(0, 1.0).unwrap();
        write_json(&soup, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let doc: MeshDocument = serde_json::from_str(&text).unwrap();
        assert_eq!(doc.vertex_count, 60);
        assert_eq!(doc.positions, soup.positions());
    }
}
