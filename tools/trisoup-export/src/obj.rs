//! Wavefront OBJ writer

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use trisoup::TriangleSoup;

/// Write a triangle soup to `output` as Wavefront OBJ.
pub fn write_obj(soup: &TriangleSoup, output: &Path) -> Result<()> {
    let file =
        File::create(output).with_context(|| format!("Failed to create output: {:?}", output))?;
    let mut writer = BufWriter::new(file);
    write_obj_to(soup, &mut writer)?;

    tracing::info!(
        "Wrote OBJ mesh: {} vertices, {} triangles -> {:?}",
        soup.vertex_count(),
        soup.triangle_count(),
        output
    );
    Ok(())
}

/// Write OBJ text to any writer.
///
/// Vertices appear in soup order and faces reference them sequentially with
/// 1-based indices; nothing is deduplicated, matching the soup contract.
pub fn write_obj_to<W: Write>(soup: &TriangleSoup, writer: &mut W) -> Result<()> {
    for v in soup.positions().chunks_exact(3) {
        writeln!(writer, "v {} {} {}", v[0], v[1], v[2])?;
    }
    for triangle in 0..soup.triangle_count() {
        let base = triangle * 3 + 1;
        writeln!(writer, "f {} {} {}", base, base + 1, base + 2)?;
    }
    Ok(())
}
