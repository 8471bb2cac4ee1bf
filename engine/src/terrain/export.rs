//! Mesh Export
//!
//! Raw byte views for GPU upload and a Wavefront OBJ text dump for
//! inspecting a generated terrain in any model viewer.

use std::io::Write;

use super::error::TerrainError;
use super::mesh::{TerrainMesh, TerrainVertex};

// ============================================================================
// GPU BYTE VIEWS
// ============================================================================

/// Bytes of an interleaved vertex buffer (36 bytes per vertex).
pub fn vertex_bytes(vertices: &[TerrainVertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Bytes of the triangle index buffer (`u32` indices, 3 per face).
pub fn face_index_bytes(mesh: &TerrainMesh) -> &[u8] {
    bytemuck::cast_slice(mesh.faces())
}

/// Bytes of the wireframe line index buffer (`u32` indices, 6 per face).
pub fn edge_index_bytes(mesh: &TerrainMesh) -> &[u8] {
    bytemuck::cast_slice(mesh.edges())
}

// ============================================================================
// OBJ DUMP
// ============================================================================

/// Write positions, normals and faces as OBJ. Face indices are 1-based and
/// reference the matching normal (`f a//a b//b c//c`).
pub fn write_obj<W: Write>(mesh: &TerrainMesh, mut out: W) -> Result<(), TerrainError> {
    writeln!(
        out,
        "# fault terrain: {} vertices, {} faces, {} water vertices",
        mesh.vertex_count(),
        mesh.face_count(),
        mesh.water_vertex_count()
    )?;
    for v in mesh.vertices() {
        let p = v.position;
        writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for v in mesh.vertices() {
        let n = v.normal;
        writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for &[a, b, c] in mesh.faces() {
        let (a, b, c) = (a + 1, b + 1, c + 1);
        writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }
    out.flush()?;
    Ok(())
}
