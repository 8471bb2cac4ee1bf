//! Vertex Normals
//!
//! Face normals are the unnormalized cross product of the two edges leaving
//! the first corner, so larger triangles weigh more in the per-vertex sum.

use glam::Vec3;

use super::mesh::TerrainMesh;

/// Accumulate face normals into each corner and normalize them.
///
/// Returns the number of vertices whose sum was zero; those keep a zero
/// normal instead of a NaN one.
pub fn calculate_normals(mesh: &mut TerrainMesh) -> usize {
    for vertex in &mut mesh.vertices {
        vertex.normal = Vec3::ZERO;
    }

    for face_index in 0..mesh.faces.len() {
        let face = mesh.faces[face_index];
        let [p0, p1, p2] = mesh.face_positions(face);
        let normal = (p1 - p0).cross(p2 - p0);
        for i in face {
            mesh.vertices[i as usize].normal += normal;
        }
    }

    let mut degenerate = 0;
    for vertex in &mut mesh.vertices {
        match vertex.normal.try_normalize() {
            Some(n) => vertex.normal = n,
            None => {
                vertex.normal = Vec3::ZERO;
                degenerate += 1;
            }
        }
    }
    if degenerate > 0 {
        log::debug!("Terrain: {degenerate} vertices have a zero normal");
    }
    degenerate
}
