//! Grid Generation
//!
//! Flat triangulated grid over the terrain rectangle. Vertices are row-major
//! (rows along Y, columns along X); each cell is split along the same diagonal.

use glam::Vec3;

use super::error::TerrainError;
use super::mesh::{TerrainMesh, VertexRecord};
use super::params::TerrainBounds;

/// Vertex and face counts for a `div` grid, or `None` when `div` is zero or
/// the counts do not fit the `u32` index space.
pub fn grid_counts(div: u32) -> Option<(u32, u32)> {
    if div == 0 {
        return None;
    }
    let grid_count = div.checked_add(1)?;
    let vertex_count = grid_count.checked_mul(grid_count)?;
    let face_count = div.checked_mul(div)?.checked_mul(2)?;
    Some((vertex_count, face_count))
}

/// Build a flat `(div + 1) x (div + 1)` vertex grid with `2 * div * div` faces.
pub fn generate_grid(div: u32, bounds: &TerrainBounds) -> Result<TerrainMesh, TerrainError> {
    let (vertex_count, face_count) = grid_counts(div).ok_or(TerrainError::InvalidResolution(div))?;
    bounds.validate()?;

    let grid_count = div + 1;
    let delta_x = bounds.width() / div as f32;
    let delta_y = bounds.depth() / div as f32;

    let mut vertices = Vec::with_capacity(vertex_count as usize);
    for i in 0..grid_count {
        for j in 0..grid_count {
            let x = bounds.min_x + delta_x * j as f32;
            let y = bounds.min_y + delta_y * i as f32;
            vertices.push(VertexRecord::at(Vec3::new(x, y, 0.0)));
        }
    }

    let mut faces = Vec::with_capacity(face_count as usize);
    for i in 0..div {
        for j in 0..div {
            let v = i * grid_count + j;
            faces.push([v, v + 1, v + grid_count]);
            faces.push([v + 1, v + 1 + grid_count, v + grid_count]);
        }
    }

    let edges = generate_edges(&faces);
    Ok(TerrainMesh::from_parts(vertices, faces, edges))
}

/// Line-list indices for drawing the faces as a wireframe.
pub fn generate_edges(faces: &[[u32; 3]]) -> Vec<u32> {
    faces
        .iter()
        .flat_map(|&[a, b, c]| [a, b, b, c, c, a])
        .collect()
}
