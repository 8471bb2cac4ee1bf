//! Terrain Mesh
//!
//! Vertex arena, face and edge lists, height bounds and the water-vertex set
//! for one terrain instance. Passes address vertices by index.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use super::params::WATER_FRACTION;

// ============================================================================
// GPU VERTEX TYPE
// ============================================================================

/// Interleaved vertex for upload by a renderer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

static_assertions::assert_eq_size!(TerrainVertex, [f32; 9]);

// ============================================================================
// VERTEX ARENA
// ============================================================================

/// Per-vertex attributes stored in the mesh arena.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VertexRecord {
    pub position: Vec3,
    pub normal: Vec3,
    pub color: Vec3,
}

impl VertexRecord {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            normal: Vec3::ZERO,
            color: Vec3::ZERO,
        }
    }
}

impl From<&VertexRecord> for TerrainVertex {
    fn from(v: &VertexRecord) -> Self {
        Self {
            position: v.position.to_array(),
            normal: v.normal.to_array(),
            color: v.color.to_array(),
        }
    }
}

// ============================================================================
// HEIGHT BOUNDS
// ============================================================================

/// Minimum and maximum vertex height.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HeightBounds {
    pub min_z: f32,
    pub max_z: f32,
}

impl HeightBounds {
    /// Scan all vertex heights. An empty slice yields `0..0`.
    pub fn from_vertices(vertices: &[VertexRecord]) -> Self {
        if vertices.is_empty() {
            return Self {
                min_z: 0.0,
                max_z: 0.0,
            };
        }
        vertices.iter().fold(
            Self {
                min_z: f32::INFINITY,
                max_z: f32::NEG_INFINITY,
            },
            |acc, v| Self {
                min_z: acc.min_z.min(v.position.z),
                max_z: acc.max_z.max(v.position.z),
            },
        )
    }

    pub fn range(&self) -> f32 {
        self.max_z - self.min_z
    }

    /// True when every vertex sits at the same height.
    pub fn is_flat(&self) -> bool {
        self.range() <= 0.0
    }

    /// Absolute height of the water surface.
    pub fn water_level(&self) -> f32 {
        self.min_z + WATER_FRACTION * self.range()
    }

    /// Height mapped into `[0, 1]` over the range; flat bounds map to 0.
    pub fn normalize(&self, z: f32) -> f32 {
        if self.is_flat() {
            return 0.0;
        }
        ((z - self.min_z) / self.range()).abs()
    }
}

// ============================================================================
// MESH
// ============================================================================

/// A triangulated heightfield with derived shading attributes.
#[derive(Clone, Debug)]
pub struct TerrainMesh {
    pub(crate) vertices: Vec<VertexRecord>,
    pub(crate) faces: Vec<[u32; 3]>,
    pub(crate) edges: Vec<u32>,
    pub(crate) bounds: HeightBounds,
    pub(crate) water_vertices: Vec<u32>,
}

impl TerrainMesh {
    pub(crate) fn from_parts(vertices: Vec<VertexRecord>, faces: Vec<[u32; 3]>, edges: Vec<u32>) -> Self {
        let bounds = HeightBounds::from_vertices(&vertices);
        Self {
            vertices,
            faces,
            edges,
            bounds,
            water_vertices: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn vertices(&self) -> &[VertexRecord] {
        &self.vertices
    }

    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Wireframe line list: `(a, b), (b, c), (c, a)` for every face.
    pub fn edges(&self) -> &[u32] {
        &self.edges
    }

    pub fn position(&self, index: usize) -> Option<Vec3> {
        self.vertices.get(index).map(|v| v.position)
    }

    pub fn normal(&self, index: usize) -> Option<Vec3> {
        self.vertices.get(index).map(|v| v.normal)
    }

    pub fn color(&self, index: usize) -> Option<Vec3> {
        self.vertices.get(index).map(|v| v.color)
    }

    pub fn height_bounds(&self) -> HeightBounds {
        self.bounds
    }

    /// Indices of the vertices flattened into the water surface.
    pub fn water_vertices(&self) -> &[u32] {
        &self.water_vertices
    }

    pub fn water_vertex_count(&self) -> usize {
        self.water_vertices.len()
    }

    pub fn is_water_vertex(&self, index: u32) -> bool {
        self.water_vertices.binary_search(&index).is_ok()
    }

    /// Rescan vertex heights into `bounds`.
    pub fn refresh_height_bounds(&mut self) {
        self.bounds = HeightBounds::from_vertices(&self.vertices);
    }

    /// Positions of a face's three corners.
    pub fn face_positions(&self, face: [u32; 3]) -> [Vec3; 3] {
        face.map(|i| self.vertices[i as usize].position)
    }

    /// Interleaved vertex records ready for a single vertex buffer.
    pub fn interleaved_vertices(&self) -> Vec<TerrainVertex> {
        self.vertices.iter().map(TerrainVertex::from).collect()
    }

    pub fn positions_flat(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.position.to_array()).collect()
    }

    pub fn normals_flat(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.normal.to_array()).collect()
    }

    pub fn colors_flat(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.color.to_array()).collect()
    }
}
