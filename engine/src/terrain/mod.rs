//! Terrain Module
//!
//! Fault-line heightfield terrain with water leveling and height-banded colors.
//!
//! Pipeline: grid → sculpt → water → normals → colors.

pub mod builder;
pub mod coloring;
pub mod error;
pub mod export;
pub mod grid;
pub mod mesh;
pub mod normals;
pub mod params;
pub mod rng;
pub mod sculpt;
pub mod water;

pub use builder::build_terrain;
pub use coloring::{calculate_colors, face_color, water_threshold};
pub use error::TerrainError;
pub use export::{edge_index_bytes, face_index_bytes, vertex_bytes, write_obj};
pub use grid::{generate_edges, generate_grid, grid_counts};
pub use mesh::{HeightBounds, TerrainMesh, TerrainVertex, VertexRecord};
pub use normals::calculate_normals;
pub use params::{SculptParams, TerrainBounds, TerrainConfig, WATER_FRACTION};
pub use rng::{RandomSource, SimpleRng};
pub use sculpt::{partition_heights, random_fault_direction};
pub use water::add_water;
