//! Fault Terrain Engine Library
//!
//! CPU-side construction of procedural heightfield terrain meshes.
//! A regular grid is sculpted by random fault lines, low ground is
//! flattened into a water surface, and per-vertex normals and height
//! colors are derived for an external renderer to upload.
//!
//! # Modules
//!
//! - [`terrain`] - Grid generation, sculpting, water, normals, colors and export
//!
//! # Example
//!
//! ```
//! use fault_terrain_engine::terrain::{SimpleRng, TerrainConfig, build_terrain};
//!
//! let config = TerrainConfig {
//!     resolution: 16,
//!     ..TerrainConfig::default()
//! };
//! let mut rng = SimpleRng::new(config.seed);
//! let mesh = build_terrain(&config, &mut rng).unwrap();
//!
//! assert_eq!(mesh.vertex_count(), 17 * 17);
//! assert_eq!(mesh.face_count(), 2 * 16 * 16);
//! ```

pub mod terrain;

// Re-export the commonly used terrain types at crate level
pub use terrain::{
    HeightBounds, RandomSource, SimpleRng, TerrainBounds, TerrainConfig, TerrainError,
    TerrainMesh, TerrainVertex, build_terrain,
};
