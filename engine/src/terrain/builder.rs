//! Terrain Builder
//!
//! Runs the full pipeline for one terrain instance:
//! grid → fault sculpting → water → normals → colors.

use super::coloring::calculate_colors;
use super::error::TerrainError;
use super::grid::generate_grid;
use super::mesh::TerrainMesh;
use super::normals::calculate_normals;
use super::params::TerrainConfig;
use super::rng::{RandomSource, SimpleRng};
use super::sculpt::partition_heights;
use super::water::add_water;

/// Build a finished terrain mesh drawing all randomness from `rng`.
pub fn build_terrain(
    config: &TerrainConfig,
    rng: &mut impl RandomSource,
) -> Result<TerrainMesh, TerrainError> {
    config.validate()?;

    let mut mesh = generate_grid(config.resolution, &config.bounds)?;
    log::info!(
        "Terrain: Generated {} triangles over {} vertices",
        mesh.face_count(),
        mesh.vertex_count()
    );

    partition_heights(&mut mesh, &config.bounds, &config.sculpt, rng);
    let bounds = mesh.height_bounds();
    log::info!(
        "Terrain: Sculpted {} faults, heights {:.4}..{:.4}",
        config.sculpt.iterations,
        bounds.min_z,
        bounds.max_z
    );

    let water = add_water(&mut mesh, rng);
    log::info!("Terrain: Flattened {water} water vertices");

    let degenerate = calculate_normals(&mut mesh);
    log::info!("Terrain: Generated normals ({degenerate} degenerate)");

    calculate_colors(&mut mesh);
    log::info!("Terrain: Colored {} vertices", mesh.vertex_count());

    Ok(mesh)
}

impl TerrainMesh {
    /// Build a terrain with the config's seed and the default generator.
    pub fn generate(config: &TerrainConfig) -> Result<Self, TerrainError> {
        let mut rng = SimpleRng::new(config.seed);
        build_terrain(config, &mut rng)
    }
}
