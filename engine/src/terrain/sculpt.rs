//! Fault-Line Sculpting
//!
//! Each iteration splits the rectangle with a random line: vertices on the
//! side the fault normal points to rise by `delta`, the rest sink by `delta`.
//! Many overlapping faults add up to rolling relief.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use super::mesh::TerrainMesh;
use super::params::{SculptParams, TerrainBounds};
use super::rng::RandomSource;

/// Random unit vector in the XY plane (angle uniform in `[0, 2π)`).
pub fn random_fault_direction(rng: &mut impl RandomSource) -> Vec3 {
    let angle = rng.range(0.0, TAU);
    Vec3::new(angle.cos(), angle.sin(), 0.0)
}

/// Apply `params.iterations` random faults, then rescan the height bounds.
pub fn partition_heights(
    mesh: &mut TerrainMesh,
    bounds: &TerrainBounds,
    params: &SculptParams,
    rng: &mut impl RandomSource,
) {
    for _ in 0..params.iterations {
        let normal = random_fault_direction(rng).truncate();
        let pivot = Vec2::new(
            rng.range(bounds.min_x, bounds.max_x),
            rng.range(bounds.min_y, bounds.max_y),
        );

        for vertex in &mut mesh.vertices {
            let offset = vertex.position.truncate() - pivot;
            if offset.dot(normal) >= 0.0 {
                vertex.position.z += params.delta;
            } else {
                vertex.position.z -= params.delta;
            }
        }
    }
    mesh.refresh_height_bounds();
}
