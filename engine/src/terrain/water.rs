//! Water Leveling
//!
//! Everything below the water line is pulled up to it and then roughened by a
//! small random ripple so the surface does not render as a perfect plane.

use super::mesh::TerrainMesh;
use super::rng::RandomSource;

/// Ripple amplitude divisor; keeps the offset below the water line tiny.
const RIPPLE_DAMPING: f32 = 180.0;
/// Spatial frequency of the ripple pattern.
const RIPPLE_FREQUENCY: f32 = 50.0;

/// Flatten sub-water vertices and record them. Returns the number flattened.
///
/// The level comes from the current height bounds, which are left unchanged;
/// every leveled height is clamped back inside them. The water set is
/// replaced, so it always holds ascending unique indices from this pass.
pub fn add_water(mesh: &mut TerrainMesh, rng: &mut impl RandomSource) -> usize {
    let bounds = mesh.bounds;
    let level = bounds.water_level();
    mesh.water_vertices.clear();

    for (index, vertex) in mesh.vertices.iter_mut().enumerate() {
        if vertex.position.z >= level {
            continue;
        }

        let x = vertex.position.x;
        let y = vertex.position.y;
        let ripple = rng.next_f32() * (rng.next_f32() * 10.0 * x * RIPPLE_FREQUENCY).sin()
            + rng.next_f32() * (y * RIPPLE_FREQUENCY).cos();
        vertex.position.z = (level - ripple.abs() / RIPPLE_DAMPING).clamp(bounds.min_z, bounds.max_z);

        mesh.water_vertices.push(index as u32);
    }

    mesh.water_vertices.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::grid::generate_grid;
    use crate::terrain::params::{SculptParams, TerrainBounds};
    use crate::terrain::rng::SimpleRng;
    use crate::terrain::sculpt::partition_heights;

    fn sculpted(seed: u32) -> TerrainMesh {
        let bounds = TerrainBounds::default();
        let mut mesh = generate_grid(24, &bounds).unwrap();
        let params = SculptParams {
            iterations: 60,
            delta: 0.01,
        };
        partition_heights(&mut mesh, &bounds, &params, &mut SimpleRng::new(seed));
        mesh
    }

    #[test]
    fn test_water_set_matches_pre_level_heights() {
        let mut mesh = sculpted(4);
        let level = mesh.height_bounds().water_level();
        let expected: Vec<u32> = mesh
            .vertices()
            .iter()
            .enumerate()
            .filter(|(_, v)| v.position.z < level)
            .map(|(i, _)| i as u32)
            .collect();
        assert!(!expected.is_empty(), "sculpted terrain should have low ground");

        let count = add_water(&mut mesh, &mut SimpleRng::new(8));
        assert_eq!(count, expected.len());
        assert_eq!(mesh.water_vertices(), expected.as_slice());
        assert_eq!(mesh.water_vertex_count(), expected.len());
    }

    #[test]
    fn test_water_heights_within_bounds_and_near_level() {
        let mut mesh = sculpted(19);
        let bounds = mesh.height_bounds();
        let level = bounds.water_level();
        add_water(&mut mesh, &mut SimpleRng::new(1));

        for &i in mesh.water_vertices() {
            let z = mesh.position(i as usize).unwrap().z;
            assert!(z >= bounds.min_z && z <= bounds.max_z, "z {z} escaped bounds");
            // |ripple| <= 2, so the drop below the level is at most 2/180
            assert!(z <= level + 1e-6);
            assert!(z >= level - 2.0 / RIPPLE_DAMPING - 1e-6);
        }
        assert_eq!(mesh.height_bounds(), bounds, "bounds are not rescanned");
    }

    #[test]
    fn test_dry_vertices_untouched() {
        let mut mesh = sculpted(23);
        let before = mesh.clone();
        add_water(&mut mesh, &mut SimpleRng::new(5));
        for (i, (a, b)) in before.vertices().iter().zip(mesh.vertices()).enumerate() {
            if !mesh.is_water_vertex(i as u32) {
                assert_eq!(a.position, b.position);
            }
        }
    }

    #[test]
    fn test_second_pass_replaces_water_set() {
        let mut mesh = sculpted(4);
        add_water(&mut mesh, &mut SimpleRng::new(8));
        let level = mesh.height_bounds().water_level();
        let still_below: Vec<u32> = mesh
            .vertices()
            .iter()
            .enumerate()
            .filter(|(_, v)| v.position.z < level)
            .map(|(i, _)| i as u32)
            .collect();

        let count = add_water(&mut mesh, &mut SimpleRng::new(9));
        assert_eq!(count, still_below.len());
        assert_eq!(mesh.water_vertices(), still_below.as_slice());
        assert!(mesh.water_vertices().windows(2).all(|w| w[0] < w[1]));
        for &i in &still_below {
            assert!(mesh.is_water_vertex(i));
        }
    }

    #[test]
    fn test_flat_terrain_has_no_water() {
        let mut mesh = generate_grid(2, &TerrainBounds::default()).unwrap();
        let count = add_water(&mut mesh, &mut SimpleRng::new(1));
        assert_eq!(count, 0);
        assert!(mesh.vertices().iter().all(|v| v.position.z == 0.0));
    }
}
