//! Height Colors
//!
//! Banded terrain palette keyed on normalized height: flat water, a blended
//! shoreline, green midlands and grey-brown highlands that brighten towards
//! the peaks.

use glam::Vec3;

use super::mesh::{HeightBounds, TerrainMesh};
use super::params::WATER_FRACTION;

const WATER_COLOR: Vec3 = Vec3::new(0.05, 0.25, 0.30);
const SHORE_START: f32 = 0.25;
const SHORE_END: f32 = 0.35;
const MIDLAND_END: f32 = 0.60;
const HIGHLIGHT_START: f32 = 0.70;

/// Water line on the normalized `[0, 1]` height scale.
pub fn water_threshold(bounds: &HeightBounds) -> f32 {
    if bounds.is_flat() {
        return WATER_FRACTION;
    }
    bounds.normalize(bounds.water_level())
}

/// Unclamped RGB for a normalized height `h` given water threshold `w`.
///
/// Peaks in the highlight band can exceed 1.0 here; only
/// [`calculate_colors`] clamps, when it stores the per-face average.
pub fn face_color(h: f32, w: f32) -> Vec3 {
    let mut r = h;
    let mut b = 0.4 - h;
    let mut g = (r + b) / 2.0;

    if h <= w {
        return WATER_COLOR;
    } else if (SHORE_START..SHORE_END).contains(&h) {
        g *= 1.0 + (1.0 - r);
        r = (r + g) / 2.5;
        b = (r + b) / 3.5;
    } else if h < MIDLAND_END {
        b = 0.15;
        g *= 1.4;
    } else {
        b = 0.15;
        r *= 1.0 - h / 1.1;
        g *= 1.0 - h / 1.75;
        b *= 1.0 - h / 1.75;
    }

    let color = Vec3::new(r, g, b);
    if h >= HIGHLIGHT_START {
        color + Vec3::splat(h)
    } else {
        color
    }
}

/// Write per-vertex colors face by face.
///
/// Each face averages its three corner colors and stores that average on all
/// three corners. A corner shared by several faces ends up with the value of
/// the last face that touches it.
///
/// Stored colors are clamped to `[0, 1]`. This is the one place the stored
/// value differs from the raw palette average, and only for faces whose
/// corners reach the highlight band near the peaks.
pub fn calculate_colors(mesh: &mut TerrainMesh) {
    let bounds = mesh.bounds;
    let w = water_threshold(&bounds);

    for face_index in 0..mesh.faces.len() {
        let face = mesh.faces[face_index];
        let sum: Vec3 = mesh
            .face_positions(face)
            .iter()
            .map(|p| face_color(bounds.normalize(p.z), w))
            .sum();
        let color = (sum / 3.0).clamp(Vec3::ZERO, Vec3::ONE);
        for i in face {
            mesh.vertices[i as usize].color = color;
        }
    }
}
