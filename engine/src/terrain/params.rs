//! Terrain Parameters
//!
//! Configurable parameters for fault-line terrain generation. A config can be
//! built in code (starting from `Default`) or loaded from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::TerrainError;
use super::grid::grid_counts;

/// Fraction of the height range below which ground is flattened into water
pub const WATER_FRACTION: f32 = 0.25;

/// Rectangular XY domain covered by the grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl TerrainBounds {
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn depth(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Reject empty, inverted or non-finite rectangles.
    pub fn validate(&self) -> Result<(), TerrainError> {
        // `!(max > min)` also catches NaN
        if !(self.max_x > self.min_x) || !self.width().is_finite() {
            return Err(TerrainError::DegenerateBounds {
                axis: 'x',
                min: self.min_x,
                max: self.max_x,
            });
        }
        if !(self.max_y > self.min_y) || !self.depth().is_finite() {
            return Err(TerrainError::DegenerateBounds {
                axis: 'y',
                min: self.min_y,
                max: self.max_y,
            });
        }
        Ok(())
    }
}

impl Default for TerrainBounds {
    fn default() -> Self {
        Self::new(-1.0, 1.0, -1.0, 1.0)
    }
}

/// Fault-line sculpting parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SculptParams {
    /// Number of random fault lines to apply
    pub iterations: u32,
    /// Height change per fault on each side of the line
    pub delta: f32,
}

impl Default for SculptParams {
    fn default() -> Self {
        Self {
            iterations: 200,
            delta: 0.005,
        }
    }
}

/// Complete configuration for one terrain instance.
///
/// Missing JSON fields fall back to the `Default` values, so a config file
/// only needs to list what it changes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Grid cells per side (the grid has `resolution + 1` vertices per side)
    pub resolution: u32,
    pub bounds: TerrainBounds,
    pub sculpt: SculptParams,
    /// Seed for the default generator used by `TerrainMesh::generate`
    pub seed: u32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            resolution: 64,
            bounds: TerrainBounds::default(),
            sculpt: SculptParams::default(),
            seed: 1,
        }
    }
}

impl TerrainConfig {
    /// Check every field before any geometry is allocated.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if grid_counts(self.resolution).is_none() {
            return Err(TerrainError::InvalidResolution(self.resolution));
        }
        self.bounds.validate()?;
        if !self.sculpt.delta.is_finite() {
            return Err(TerrainError::InvalidSculpt(format!(
                "delta must be finite, got {}",
                self.sculpt.delta
            )));
        }
        Ok(())
    }

    /// Parse and validate a config from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, TerrainError> {
        let config: TerrainConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, TerrainError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, TerrainError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TerrainConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sculpt.iterations, 200);
        assert_eq!(config.sculpt.delta, 0.005);
    }

    #[test]
    fn test_zero_resolution_rejected() {
        let config = TerrainConfig {
            resolution: 0,
            ..TerrainConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TerrainError::InvalidResolution(0))
        ));
    }

    #[test]
    fn test_oversized_resolution_rejected() {
        let result = TerrainConfig::from_json_str(r#"{ "resolution": 65536 }"#);
        assert!(matches!(result, Err(TerrainError::InvalidResolution(65536))));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let bounds = TerrainBounds::new(1.0, -1.0, -1.0, 1.0);
        assert!(matches!(
            bounds.validate(),
            Err(TerrainError::DegenerateBounds { axis: 'x', .. })
        ));

        let bounds = TerrainBounds::new(-1.0, 1.0, 2.0, 2.0);
        assert!(matches!(
            bounds.validate(),
            Err(TerrainError::DegenerateBounds { axis: 'y', .. })
        ));
    }

    #[test]
    fn test_nan_bounds_rejected() {
        let bounds = TerrainBounds::new(f32::NAN, 1.0, -1.0, 1.0);
        assert!(bounds.validate().is_err());
    }

    #[test]
    fn test_non_finite_delta_rejected() {
        let config = TerrainConfig {
            sculpt: SculptParams {
                iterations: 10,
                delta: f32::INFINITY,
            },
            ..TerrainConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TerrainError::InvalidSculpt(_))
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = TerrainConfig::from_json_str(r#"{ "resolution": 8, "seed": 99 }"#).unwrap();
        assert_eq!(config.resolution, 8);
        assert_eq!(config.seed, 99);
        assert_eq!(config.bounds, TerrainBounds::default());
        assert_eq!(config.sculpt, SculptParams::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = TerrainConfig {
            resolution: 12,
            bounds: TerrainBounds::new(0.0, 4.0, -2.0, 2.0),
            sculpt: SculptParams {
                iterations: 50,
                delta: 0.01,
            },
            seed: 7,
        };
        let json = config.to_json_string().unwrap();
        let parsed = TerrainConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_invalid_json_config_rejected() {
        let result = TerrainConfig::from_json_str(r#"{ "resolution": 0 }"#);
        assert!(matches!(result, Err(TerrainError::InvalidResolution(0))));

        let result = TerrainConfig::from_json_str("not json");
        assert!(matches!(result, Err(TerrainError::Json(_))));
    }
}
