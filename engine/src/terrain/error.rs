//! Terrain Errors
//!
//! Configuration problems are reported when a terrain is built. Numeric
//! degeneracies (zero-length normals) are recovered inside the passes and
//! never surface here.

/// Errors that can occur while configuring or building a terrain.
#[derive(Debug)]
pub enum TerrainError {
    /// Grid resolution must be at least one cell per side.
    InvalidResolution(u32),
    /// The rectangle collapses (or inverts) along one axis.
    DegenerateBounds { axis: char, min: f32, max: f32 },
    /// Sculpting parameters are unusable (e.g. non-finite delta).
    InvalidSculpt(String),
    /// Standard I/O error while reading a config or writing a dump.
    Io(std::io::Error),
    /// JSON serialization/deserialization error.
    Json(serde_json::Error),
}

impl std::fmt::Display for TerrainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerrainError::InvalidResolution(div) => {
                write!(f, "invalid grid resolution {div} (must be >= 1)")
            }
            TerrainError::DegenerateBounds { axis, min, max } => {
                write!(f, "degenerate {axis} bounds: max {max} must exceed min {min}")
            }
            TerrainError::InvalidSculpt(msg) => write!(f, "invalid sculpt parameters: {msg}"),
            TerrainError::Io(e) => write!(f, "IO error: {e}"),
            TerrainError::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for TerrainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TerrainError::Io(e) => Some(e),
            TerrainError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TerrainError {
    fn from(e: std::io::Error) -> Self {
        TerrainError::Io(e)
    }
}

impl From<serde_json::Error> for TerrainError {
    fn from(e: serde_json::Error) -> Self {
        TerrainError::Json(e)
    }
}
