//! Geometry error types.

use thiserror::Error;

/// Reasons a shape cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Polygon has fewer than three vertices.
    #[error("polygon needs at least 3 points, got {0}")]
    TooFewPoints(usize),

    /// Polygon vertices are collinear or repeated, enclosing no area.
    #[error("polygon encloses no area")]
    ZeroArea,
}
