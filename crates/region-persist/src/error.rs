//! Persistence error types.

use thiserror::Error;

/// Persistence failed. The display text is meant for the command issuer.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Reading or writing the backing file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document could not be encoded or decoded.
    #[error("malformed region data: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored region has unusable geometry.
    #[error("region {id:?}: {source}")]
    Geometry {
        id: String,
        source: region_geom::GeometryError,
    },

    /// A stored region has an unusable id.
    #[error(transparent)]
    InvalidId(#[from] region_index::InvalidRegionId),
}

/// Result type for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;
