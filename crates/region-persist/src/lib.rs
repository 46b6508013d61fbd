//! Region persistence.
//!
//! The index keeps regions in memory only. A [`RegionSink`] writes the full
//! enumerated set somewhere durable and reads it back at startup. Saving
//! never touches the in-memory index, so a failed save leaves it intact.

mod doc;
mod error;
mod json;

use std::sync::Arc;

use region_domain::Region;

pub use error::{PersistError, PersistResult};
pub use json::JsonFileSink;

/// Durable storage for a full set of regions.
pub trait RegionSink {
    /// Replace the stored set with `regions`.
    fn save(&self, regions: &[Arc<Region>]) -> PersistResult<()>;

    /// Read back every stored region.
    fn load(&self) -> PersistResult<Vec<Region>>;
}
