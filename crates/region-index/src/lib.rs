//! Region index.
//!
//! Stores named volumetric claims and answers "which regions contain this
//! point" and "which regions overlap this volume" under concurrent access.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  RegionIndex<P>            parking_lot::RwLock               │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │  RegionStore   RegionId -> Arc<RegionRecord<P>>        │  │
//! │  │  all           SpatialGrid<RegionId>   every region    │  │
//! │  │  cached        SpatialGrid<RegionId>   cache == true   │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The three tables are only ever touched together while holding the write
//! lock, so a reader sees a region in all of them or in none.
//!
//! Identities are case-insensitive: `"Spawn"`, `"spawn"` and `"SPAWN"` name
//! the same region. The index never follows parent links; removing a parent
//! leaves its children (and their dangling parent id) untouched.
//!
//! # Usage
//!
//! ```
//! use region_geom::{BlockPos, Cuboid, Point};
//! use region_index::{RegionIndex, RegionRecord};
//!
//! let index = RegionIndex::new();
//! let spawn = RegionRecord::new(
//!     "Spawn",
//!     Cuboid::new(BlockPos::new(-16, 0, -16), BlockPos::new(16, 255, 16)),
//!     (),
//! )?;
//! index.add([spawn]);
//!
//! assert!(index.contains("SPAWN"));
//! assert_eq!(index.query_contains(Point::new(0.5, 64.0, 0.5)).len(), 1);
//! # Ok::<(), region_index::InvalidRegionId>(())
//! ```

mod config;
mod id;
mod index;
mod record;
mod store;

pub use config::IndexConfig;
pub use id::{InvalidRegionId, RegionId};
pub use index::RegionIndex;
pub use record::RegionRecord;
pub use store::RegionStore;
