//! Region ownership, membership and flags.
//!
//! The index stores [`RegionData`] as an opaque payload. Everything here is
//! mutated by command handlers through the payload's own locks, never
//! through the index.

mod actor;
mod data;
mod domain;
mod flags;

pub use actor::Actor;
pub use data::RegionData;
pub use domain::DefaultDomain;
pub use flags::{BUYABLE, FlagValue, Flags};

/// A region claim carrying domain and flag data.
pub type Region = region_index::RegionRecord<RegionData>;

/// An index of [`Region`]s.
pub type Regions = region_index::RegionIndex<RegionData>;
