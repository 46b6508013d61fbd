//! Spatial partitioning for region lookups.
//!
//! Divides the x/z plane into square cells (chunk columns by default). Each
//! cell lists the keys whose bounds touch it, so a point lookup reads a single
//! cell and an area lookup reads only the cells it covers.
//!
//! Results are coarse candidates: a key is returned because its bounding box
//! touches the cell, not because its shape contains the point. Callers must
//! confirm every candidate against the exact geometry.

pub mod cell;
pub mod grid;

pub use cell::{CellId, CellRange};
pub use grid::{DEFAULT_CELL_SHIFT, DEFAULT_MAX_CELLS, SpatialGrid};
