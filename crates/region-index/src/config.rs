//! Index tuning.

use region_spatial::{DEFAULT_CELL_SHIFT, DEFAULT_MAX_CELLS};

/// Largest accepted cell shift (cells of 16M blocks).
const MAX_CELL_SHIFT: u32 = 24;

/// Largest accepted per-region cell span before a region goes wide.
const MAX_CELLS_LIMIT: u64 = 1 << 20;

/// Configuration for a [`RegionIndex`](crate::RegionIndex).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexConfig {
    /// Cell edge length is `1 << cell_shift` blocks (default: 4, one chunk)
    pub cell_shift: u32,
    /// Regions spanning more cells than this are kept in the wide bucket
    pub max_cells_per_region: u64,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            cell_shift: DEFAULT_CELL_SHIFT,
            max_cells_per_region: DEFAULT_MAX_CELLS,
        }
    }
}

impl IndexConfig {
    /// Defaults overridden by `REGION_CELL_SHIFT` and `REGION_MAX_CELLS`.
    ///
    /// Unparseable values fall back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let cell_shift: u32 = std::env::var("REGION_CELL_SHIFT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.cell_shift);

        let max_cells_per_region: u64 = std::env::var("REGION_MAX_CELLS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_cells_per_region);

        Self {
            cell_shift,
            max_cells_per_region,
        }
        .normalized()
    }

    /// Clamp the cell shift and the per-region cell span into the supported range.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            cell_shift: self.cell_shift.min(MAX_CELL_SHIFT),
            max_cells_per_region: self.max_cells_per_region.min(MAX_CELLS_LIMIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_chunk() {
        let config = IndexConfig::default();
        assert_eq!(1 << config.cell_shift, 16);
    }

    #[test]
    fn shift_is_clamped() {
        let config = IndexConfig {
            cell_shift: 40,
            max_cells_per_region: 1,
        }
        .normalized();
        assert_eq!(config.cell_shift, MAX_CELL_SHIFT);
        assert_eq!(config.max_cells_per_region, 1);
    }

    #[test]
    fn cell_span_is_clamped() {
        let config = IndexConfig {
            cell_shift: 0,
            max_cells_per_region: u64::MAX,
        }
        .normalized();
        assert_eq!(config.cell_shift, 0);
        assert_eq!(config.max_cells_per_region, MAX_CELLS_LIMIT);
    }
}
