//! Spatial cells.

use region_geom::{Aabb, BlockPos};

/// Cell coordinates: block coordinates shifted right by the cell shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellId {
    pub x: i32,
    pub z: i32,
}

impl CellId {
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The cell holding a block. Arithmetic shift floors towards negative infinity.
    #[must_use]
    pub const fn containing(pos: BlockPos, shift: u32) -> Self {
        Self {
            x: pos.x >> shift,
            z: pos.z >> shift,
        }
    }
}

/// An inclusive rectangle of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRange {
    pub min: CellId,
    pub max: CellId,
}

impl CellRange {
    /// Cells touched by the footprint of `bounds`.
    #[must_use]
    pub const fn covering(bounds: &Aabb, shift: u32) -> Self {
        Self {
            min: CellId::containing(bounds.min, shift),
            max: CellId::containing(bounds.max, shift),
        }
    }

    /// Number of cells in the range, saturating at `u64::MAX`.
    #[must_use]
    pub fn cell_count(&self) -> u64 {
        let w = (i64::from(self.max.x) - i64::from(self.min.x) + 1) as u64;
        let h = (i64::from(self.max.z) - i64::from(self.min.z) + 1) as u64;
        w.saturating_mul(h)
    }

    #[must_use]
    pub const fn contains(&self, cell: CellId) -> bool {
        cell.x >= self.min.x && cell.x <= self.max.x && cell.z >= self.min.z && cell.z <= self.max.z
    }

    pub fn iter(&self) -> impl Iterator<Item = CellId> {
        let (min, max) = (self.min, self.max);
        (min.z..=max.z).flat_map(move |z| (min.x..=max.x).map(move |x| CellId::new(x, z)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_blocks_floor() {
        assert_eq!(CellId::containing(BlockPos::new(0, 0, 15), 4), CellId::new(0, 0));
        assert_eq!(CellId::containing(BlockPos::new(16, 0, 0), 4), CellId::new(1, 0));
        assert_eq!(CellId::containing(BlockPos::new(-1, 0, -16), 4), CellId::new(-1, -1));
        assert_eq!(CellId::containing(BlockPos::new(-17, 0, 0), 4), CellId::new(-2, 0));
    }

    #[test]
    fn range_covers_footprint() {
        let bounds = Aabb::new(BlockPos::new(-1, 0, 0), BlockPos::new(16, 255, 15));
        let range = CellRange::covering(&bounds, 4);
        assert_eq!(range.min, CellId::new(-1, 0));
        assert_eq!(range.max, CellId::new(1, 0));
        assert_eq!(range.cell_count(), 3);
        assert!(range.contains(CellId::new(0, 0)));
        assert!(!range.contains(CellId::new(0, 1)));

        let cells: Vec<_> = range.iter().collect();
        assert_eq!(
            cells,
            vec![CellId::new(-1, 0), CellId::new(0, 0), CellId::new(1, 0)]
        );
    }

    #[test]
    fn full_range_count_saturates() {
        let world = Aabb::new(
            BlockPos::new(i32::MIN, 0, i32::MIN),
            BlockPos::new(i32::MAX, 10, i32::MAX),
        );
        assert_eq!(CellRange::covering(&world, 0).cell_count(), u64::MAX);
        assert_eq!(CellRange::covering(&world, 16).cell_count(), 1 << 32);
    }
}
