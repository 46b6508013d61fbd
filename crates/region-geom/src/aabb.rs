//! Axis-aligned bounding boxes in block space.

use crate::{BlockPos, Column};

/// An inclusive axis-aligned box of blocks.
///
/// `min` is component-wise less than or equal to `max`; every constructor
/// normalizes its corners.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug)]
pub struct Aabb {
    pub min: BlockPos,
    pub max: BlockPos,
}

impl Aabb {
    /// Box spanned by two opposite corners, in any order.
    #[must_use]
    pub fn new(a: BlockPos, b: BlockPos) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    #[must_use]
    pub const fn contains(&self, pos: BlockPos) -> bool {
        pos.x >= self.min.x
            && pos.x <= self.max.x
            && pos.y >= self.min.y
            && pos.y <= self.max.y
            && pos.z >= self.min.z
            && pos.z <= self.max.z
    }

    /// Whether a column lies within the x/z footprint.
    #[must_use]
    pub const fn contains_column(&self, column: Column) -> bool {
        column.x >= self.min.x
            && column.x <= self.max.x
            && column.z >= self.min.z
            && column.z <= self.max.z
    }

    #[must_use]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
            && self.min.z <= other.max.z
            && other.min.z <= self.max.z
    }

    /// Number of blocks covered.
    #[must_use]
    pub fn volume(&self) -> u128 {
        let span = |lo: i32, hi: i32| (i64::from(hi) - i64::from(lo) + 1) as u128;
        span(self.min.x, self.max.x) * span(self.min.y, self.max.y) * span(self.min.z, self.max.z)
    }

    /// Footprint corners in winding order.
    #[must_use]
    pub const fn corners(&self) -> [Column; 4] {
        [
            Column::new(self.min.x, self.min.z),
            Column::new(self.max.x, self.min.z),
            Column::new(self.max.x, self.max.z),
            Column::new(self.min.x, self.max.z),
        ]
    }
}
