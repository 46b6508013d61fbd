//! Sparse cell grid mapping cells to the keys whose bounds touch them.

use core::hash::Hash;

use hashbrown::{HashMap, HashSet};
use region_geom::{Aabb, BlockPos};
use smallvec::SmallVec;

use crate::{CellId, CellRange};

/// Default cell shift: 16-block chunk columns.
pub const DEFAULT_CELL_SHIFT: u32 = 4;

/// Default limit before a key is kept in the wide bucket instead of per cell.
pub const DEFAULT_MAX_CELLS: u64 = 4096;

/// A sparse 2D grid over the x/z plane.
///
/// Only cells touched by at least one key are allocated. Keys whose bounds
/// span more than `max_cells` cells go to a single "wide" bucket that every
/// lookup consults, so a world-sized claim costs one entry rather than
/// millions.
#[derive(Debug, Clone)]
pub struct SpatialGrid<K> {
    /// Cell edge length is `1 << shift` blocks.
    shift: u32,
    /// Cell span above which a key is stored as wide.
    max_cells: u64,
    /// Allocated cells.
    cells: HashMap<CellId, SmallVec<[K; 4]>>,
    /// Keys too large to index per cell.
    wide: Vec<K>,
}

impl<K: Clone + Eq + Hash> SpatialGrid<K> {
    /// Create an empty grid.
    #[must_use]
    pub fn new(shift: u32, max_cells: u64) -> Self {
        Self {
            shift,
            max_cells,
            cells: HashMap::new(),
            wide: Vec::new(),
        }
    }

    /// Index `key` under every cell its bounds touch.
    pub fn insert(&mut self, key: K, bounds: &Aabb) {
        let range = CellRange::covering(bounds, self.shift);
        if range.cell_count() > self.max_cells {
            self.wide.push(key);
            return;
        }

        for cell in range.iter() {
            self.cells.entry(cell).or_default().push(key.clone());
        }
    }

    /// Remove `key` from the cells its bounds touch.
    ///
    /// `bounds` must be the same bounds the key was inserted with.
    /// Returns whether the key was found.
    pub fn remove(&mut self, key: &K, bounds: &Aabb) -> bool {
        let range = CellRange::covering(bounds, self.shift);
        if range.cell_count() > self.max_cells {
            let before = self.wide.len();
            self.wide.retain(|k| k != key);
            return self.wide.len() != before;
        }

        let mut found = false;
        for cell in range.iter() {
            let Some(keys) = self.cells.get_mut(&cell) else {
                continue;
            };
            if let Some(i) = keys.iter().position(|k| k == key) {
                keys.swap_remove(i);
                found = true;
            }
            if keys.is_empty() {
                self.cells.remove(&cell);
            }
        }
        found
    }

    /// Candidates for a single block: the keys of its cell plus the wide bucket.
    pub fn query_block(&self, pos: BlockPos) -> impl Iterator<Item = &K> + '_ {
        let cell = CellId::containing(pos, self.shift);
        self.cells
            .get(&cell)
            .into_iter()
            .flatten()
            .chain(self.wide.iter())
    }

    /// Candidates for an area, deduplicated across cells.
    #[must_use]
    pub fn query_bounds(&self, bounds: &Aabb) -> HashSet<&K> {
        let range = CellRange::covering(bounds, self.shift);
        let mut out: HashSet<&K> = self.wide.iter().collect();

        // Walk whichever side is smaller: the requested range or the allocated cells.
        if range.cell_count() <= self.cells.len() as u64 {
            for cell in range.iter() {
                if let Some(keys) = self.cells.get(&cell) {
                    out.extend(keys.iter());
                }
            }
        } else {
            for (cell, keys) in &self.cells {
                if range.contains(*cell) {
                    out.extend(keys.iter());
                }
            }
        }
        out
    }

    /// Number of allocated cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of keys in the wide bucket.
    #[must_use]
    pub fn wide_count(&self) -> usize {
        self.wide.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() && self.wide.is_empty()
    }
}

impl<K: Clone + Eq + Hash> Default for SpatialGrid<K> {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SHIFT, DEFAULT_MAX_CELLS)
    }
}
