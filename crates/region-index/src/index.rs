//! The region index facade.

use core::borrow::Borrow;
use std::sync::Arc;

use parking_lot::RwLock;
use region_geom::{BlockPos, Geometry, Point};
use region_spatial::SpatialGrid;
use tracing::{debug, trace};

use crate::{IndexConfig, RegionId, RegionRecord, RegionStore};

/// Store plus both grids. Only mutated as a unit under the write lock.
struct IndexState<P> {
    config: IndexConfig,
    store: RegionStore<P>,
    /// Every stored region.
    all: SpatialGrid<RegionId>,
    /// Regions with `should_cache()` set.
    cached: SpatialGrid<RegionId>,
}

impl<P> IndexState<P> {
    fn new(config: IndexConfig) -> Self {
        Self {
            config,
            store: RegionStore::new(),
            all: SpatialGrid::new(config.cell_shift, config.max_cells_per_region),
            cached: SpatialGrid::new(config.cell_shift, config.max_cells_per_region),
        }
    }

    fn insert(&mut self, record: Arc<RegionRecord<P>>) -> bool {
        let id = record.id().clone();
        let bounds = record.geometry().bounds();
        let cache = record.should_cache();

        if !self.store.put(record) {
            return false;
        }
        if cache {
            self.cached.insert(id.clone(), &bounds);
        }
        self.all.insert(id, &bounds);
        true
    }

    fn remove(&mut self, name: &str) -> Option<Arc<RegionRecord<P>>> {
        let record = self.store.remove(name)?;
        let bounds = record.geometry().bounds();

        self.all.remove(record.id(), &bounds);
        if record.should_cache() {
            self.cached.remove(record.id(), &bounds);
        }
        Some(record)
    }

    fn grid(&self, prefer_only_cached: bool) -> &SpatialGrid<RegionId> {
        if prefer_only_cached {
            &self.cached
        } else {
            &self.all
        }
    }

    /// Resolve a grid key. Grid and store never disagree while the lock is held.
    fn resolve(&self, id: &RegionId) -> Option<&Arc<RegionRecord<P>>> {
        self.store.get(id.as_str())
    }
}

/// Thread-safe index of regions with spatial lookups.
///
/// Readers (`query_*`, `get*`, `contains*`, `len`) share a read lock and run
/// concurrently. Each mutating call (`add`, `remove`, `remove_matching`,
/// `rebuild`) holds the write lock for the whole batch, so readers observe
/// either none or all of a call's changes.
///
/// Nothing here treats absence or duplication as an error: unknown ids give
/// `None`/`false`, repeated adds and unknown removes are no-ops.
pub struct RegionIndex<P> {
    state: RwLock<IndexState<P>>,
}

impl<P> RegionIndex<P> {
    /// Create an empty index with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    #[must_use]
    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            state: RwLock::new(IndexState::new(config.normalized())),
        }
    }

    #[must_use]
    pub fn config(&self) -> IndexConfig {
        self.state.read().config
    }

    // ==================== Spatial Queries ====================

    /// Regions whose geometry contains `point`, searching every region.
    #[must_use]
    pub fn query_contains(&self, point: Point) -> Vec<Arc<RegionRecord<P>>> {
        self.query_contains_with(point, false)
    }

    /// Regions whose geometry contains `point`.
    ///
    /// With `prefer_only_cached`, only regions that opted into the cache are
    /// searched; matching regions outside the cache are then missed.
    #[must_use]
    pub fn query_contains_with(
        &self,
        point: Point,
        prefer_only_cached: bool,
    ) -> Vec<Arc<RegionRecord<P>>> {
        let pos = BlockPos::from_point(point);
        let state = self.state.read();

        let hits: Vec<_> = state
            .grid(prefer_only_cached)
            .query_block(pos)
            .filter_map(|id| state.resolve(id))
            .filter(|record| record.geometry().contains_block(pos))
            .cloned()
            .collect();

        trace!(?pos, prefer_only_cached, hits = hits.len(), "contains query");
        hits
    }

    /// Regions overlapping `region`, searching every region.
    ///
    /// A stored region overlaps itself, so querying with a stored record
    /// includes that record.
    #[must_use]
    pub fn query_overlapping<Q>(&self, region: &RegionRecord<Q>) -> Vec<Arc<RegionRecord<P>>> {
        self.query_overlapping_geometry(region.geometry(), false)
    }

    /// Regions overlapping `region`, optionally restricted to the cache.
    #[must_use]
    pub fn query_overlapping_with<Q>(
        &self,
        region: &RegionRecord<Q>,
        prefer_only_cached: bool,
    ) -> Vec<Arc<RegionRecord<P>>> {
        self.query_overlapping_geometry(region.geometry(), prefer_only_cached)
    }

    /// Regions whose geometry overlaps `geometry`.
    #[must_use]
    pub fn query_overlapping_geometry(
        &self,
        geometry: &Geometry,
        prefer_only_cached: bool,
    ) -> Vec<Arc<RegionRecord<P>>> {
        let bounds = geometry.bounds();
        let state = self.state.read();

        let hits: Vec<_> = state
            .grid(prefer_only_cached)
            .query_bounds(&bounds)
            .into_iter()
            .filter_map(|id| state.resolve(id))
            .filter(|record| record.geometry().overlaps(geometry))
            .cloned()
            .collect();

        trace!(?bounds, prefer_only_cached, hits = hits.len(), "overlap query");
        hits
    }

    // ==================== Mutation ====================

    /// Add regions. A region whose identity is already present (in any case)
    /// is skipped; the rest of the batch is still added. Parents are not
    /// added or checked.
    pub fn add<I>(&self, records: I)
    where
        I: IntoIterator,
        I::Item: Into<Arc<RegionRecord<P>>>,
    {
        let mut state = self.state.write();
        for record in records {
            let record = record.into();
            let name = record.name().to_owned();
            if !state.insert(record) {
                debug!(region = %name, "skipping add of region already in index");
            }
        }
    }

    /// Remove regions by identity, in any case. Unknown ids are ignored.
    /// Children of a removed region keep their parent id.
    pub fn remove<I>(&self, names: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut state = self.state.write();
        for name in names {
            let name = name.as_ref();
            if state.remove(name).is_none() {
                debug!(region = name, "ignoring remove of unknown region");
            }
        }
    }

    /// Remove regions sharing an identity with the given records, whether or
    /// not they are the stored instances.
    pub fn remove_matching<I, R>(&self, records: I)
    where
        I: IntoIterator<Item = R>,
        R: Borrow<RegionRecord<P>>,
    {
        let mut state = self.state.write();
        for record in records {
            let record = record.borrow();
            if state.remove(record.id().as_str()).is_none() {
                debug!(region = record.name(), "ignoring remove of unknown region");
            }
        }
    }

    /// Rebuild both grids from the store, optionally under a new configuration.
    pub fn rebuild(&self, config: Option<IndexConfig>) {
        let mut state = self.state.write();
        let config = config.map_or(state.config, IndexConfig::normalized);
        let records = state.store.enumerate();

        let mut fresh = IndexState::new(config);
        for record in records {
            fresh.insert(record);
        }
        debug!(
            regions = fresh.store.len(),
            cells = fresh.all.cell_count(),
            cached_cells = fresh.cached.cell_count(),
            "rebuilt region index"
        );
        *state = fresh;
    }

    // ==================== Lookup ====================

    /// Stored region with the given identity, in any case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<RegionRecord<P>>> {
        self.state.read().store.get(name).cloned()
    }

    /// Stored region with the same identity as `region`. The result need not
    /// be the same instance.
    #[must_use]
    pub fn get_matching<Q>(&self, region: &RegionRecord<Q>) -> Option<Arc<RegionRecord<P>>> {
        self.get(region.id().as_str())
    }

    /// Parent of `region`, resolved now. `None` when unset or not in the index.
    #[must_use]
    pub fn parent_of<Q>(&self, region: &RegionRecord<Q>) -> Option<Arc<RegionRecord<P>>> {
        self.get(region.parent()?)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.state.read().store.contains_id(name)
    }

    #[must_use]
    pub fn contains_matching<Q>(&self, region: &RegionRecord<Q>) -> bool {
        self.contains(region.id().as_str())
    }

    /// Whether this exact instance is stored.
    #[must_use]
    pub fn contains_exact(&self, region: &Arc<RegionRecord<P>>) -> bool {
        self.state.read().store.contains_exact(region)
    }

    /// Number of stored regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.read().store.is_empty()
    }

    /// Snapshot of every stored region.
    #[must_use]
    pub fn enumerate(&self) -> Vec<Arc<RegionRecord<P>>> {
        self.state.read().store.enumerate()
    }
}

impl<P> Default for RegionIndex<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use region_geom::Cuboid;

    use super::*;

    fn cuboid(name: &str, a: (i32, i32, i32), b: (i32, i32, i32)) -> RegionRecord<()> {
        let shape = Cuboid::new(BlockPos::new(a.0, a.1, a.2), BlockPos::new(b.0, b.1, b.2));
        RegionRecord::new(name, shape, ()).unwrap()
    }

    fn names(records: &[Arc<RegionRecord<()>>]) -> Vec<String> {
        let mut names: Vec<_> = records.iter().map(|r| r.id().to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn duplicate_in_batch_keeps_first() {
        let index = RegionIndex::new();
        index.add([
            cuboid("a", (0, 0, 0), (5, 5, 5)),
            cuboid("A", (100, 0, 100), (105, 5, 105)),
            cuboid("b", (10, 0, 10), (15, 5, 15)),
        ]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.query_contains(Point::new(1.0, 1.0, 1.0)).len(), 1);
        assert!(index.query_contains(Point::new(101.0, 1.0, 101.0)).is_empty());
    }

    #[test]
    fn remove_clears_both_grids() {
        let index = RegionIndex::new();
        index.add([cuboid("a", (0, 0, 0), (5, 5, 5)).cached(true)]);
        let p = Point::new(2.0, 2.0, 2.0);
        assert_eq!(index.query_contains_with(p, true).len(), 1);

        index.remove(["A"]);
        assert!(index.query_contains_with(p, true).is_empty());
        assert!(index.query_contains(p).is_empty());

        let state = index.state.read();
        assert!(state.all.is_empty());
        assert!(state.cached.is_empty());
    }

    #[test]
    fn remove_matching_uses_identity_only() {
        let index = RegionIndex::new();
        index.add([cuboid("shop", (0, 0, 0), (5, 5, 5))]);

        // Different geometry, same id
        let other = cuboid("SHOP", (50, 0, 50), (60, 5, 60));
        assert!(index.contains_matching(&other));
        assert!(index.get_matching(&other).is_some());

        index.remove_matching([&other]);
        assert!(index.is_empty());
    }

    #[test]
    fn exact_instance_check() {
        let index = RegionIndex::new();
        let stored = Arc::new(cuboid("shop", (0, 0, 0), (5, 5, 5)));
        let twin = Arc::new(cuboid("shop", (0, 0, 0), (5, 5, 5)));
        index.add([Arc::clone(&stored)]);

        assert!(index.contains_exact(&stored));
        assert!(!index.contains_exact(&twin));
        assert!(index.contains_matching(&twin));
    }

    #[test]
    fn parent_is_resolved_lazily() {
        let index = RegionIndex::new();
        let child = Arc::new(cuboid("child", (2, 2, 2), (5, 5, 5)).with_parent("Parent"));
        index.add([Arc::clone(&child)]);

        // Dangling parent is tolerated
        assert!(index.parent_of(&child).is_none());

        index.add([cuboid("parent", (0, 0, 0), (10, 10, 10))]);
        assert_eq!(index.parent_of(&child).unwrap().id().as_str(), "parent");

        index.remove(["parent"]);
        assert!(index.contains("child"));
        assert_eq!(child.parent(), Some("Parent"));
    }

    #[test]
    fn overlap_query_filters_coarse_candidates() {
        let index = RegionIndex::new();
        index.add([
            cuboid("a", (0, 0, 0), (3, 3, 3)),
            // Same cell as `a`, not touching it
            cuboid("b", (8, 0, 8), (10, 3, 10)),
        ]);
        let area = cuboid("area", (2, 0, 2), (4, 1, 4));
        assert_eq!(names(&index.query_overlapping(&area)), vec!["a"]);
    }

    #[test]
    fn rebuild_with_new_config_keeps_results() {
        let index = RegionIndex::new();
        index.add([
            cuboid("small", (0, 0, 0), (3, 3, 3)).cached(true),
            cuboid("big", (-5000, 0, -5000), (5000, 255, 5000)),
        ]);
        let p = Point::new(1.0, 1.0, 1.0);
        assert_eq!(names(&index.query_contains(p)), vec!["big", "small"]);

        index.rebuild(Some(IndexConfig {
            cell_shift: 6,
            max_cells_per_region: 8,
        }));
        assert_eq!(index.config().cell_shift, 6);
        assert_eq!(names(&index.query_contains(p)), vec!["big", "small"]);
        assert_eq!(names(&index.query_contains_with(p, true)), vec!["small"]);

        let state = index.state.read();
        assert_eq!(state.all.wide_count(), 1);
    }

    #[test]
    fn full_range_region_at_block_cells() {
        let index = RegionIndex::with_config(IndexConfig {
            cell_shift: 0,
            max_cells_per_region: u64::MAX,
        });
        index.add([
            cuboid("world", (i32::MIN, 0, i32::MIN), (i32::MAX, 10, i32::MAX)),
            cuboid("home", (0, 0, 0), (3, 3, 3)),
        ]);

        let p = Point::new(1.0, 1.0, 1.0);
        assert_eq!(names(&index.query_contains(p)), vec!["home", "world"]);
        assert_eq!(names(&index.query_contains(Point::new(-2e9, 5.0, 2e9))), vec!["world"]);
        {
            let state = index.state.read();
            assert_eq!(state.all.wide_count(), 1);
        }

        index.remove(["world"]);
        assert_eq!(names(&index.query_contains(p)), vec!["home"]);
    }
}
