//! Authoritative identity table.

use std::sync::Arc;

use hashbrown::HashMap;

use crate::{RegionId, RegionRecord};

/// Maps canonical identities to stored records.
///
/// All lookups fold the given name to its canonical form first.
#[derive(Debug)]
pub struct RegionStore<P> {
    records: HashMap<RegionId, Arc<RegionRecord<P>>>,
}

impl<P> RegionStore<P> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Store a record. Returns `false` and keeps the existing entry if the identity is taken.
    pub fn put(&mut self, record: Arc<RegionRecord<P>>) -> bool {
        if self.records.contains_key(record.id()) {
            return false;
        }
        self.records.insert(record.id().clone(), record);
        true
    }

    pub fn remove(&mut self, name: &str) -> Option<Arc<RegionRecord<P>>> {
        self.records.remove(&*RegionId::canonical(name))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<RegionRecord<P>>> {
        self.records.get(&*RegionId::canonical(name))
    }

    #[must_use]
    pub fn contains_id(&self, name: &str) -> bool {
        self.records.contains_key(&*RegionId::canonical(name))
    }

    /// Whether this exact record instance is stored, not merely one with the same identity.
    #[must_use]
    pub fn contains_exact(&self, record: &Arc<RegionRecord<P>>) -> bool {
        self.records
            .get(record.id())
            .is_some_and(|stored| Arc::ptr_eq(stored, record))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Owned snapshot of every stored record.
    #[must_use]
    pub fn enumerate(&self) -> Vec<Arc<RegionRecord<P>>> {
        self.records.values().cloned().collect()
    }
}

impl<P> Default for RegionStore<P> {
    fn default() -> Self {
        Self::new()
    }
}
