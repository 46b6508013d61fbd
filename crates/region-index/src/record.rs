//! Stored region entries.

use region_geom::Geometry;

use crate::{InvalidRegionId, RegionId};

/// A named claim as held by the index.
///
/// The index reads `id`, `geometry` and `cache` when the record is added and
/// treats them as fixed while it is stored; to change the shape, remove the
/// record and add a new one. `payload` is never inspected by the index.
#[derive(Debug)]
pub struct RegionRecord<P> {
    /// Canonical identity.
    id: RegionId,
    /// Name as the user typed it.
    name: String,
    geometry: Geometry,
    /// Identity of the parent region. Not resolved or validated by the index.
    parent: Option<String>,
    /// Whether the region joins the cached subset.
    cache: bool,
    payload: P,
}

impl<P> RegionRecord<P> {
    /// Create a record with no parent that is not cached.
    pub fn new(
        name: &str,
        geometry: impl Into<Geometry>,
        payload: P,
    ) -> Result<Self, InvalidRegionId> {
        Ok(Self {
            id: RegionId::parse(name)?,
            name: name.to_owned(),
            geometry: geometry.into(),
            parent: None,
            cache: false,
            payload,
        })
    }

    /// Set the parent identity.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Opt in or out of the cached subset.
    #[must_use]
    pub fn cached(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }

    #[must_use]
    pub const fn id(&self) -> &RegionId {
        &self.id
    }

    /// Case-preserved name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    #[must_use]
    pub const fn should_cache(&self) -> bool {
        self.cache
    }

    #[must_use]
    pub const fn payload(&self) -> &P {
        &self.payload
    }
}
