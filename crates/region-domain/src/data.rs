//! Payload carried by each region.

use parking_lot::RwLock;

use crate::{Actor, DefaultDomain, Flags};

/// Owners, members and flags of a region.
///
/// Each part has its own lock: editing a region's members does not touch the
/// index and does not block spatial queries.
#[derive(Debug, Default)]
pub struct RegionData {
    pub owners: RwLock<DefaultDomain>,
    pub members: RwLock<DefaultDomain>,
    pub flags: RwLock<Flags>,
}

impl RegionData {
    #[must_use]
    pub fn new(owners: DefaultDomain, members: DefaultDomain, flags: Flags) -> Self {
        Self {
            owners: RwLock::new(owners),
            members: RwLock::new(members),
            flags: RwLock::new(flags),
        }
    }

    #[must_use]
    pub fn is_owner(&self, actor: &dyn Actor) -> bool {
        self.owners.read().contains(actor)
    }

    /// Owners count as members.
    #[must_use]
    pub fn is_member(&self, actor: &dyn Actor) -> bool {
        self.is_owner(actor) || self.members.read().contains(actor)
    }

    /// Whether `name` is listed as an owner by player name.
    #[must_use]
    pub fn is_owned_by_player(&self, name: &str) -> bool {
        self.owners.read().contains_player(name)
    }
}
