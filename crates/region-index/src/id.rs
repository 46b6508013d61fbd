//! Case-insensitive region identities.

use std::borrow::{Borrow, Cow};
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// A region name that cannot be used as an identity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid region id {0:?}: use letters, digits and _ , ' - + /")]
pub struct InvalidRegionId(pub String);

/// Canonical (lowercased) region identity.
///
/// Hashes and compares like the lowercased `str`, so maps keyed by `RegionId`
/// can be probed with [`RegionId::canonical`] without allocating.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(Arc<str>);

impl RegionId {
    /// Validate a user-supplied name and fold it to its canonical form.
    pub fn parse(name: &str) -> Result<Self, InvalidRegionId> {
        if !is_valid(name) {
            return Err(InvalidRegionId(name.to_owned()));
        }
        Ok(Self(Arc::from(Self::canonical(name))))
    }

    /// Canonical form used for every lookup. Borrows when already lowercase.
    #[must_use]
    pub fn canonical(name: &str) -> Cow<'_, str> {
        if name.chars().any(char::is_uppercase) {
            Cow::Owned(name.to_lowercase())
        } else {
            Cow::Borrowed(name)
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ',' | '\'' | '-' | '+' | '/'))
}

impl Borrow<str> for RegionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegionId({:?})", &*self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_folds() {
        let a = RegionId::parse("Spawn").unwrap();
        let b = RegionId::parse("SPAWN").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "spawn");
    }

    #[test]
    fn canonical_borrows_lowercase() {
        assert!(matches!(RegionId::canonical("spawn"), Cow::Borrowed(_)));
        assert!(matches!(RegionId::canonical("Spawn"), Cow::Owned(_)));
    }

    #[test]
    fn rejects_bad_names() {
        assert!(RegionId::parse("").is_err());
        assert!(RegionId::parse("has space").is_err());
        assert!(RegionId::parse("semi;colon").is_err());
        assert!(RegionId::parse("__global__").is_ok());
        assert!(RegionId::parse("shop-1/north,'a'+b").is_ok());
    }

    #[test]
    fn str_lookup_matches_hash() {
        let mut set = hashbrown::HashSet::new();
        set.insert(RegionId::parse("Market").unwrap());
        assert!(set.contains("market"));
        assert!(!set.contains("Market"));
    }
}
