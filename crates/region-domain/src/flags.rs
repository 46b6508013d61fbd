//! Flag storage. Values are kept, not evaluated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Flag marking a region as claimable by whoever becomes its first owner.
pub const BUYABLE: &str = "buyable";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

/// Flags set on a region, by lowercased name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flags(BTreeMap<String, FlagValue>);

impl Flags {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a flag, returning the previous value.
    pub fn set(&mut self, name: &str, value: FlagValue) -> Option<FlagValue> {
        self.0.insert(name.to_lowercase(), value)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FlagValue> {
        self.0.get(&name.to_lowercase())
    }

    pub fn remove(&mut self, name: &str) -> Option<FlagValue> {
        self.0.remove(&name.to_lowercase())
    }

    /// Whether the `buyable` flag is set to true.
    #[must_use]
    pub fn buyable(&self) -> bool {
        matches!(self.get(BUYABLE), Some(FlagValue::Bool(true)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FlagValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buyable_needs_true() {
        let mut flags = Flags::new();
        assert!(!flags.buyable());
        flags.set("Buyable", FlagValue::Bool(false));
        assert!(!flags.buyable());
        flags.set("buyable", FlagValue::Bool(true));
        assert!(flags.buyable());
        assert_eq!(flags.len(), 1);
    }

    #[test]
    fn untagged_json() {
        let mut flags = Flags::new();
        flags.set("greeting", FlagValue::Str("hi".to_owned()));
        flags.set("pvp", FlagValue::Bool(false));
        flags.set("heal-amount", FlagValue::Int(2));

        let json = serde_json::to_string(&flags).unwrap();
        assert_eq!(json, r#"{"greeting":"hi","heal-amount":2,"pvp":false}"#);
        assert_eq!(serde_json::from_str::<Flags>(&json).unwrap(), flags);
    }
}
