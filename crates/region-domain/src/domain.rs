//! Owner and member sets.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::Actor;

/// Players and groups making up a region's owners or members.
///
/// Names are stored lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultDomain {
    #[serde(default)]
    players: BTreeSet<String>,
    #[serde(default)]
    groups: BTreeSet<String>,
}

impl DefaultDomain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_player(&mut self, name: &str) {
        self.players.insert(name.to_lowercase());
    }

    pub fn remove_player(&mut self, name: &str) -> bool {
        self.players.remove(&name.to_lowercase())
    }

    pub fn add_group(&mut self, name: &str) {
        self.groups.insert(name.to_lowercase());
    }

    pub fn remove_group(&mut self, name: &str) -> bool {
        self.groups.remove(&name.to_lowercase())
    }

    /// Add command arguments: `g:<group>` adds a group, anything else a player.
    pub fn add_names<I>(&mut self, names: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for name in names {
            match parse_group(name.as_ref()) {
                Some(group) => self.add_group(group),
                None => self.add_player(name.as_ref()),
            }
        }
    }

    /// Remove command arguments, with the same `g:` convention as [`Self::add_names`].
    pub fn remove_names<I>(&mut self, names: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for name in names {
            match parse_group(name.as_ref()) {
                Some(group) => self.remove_group(group),
                None => self.remove_player(name.as_ref()),
            };
        }
    }

    /// Whether the actor is listed by name or through one of its groups.
    #[must_use]
    pub fn contains(&self, actor: &dyn Actor) -> bool {
        self.contains_player(actor.name())
            || actor
                .groups()
                .iter()
                .any(|g| self.groups.contains(&g.to_lowercase()))
    }

    #[must_use]
    pub fn contains_player(&self, name: &str) -> bool {
        self.players.contains(&name.to_lowercase())
    }

    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(String::as_str)
    }

    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(String::as_str)
    }

    /// Number of players plus groups.
    #[must_use]
    pub fn size(&self) -> usize {
        self.players.len() + self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty() && self.groups.is_empty()
    }
}

fn parse_group(name: &str) -> Option<&str> {
    name.strip_prefix("g:")
        .or_else(|| name.strip_prefix("G:"))
        .filter(|group| !group.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Steve {
        groups: Vec<String>,
    }

    impl Actor for Steve {
        fn name(&self) -> &str {
            "Steve"
        }

        fn groups(&self) -> &[String] {
            &self.groups
        }

        fn has_permission(&self, _key: &str) -> bool {
            false
        }
    }

    #[test]
    fn names_and_groups_parse() {
        let mut domain = DefaultDomain::new();
        domain.add_names(["Alex", "g:Builders", "G:mods", "g:"]);

        assert_eq!(domain.players().collect::<Vec<_>>(), vec!["alex", "g:"]);
        assert_eq!(domain.groups().collect::<Vec<_>>(), vec!["builders", "mods"]);
        assert_eq!(domain.size(), 4);

        domain.remove_names(["ALEX", "g:builders"]);
        assert_eq!(domain.size(), 2);
    }

    #[test]
    fn contains_by_name_or_group() {
        let steve = Steve {
            groups: vec!["Builders".to_owned()],
        };

        let mut by_name = DefaultDomain::new();
        by_name.add_player("STEVE");
        assert!(by_name.contains(&steve));

        let mut by_group = DefaultDomain::new();
        by_group.add_group("builders");
        assert!(by_group.contains(&steve));

        assert!(!DefaultDomain::new().contains(&steve));
    }
}
