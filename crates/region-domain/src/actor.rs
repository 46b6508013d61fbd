//! Identity-checked actors.

/// Something that issues region commands: a player or the console.
pub trait Actor {
    /// Player name, compared case-insensitively.
    fn name(&self) -> &str;

    /// Permission groups the actor belongs to.
    fn groups(&self) -> &[String];

    /// Whether the actor holds a permission node.
    fn has_permission(&self, key: &str) -> bool;
}
