//! Owner and member edits.

use region_domain::{Actor, Region, Regions};
use region_persist::RegionSink;
use tracing::{error, info};

use crate::{CommandConfig, CommandError};

/// Permission that lifts the owned-region limit for buyable claims.
const UNLIMITED: &str = "worldguard.region.unlimited";

/// The four domain-editing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainEdit {
    AddMember,
    AddOwner,
    RemoveMember,
    RemoveOwner,
}

impl DomainEdit {
    /// Resolve a command name or alias.
    #[must_use]
    pub fn parse(command: &str) -> Option<Self> {
        match command.to_lowercase().as_str() {
            "addmember" => Some(Self::AddMember),
            "addowner" => Some(Self::AddOwner),
            "removemember" | "remmember" | "removemem" | "remmem" => Some(Self::RemoveMember),
            "removeowner" | "remowner" => Some(Self::RemoveOwner),
            _ => None,
        }
    }

    /// Name used in permission nodes.
    #[must_use]
    pub const fn permission_name(self) -> &'static str {
        match self {
            Self::AddMember => "addmember",
            Self::AddOwner => "addowner",
            Self::RemoveMember => "removemember",
            Self::RemoveOwner => "removeowner",
        }
    }

    #[must_use]
    pub const fn usage(self) -> &'static str {
        match self {
            Self::AddMember => "addmember <id> <members...>",
            Self::AddOwner => "addowner <id> <owners...>",
            Self::RemoveMember => "removemember <id> <members...>",
            Self::RemoveOwner => "removeowner <id> <owners...>",
        }
    }

    fn apply(self, region: &Region, names: &[&str]) {
        let data = region.payload();
        match self {
            Self::AddMember => data.members.write().add_names(names),
            Self::AddOwner => data.owners.write().add_names(names),
            Self::RemoveMember => data.members.write().remove_names(names),
            Self::RemoveOwner => data.owners.write().remove_names(names),
        }
    }
}

/// Runs member commands against one world's regions.
pub struct MemberCommands<'a, S> {
    regions: &'a Regions,
    sink: &'a S,
    config: CommandConfig,
}

impl<'a, S: RegionSink> MemberCommands<'a, S> {
    #[must_use]
    pub const fn new(regions: &'a Regions, sink: &'a S, config: CommandConfig) -> Self {
        Self {
            regions,
            sink,
            config,
        }
    }

    /// Run a command by name. `args` excludes the command name itself.
    ///
    /// Returns the confirmation message for the issuer.
    pub fn run(&self, actor: &dyn Actor, command: &str, args: &[&str]) -> Result<String, CommandError> {
        let edit = DomainEdit::parse(command)
            .ok_or_else(|| CommandError::UnknownCommand(command.to_owned()))?;
        self.edit(actor, edit, args)
    }

    /// Apply `edit` with `args` = `<id> <names...>`.
    pub fn edit(
        &self,
        actor: &dyn Actor,
        edit: DomainEdit,
        args: &[&str],
    ) -> Result<String, CommandError> {
        let [id, names @ ..] = args else {
            return Err(CommandError::Usage(edit.usage().to_owned()));
        };
        if names.is_empty() {
            return Err(CommandError::Usage(edit.usage().to_owned()));
        }

        let region = self.regions.get(id).ok_or(CommandError::RegionNotFound)?;

        let node = self.permission_node(actor, edit, &region)?;
        if !actor.has_permission(&node) {
            return Err(CommandError::PermissionDenied(node));
        }

        edit.apply(&region, names);
        info!(
            "{} ran {} on region {} for {:?}",
            actor.name(),
            edit.permission_name(),
            region.name(),
            names
        );

        if let Err(source) = self.sink.save(&self.regions.enumerate()) {
            error!("failed to save after editing region {}: {}", region.name(), source);
            return Err(CommandError::Persist {
                region: region.name().to_owned(),
                source,
            });
        }
        Ok(format!("Region '{}' updated.", region.name()))
    }

    /// Number of regions the actor owns.
    #[must_use]
    pub fn owned_region_count(&self, actor: &dyn Actor) -> usize {
        self.regions
            .enumerate()
            .iter()
            .filter(|r| r.payload().is_owner(actor))
            .count()
    }

    fn permission_node(
        &self,
        actor: &dyn Actor,
        edit: DomainEdit,
        region: &Region,
    ) -> Result<String, CommandError> {
        let id = region.id().as_str();
        let data = region.payload();

        if edit == DomainEdit::AddOwner
            && data.flags.read().buyable()
            && data.owners.read().is_empty()
        {
            if !actor.has_permission(UNLIMITED) {
                if let Some(max) = self.config.max_region_count {
                    if self.owned_region_count(actor) >= max {
                        return Err(CommandError::RegionLimit);
                    }
                }
            }
            return Ok(format!("worldguard.region.addowner.unclaimed.{id}"));
        }

        let cmd = edit.permission_name();
        let node = if data.is_owner(actor) {
            format!("worldguard.region.{cmd}.own.{id}")
        } else if data.is_member(actor) {
            format!("worldguard.region.{cmd}.member.{id}")
        } else {
            format!("worldguard.region.{cmd}.{id}")
        };
        Ok(node)
    }
}
