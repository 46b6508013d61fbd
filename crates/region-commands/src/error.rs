//! Command error types.

use region_persist::PersistError;
use thiserror::Error;

/// Why a command was refused or failed. Display text is shown to the issuer.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Too few arguments. Usage: {0}")]
    Usage(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Could not find a region by that ID.")]
    RegionNotFound,

    /// Carries the permission node that was missing.
    #[error("You don't have permission.")]
    PermissionDenied(String),

    #[error("You already own the maximum allowed amount of regions.")]
    RegionLimit,

    /// The edit was applied in memory but saving it failed.
    #[error("Region '{region}' updated. Failed to write regions: {source}")]
    Persist {
        region: String,
        #[source]
        source: PersistError,
    },
}
