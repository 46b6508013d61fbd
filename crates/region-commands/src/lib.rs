//! Region member commands.
//!
//! Handlers for `addmember`, `addowner`, `removemember` and `removeowner`.
//! Each one looks the region up in the index, checks the issuer's permission
//! node, edits the region's owner or member domain and saves every region
//! through a [`RegionSink`](region_persist::RegionSink).
//!
//! Permission nodes depend on the issuer's relation to the region:
//!
//! ```text
//! worldguard.region.<command>.own.<id>      issuer owns the region
//! worldguard.region.<command>.member.<id>   issuer is a member
//! worldguard.region.<command>.<id>          anyone else
//! worldguard.region.addowner.unclaimed.<id> first owner of a buyable region
//! ```

mod config;
mod error;
mod member;

pub use config::CommandConfig;
pub use error::CommandError;
pub use member::{DomainEdit, MemberCommands};
pub use region_domain::Actor;
