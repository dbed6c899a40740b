//! Session-context boundary.
//!
//! The wallet session owns the active profile and the active network
//! selection. This crate only consumes that state: the switch coordinator
//! reloads the profile after an active-network update, and the custom
//! network manager checks active identity before mutating.

use async_trait::async_trait;

use crate::models::{NetworkModel, SessionError};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait SessionHandle: Send + Sync {
    /// The currently selected network, if any.
    async fn active_network(&self) -> Option<NetworkModel>;

    /// The identifier of the current profile, if one is open.
    async fn profile_id(&self) -> Option<String>;

    /// Reloads the given profile. Resolves only once downstream consumers
    /// can assume the profile is fully reloaded.
    async fn reload_profile(&self, profile_id: &str) -> Result<(), SessionError>;
}
