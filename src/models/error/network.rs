use thiserror::Error;

use crate::models::{ApiVersion, SessionError};

/// Errors surfaced by the registry query surface and the custom-network
/// lifecycle.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// A query required an active network and none is selected.
    #[error("No active network")]
    NoActiveNetwork,

    /// The active network's API version does not support the operation.
    /// Fee-statistics detail requires v2.
    #[error("Operation not supported by {0} networks")]
    UnsupportedApiVersion(ApiVersion),

    #[error("A network with id {0} already exists")]
    DuplicateNetworkId(String),

    #[error("A network named {0} already exists")]
    DuplicateNetworkName(String),

    /// Custom network ids are never reused after removal within a process
    /// lifetime.
    #[error("Network id {0} was removed and cannot be reused")]
    RetiredNetworkId(String),

    /// Removing the currently active network is rejected; the caller must
    /// switch networks first.
    #[error("Network {0} is the active network and cannot be removed")]
    ActiveNetworkRemoval(String),

    #[error("No active profile to reload")]
    NoActiveProfile,

    #[error("Invalid network record: {0}")]
    InvalidNetwork(String),

    #[error("Profile reload failed: {0}")]
    ProfileReload(#[from] SessionError),
}
