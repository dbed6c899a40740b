use thiserror::Error;

/// Errors reported by the session-context collaborator.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Profile reload failed: {0}")]
    ProfileReloadFailed(String),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),
}
