use thiserror::Error;

/// Errors reported by the custom-network persistence boundary. Mutation
/// methods on the manager do not surface these synchronously; spawned
/// persistence tasks log them instead.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("An unknown error occurred: {0}")]
    Unknown(String),
}
