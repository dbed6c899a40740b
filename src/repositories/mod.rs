//! # Repository Module
//!
//! Persistence boundary for user-added custom networks. The wallet shell
//! provides the durable implementation; this crate ships an in-memory one
//! for tests and default wiring.

use async_trait::async_trait;

use crate::models::{NetworkModel, RepositoryError};

mod custom_network_in_memory;
pub use custom_network_in_memory::*;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CustomNetworkRepository: Send + Sync {
    /// Persists a new custom network record.
    async fn create(&self, record: NetworkModel) -> Result<NetworkModel, RepositoryError>;

    /// Persists the full replacement of an existing record.
    async fn update(&self, record: NetworkModel) -> Result<NetworkModel, RepositoryError>;

    /// Deletes a record by id. Deleting a missing id is not an error.
    async fn delete_by_id(&self, id: String) -> Result<(), RepositoryError>;

    async fn list_all(&self) -> Result<Vec<NetworkModel>, RepositoryError>;

    async fn count(&self) -> Result<usize, RepositoryError>;

    /// Check if the repository contains any entries.
    async fn has_entries(&self) -> Result<bool, RepositoryError>;
}
