//! This module provides an in-memory implementation of the custom-network
//! store, keyed by network id.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{Mutex, MutexGuard};

use crate::models::{NetworkModel, RepositoryError};
use crate::repositories::CustomNetworkRepository;

#[derive(Debug)]
pub struct InMemoryCustomNetworkRepository {
    store: Mutex<HashMap<String, NetworkModel>>,
}

impl Clone for InMemoryCustomNetworkRepository {
    fn clone(&self) -> Self {
        // Try to get the current data, or use empty HashMap if lock fails
        let data = self
            .store
            .try_lock()
            .map(|guard| guard.clone())
            .unwrap_or_else(|_| HashMap::new());

        Self {
            store: Mutex::new(data),
        }
    }
}

impl InMemoryCustomNetworkRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
        }
    }

    async fn acquire_lock<T>(lock: &Mutex<T>) -> Result<MutexGuard<T>, RepositoryError> {
        Ok(lock.lock().await)
    }

    fn record_id(record: &NetworkModel) -> Result<String, RepositoryError> {
        record
            .id
            .clone()
            .ok_or_else(|| RepositoryError::InvalidData("custom network record has no id".into()))
    }
}

impl Default for InMemoryCustomNetworkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomNetworkRepository for InMemoryCustomNetworkRepository {
    async fn create(&self, record: NetworkModel) -> Result<NetworkModel, RepositoryError> {
        let id = Self::record_id(&record)?;
        let mut store = Self::acquire_lock(&self.store).await?;
        if store.contains_key(&id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Custom network with id {} already exists",
                id
            )));
        }
        store.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, record: NetworkModel) -> Result<NetworkModel, RepositoryError> {
        let id = Self::record_id(&record)?;
        let mut store = Self::acquire_lock(&self.store).await?;
        if !store.contains_key(&id) {
            return Err(RepositoryError::NotFound(format!(
                "Custom network with id {} not found",
                id
            )));
        }
        store.insert(id, record.clone());
        Ok(record)
    }

    async fn delete_by_id(&self, id: String) -> Result<(), RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        store.remove(&id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<NetworkModel>, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        Ok(store.values().cloned().collect())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        Ok(store.len())
    }

    async fn has_entries(&self) -> Result<bool, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        Ok(!store.is_empty())
    }
}
