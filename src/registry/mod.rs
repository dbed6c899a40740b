//! Network registry.
//!
//! The single shared store of every network the wallet knows about: the
//! bundled built-ins plus user-added custom networks. All lookups run over
//! one published set, and every mutation commits a whole-record (or
//! whole-set) replacement under one lock so concurrent readers never observe
//! a partially applied write.
//!
//! Each subsystem receives an explicit handle to the registry; there is no
//! ambient global instance.

use std::collections::{HashMap, HashSet};

use log::debug;
use tokio::sync::RwLock;

use crate::models::{ApiVersion, NetworkError, NetworkModel};

#[derive(Debug, Default)]
struct RegistryState {
    /// The published lookup set: built-ins followed by custom networks, in
    /// publication order. First match wins for lookups.
    all: Vec<NetworkModel>,
    /// Custom networks keyed by id.
    custom: HashMap<String, NetworkModel>,
    /// Ids of removed custom networks. Never handed out again within this
    /// process lifetime; the persisted store stays authoritative for
    /// durability.
    retired_ids: HashSet<String>,
    /// Bumped every time a new lookup set is published.
    revision: u64,
}

#[derive(Debug, Default)]
pub struct NetworkRegistry {
    state: RwLock<RegistryState>,
}

impl NetworkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the custom-network map from previously persisted records. Runs
    /// before [`load_initial`](Self::load_initial) during bootstrap and does
    /// not publish a lookup set on its own.
    pub async fn hydrate_custom(&self, customs: Vec<NetworkModel>) {
        let mut state = self.state.write().await;
        for custom in customs {
            if let Some(id) = custom.id.clone() {
                state.custom.insert(id, custom);
            }
        }
    }

    /// Publishes the initial lookup set.
    ///
    /// A non-empty registry is reconciled against the custom-network map:
    /// any custom network whose `name` is not present yet is appended, and a
    /// new set is published only if at least one record was added. An empty
    /// registry is seeded from `builtins`, with the same reconcile step
    /// applied in the same write so hydrated customs are visible on first
    /// load.
    pub async fn load_initial(&self, builtins: &[NetworkModel]) {
        let mut state = self.state.write().await;

        let seeded = state.all.is_empty();
        let mut all = if seeded {
            builtins.to_vec()
        } else {
            state.all.clone()
        };

        let mut appended = 0usize;
        for custom in state.custom.values() {
            if !all.iter().any(|network| network.name == custom.name) {
                all.push(custom.clone());
                appended += 1;
            }
        }

        if seeded || appended > 0 {
            debug!(
                "publishing initial network set ({} networks, {} reconciled customs)",
                all.len(),
                appended
            );
            state.all = all;
            state.revision += 1;
        }
    }

    /// Snapshot of the full published set.
    pub async fn all(&self) -> Vec<NetworkModel> {
        self.state.read().await.all.clone()
    }

    pub async fn custom_networks(&self) -> Vec<NetworkModel> {
        self.state.read().await.custom.values().cloned().collect()
    }

    pub async fn custom_network_by_id(&self, id: &str) -> Option<NetworkModel> {
        self.state.read().await.custom.get(id).cloned()
    }

    pub async fn find_by_symbol(&self, symbol: &str) -> Option<NetworkModel> {
        let state = self.state.read().await;
        state
            .all
            .iter()
            .find(|network| network.symbol == symbol)
            .cloned()
    }

    pub async fn find_by_token(&self, token: &str) -> Option<NetworkModel> {
        let state = self.state.read().await;
        state
            .all
            .iter()
            .find(|network| network.token == token)
            .cloned()
    }

    pub async fn find_by_name(&self, name: &str) -> Option<NetworkModel> {
        let state = self.state.read().await;
        state
            .all
            .iter()
            .find(|network| network.name == name)
            .cloned()
    }

    /// Number of lookup-set publications so far. Observers compare
    /// revisions to tell whether a new set was published.
    pub async fn revision(&self) -> u64 {
        self.state.read().await.revision
    }

    /// Replaces the entire published set in one atomic assignment. Used by
    /// the fee synchronizer to commit a refreshed snapshot; partial progress
    /// is never visible to readers.
    pub async fn replace_all(&self, networks: Vec<NetworkModel>) {
        let mut state = self.state.write().await;
        state.all = networks;
        state.revision += 1;
    }

    /// Fee list for `transaction_type` on the active network.
    ///
    /// Fails when no network is active, or when the active network's API
    /// version predates fee statistics. A v2 network without an entry for
    /// the requested type yields an empty list, not an error.
    pub fn fee_statistics_by_type(
        active_network: Option<&NetworkModel>,
        transaction_type: u32,
    ) -> Result<Vec<u64>, NetworkError> {
        let network = active_network.ok_or(NetworkError::NoActiveNetwork)?;
        if network.api_version == ApiVersion::V1 {
            return Err(NetworkError::UnsupportedApiVersion(network.api_version));
        }
        Ok(network
            .fee_statistics_for(transaction_type)
            .map(|fees| fees.to_vec())
            .unwrap_or_default())
    }

    /// Inserts a custom network into the custom map and the published set.
    ///
    /// Rejects an id already in use, an id retired by an earlier removal,
    /// and a name already present anywhere in the registry. Collisions are
    /// never merged silently.
    pub async fn add_custom(&self, network: NetworkModel) -> Result<(), NetworkError> {
        let id = network
            .id
            .clone()
            .ok_or_else(|| NetworkError::InvalidNetwork("custom network id".into()))?;

        let mut state = self.state.write().await;
        if state.custom.contains_key(&id) {
            return Err(NetworkError::DuplicateNetworkId(id));
        }
        if state.retired_ids.contains(&id) {
            return Err(NetworkError::RetiredNetworkId(id));
        }
        if state.all.iter().any(|existing| existing.name == network.name) {
            return Err(NetworkError::DuplicateNetworkName(network.name.clone()));
        }

        state.custom.insert(id, network.clone());
        state.all.push(network);
        state.revision += 1;
        Ok(())
    }

    /// Replaces a stored custom network. Returns `false` without touching
    /// any state when no record with that id exists.
    pub async fn update_custom(&self, network: NetworkModel) -> Result<bool, NetworkError> {
        let id = network
            .id
            .clone()
            .ok_or_else(|| NetworkError::InvalidNetwork("custom network id".into()))?;

        let mut state = self.state.write().await;
        if !state.custom.contains_key(&id) {
            return Ok(false);
        }
        let renamed_collides = state
            .all
            .iter()
            .any(|existing| existing.name == network.name && existing.id != network.id);
        if renamed_collides {
            return Err(NetworkError::DuplicateNetworkName(network.name.clone()));
        }

        state.custom.insert(id.clone(), network.clone());
        if let Some(slot) = state
            .all
            .iter_mut()
            .find(|existing| existing.id.as_deref() == Some(id.as_str()))
        {
            *slot = network;
        }
        state.revision += 1;
        Ok(true)
    }

    /// Removes a custom network from the custom map and the published set,
    /// retiring its id. Returns the removed record, or `None` when the id
    /// was unknown.
    pub async fn remove_custom(&self, id: &str) -> Option<NetworkModel> {
        let mut state = self.state.write().await;
        let removed = state.custom.remove(id)?;
        state
            .all
            .retain(|network| network.id.as_deref() != Some(id));
        state.retired_ids.insert(id.to_string());
        state.revision += 1;
        Some(removed)
    }
}
