//! Network-state initialization
//!
//! This module contains functions for initializing the network registry and
//! wiring the services around it. Every subsystem receives an explicit
//! handle; nothing here installs a global.

use std::sync::Arc;

use log::info;

use crate::models::{NetworkModel, RepositoryError};
use crate::registry::NetworkRegistry;
use crate::repositories::CustomNetworkRepository;
use crate::services::{
    CustomNetworkManager, FeeStatisticsFetcher, FeeSynchronizer, NetworkSwitchCoordinator,
    NotificationPublisher, SessionHandle,
};

/// Builds the registry from persisted custom networks and the bundled
/// built-in list.
///
/// # Errors
///
/// Returns an error if the persisted custom-network set cannot be listed.
pub async fn initialize_registry(
    store: &dyn CustomNetworkRepository,
    builtins: &[NetworkModel],
) -> Result<Arc<NetworkRegistry>, RepositoryError> {
    let registry = Arc::new(NetworkRegistry::new());

    let customs = store.list_all().await?;
    registry.hydrate_custom(customs).await;
    registry.load_initial(builtins).await;

    info!(
        "network registry initialized with {} networks",
        registry.all().await.len()
    );
    Ok(registry)
}

/// The wired network-state services handed to the rest of the application.
pub struct NetworkServices {
    pub registry: Arc<NetworkRegistry>,
    pub custom_networks: Arc<CustomNetworkManager>,
    pub fee_synchronizer: Arc<FeeSynchronizer>,
    pub switch_coordinator: Arc<NetworkSwitchCoordinator>,
}

impl NetworkServices {
    pub async fn initialize(
        store: Arc<dyn CustomNetworkRepository>,
        fetcher: Arc<dyn FeeStatisticsFetcher>,
        session: Arc<dyn SessionHandle>,
        publisher: Arc<dyn NotificationPublisher>,
        builtins: Vec<NetworkModel>,
    ) -> Result<Self, RepositoryError> {
        let registry = initialize_registry(store.as_ref(), &builtins).await?;

        let switch_coordinator = Arc::new(NetworkSwitchCoordinator::new(
            Arc::clone(&session),
            publisher,
        ));
        let custom_networks = Arc::new(CustomNetworkManager::new(
            Arc::clone(&registry),
            Arc::clone(&store),
            session,
            Arc::clone(&switch_coordinator),
        ));
        let fee_synchronizer = Arc::new(FeeSynchronizer::new(Arc::clone(&registry), fetcher));

        Ok(Self {
            registry,
            custom_networks,
            fee_synchronizer,
            switch_coordinator,
        })
    }
}
