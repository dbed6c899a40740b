//! Custom network lifecycle.
//!
//! The manager mutates the in-memory registry first and persists the change
//! on a detached task. Persistence failures are logged, not surfaced to the
//! caller; a caller needing a durability guarantee must drive the
//! [`CustomNetworkRepository`] directly.

use std::sync::Arc;

use log::warn;

use crate::models::{NetworkError, NetworkModel};
use crate::registry::NetworkRegistry;
use crate::repositories::CustomNetworkRepository;
use crate::services::{NetworkSwitchCoordinator, SessionHandle};

pub struct CustomNetworkManager {
    registry: Arc<NetworkRegistry>,
    store: Arc<dyn CustomNetworkRepository>,
    session: Arc<dyn SessionHandle>,
    coordinator: Arc<NetworkSwitchCoordinator>,
}

impl CustomNetworkManager {
    pub fn new(
        registry: Arc<NetworkRegistry>,
        store: Arc<dyn CustomNetworkRepository>,
        session: Arc<dyn SessionHandle>,
        coordinator: Arc<NetworkSwitchCoordinator>,
    ) -> Self {
        Self {
            registry,
            store,
            session,
            coordinator,
        }
    }

    /// Adds a new custom network. The record becomes visible to registry
    /// lookups before the persistence write settles. An id or name
    /// collision is rejected, never merged.
    pub async fn add(&self, network: NetworkModel) -> Result<(), NetworkError> {
        network.validate()?;
        self.registry.add_custom(network.clone()).await?;

        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            let id = network.id.clone().unwrap_or_default();
            if let Err(e) = store.create(network).await {
                warn!("failed to persist custom network {}: {}", id, e);
            }
        });
        Ok(())
    }

    /// Replaces an existing custom network. Unknown ids are a no-op, not an
    /// error. When the update targets the currently active network, the
    /// switch coordinator's reload path runs to completion before this
    /// method returns, and its failure is propagated.
    pub async fn update(&self, network: NetworkModel) -> Result<(), NetworkError> {
        network.validate()?;
        let replaced = self.registry.update_custom(network.clone()).await?;
        if !replaced {
            return Ok(());
        }

        let store = Arc::clone(&self.store);
        let record = network.clone();
        tokio::spawn(async move {
            let id = record.id.clone().unwrap_or_default();
            if let Err(e) = store.update(record).await {
                warn!("failed to persist custom network {}: {}", id, e);
            }
        });

        let active_id = self.session.active_network().await.and_then(|n| n.id);
        if matches!((&active_id, &network.id), (Some(a), Some(b)) if a == b) {
            self.coordinator.network_changed().await?;
        }
        Ok(())
    }

    /// Removes a custom network and issues an idempotent delete to the
    /// persisted store. The currently active network cannot be removed; the
    /// caller must switch networks first.
    pub async fn remove(&self, id: &str) -> Result<(), NetworkError> {
        if let Some(active) = self.session.active_network().await {
            if active.id.as_deref() == Some(id) {
                return Err(NetworkError::ActiveNetworkRemoval(id.to_string()));
            }
        }

        self.registry.remove_custom(id).await;

        let store = Arc::clone(&self.store);
        let id = id.to_string();
        tokio::spawn(async move {
            if let Err(e) = store.delete_by_id(id.clone()).await {
                warn!("failed to delete persisted custom network {}: {}", id, e);
            }
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApiVersion, SessionError};
    use crate::repositories::InMemoryCustomNetworkRepository;
    use crate::services::{
        InProcessEventBus, MockNotificationPublisher, MockSessionHandle, NotificationPublisher,
    };
    use std::time::Duration;

    // ============================================
    // Helper functions
    // ============================================

    fn create_test_network(id: &str, name: &str) -> NetworkModel {
        NetworkModel {
            id: Some(id.to_string()),
            name: name.to_string(),
            symbol: "TST".to_string(),
            token: "TEST".to_string(),
            server: "https://node.test/api".to_string(),
            api_version: ApiVersion::V2,
            fee_statistics: Vec::new(),
            is_custom: true,
        }
    }

    fn session_without_active() -> MockSessionHandle {
        let mut session = MockSessionHandle::new();
        session.expect_active_network().returning(|| None);
        session.expect_profile_id().returning(|| None);
        session
    }

    fn manager_with(
        session: MockSessionHandle,
        publisher: Arc<dyn NotificationPublisher>,
    ) -> (CustomNetworkManager, Arc<NetworkRegistry>, Arc<InMemoryCustomNetworkRepository>) {
        let registry = Arc::new(NetworkRegistry::new());
        let store = Arc::new(InMemoryCustomNetworkRepository::new());
        let session: Arc<dyn SessionHandle> = Arc::new(session);
        let coordinator = Arc::new(NetworkSwitchCoordinator::new(
            Arc::clone(&session),
            publisher,
        ));
        let manager = CustomNetworkManager::new(
            Arc::clone(&registry),
            Arc::clone(&store) as Arc<dyn CustomNetworkRepository>,
            session,
            coordinator,
        );
        (manager, registry, store)
    }

    /// Waits for a detached persistence task to settle.
    async fn wait_until<F, Fut>(mut condition: F)
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = bool>,
    {
        for _ in 0..100 {
            if condition().await {
                return;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        panic!("condition not reached");
    }

    // ============================================
    // add
    // ============================================

    #[tokio::test]
    async fn test_add_updates_registry_and_persists() {
        let (manager, registry, store) =
            manager_with(session_without_active(), Arc::new(InProcessEventBus::default()));

        manager
            .add(create_test_network("c1", "my-net"))
            .await
            .unwrap();

        assert!(registry.find_by_name("my-net").await.is_some());
        wait_until(|| async { store.count().await.unwrap() == 1 }).await;
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_record_without_mutating() {
        let (manager, registry, store) =
            manager_with(session_without_active(), Arc::new(InProcessEventBus::default()));

        let mut network = create_test_network("c1", "my-net");
        network.server = "not a url".into();
        let result = manager.add(network).await;

        assert!(matches!(result, Err(NetworkError::InvalidNetwork(_))));
        assert!(registry.all().await.is_empty());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_add_rejects_id_collision() {
        let (manager, _registry, _store) =
            manager_with(session_without_active(), Arc::new(InProcessEventBus::default()));

        manager
            .add(create_test_network("c1", "net-a"))
            .await
            .unwrap();
        let result = manager.add(create_test_network("c1", "net-b")).await;

        assert!(matches!(result, Err(NetworkError::DuplicateNetworkId(_))));
    }

    #[tokio::test]
    async fn test_add_survives_persistence_failure() {
        let registry = Arc::new(NetworkRegistry::new());
        let mut store = crate::repositories::MockCustomNetworkRepository::new();
        store.expect_create().times(1).returning(|_| {
            Err(crate::models::RepositoryError::Unknown("disk full".into()))
        });
        let session: Arc<dyn SessionHandle> = Arc::new(session_without_active());
        let coordinator = Arc::new(NetworkSwitchCoordinator::new(
            Arc::clone(&session),
            Arc::new(InProcessEventBus::default()),
        ));
        let manager = CustomNetworkManager::new(
            Arc::clone(&registry),
            Arc::new(store),
            session,
            coordinator,
        );

        manager
            .add(create_test_network("c1", "my-net"))
            .await
            .unwrap();

        // The registry mutation stands even though persistence failed.
        assert!(registry.find_by_name("my-net").await.is_some());
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    // ============================================
    // update
    // ============================================

    #[tokio::test]
    async fn test_update_replaces_record_and_persists() {
        let (manager, registry, store) =
            manager_with(session_without_active(), Arc::new(InProcessEventBus::default()));
        manager
            .add(create_test_network("c1", "my-net"))
            .await
            .unwrap();
        wait_until(|| async { store.count().await.unwrap() == 1 }).await;

        let mut updated = create_test_network("c1", "my-net");
        updated.server = "https://other.test/api".to_string();
        manager.update(updated).await.unwrap();

        assert_eq!(
            registry.find_by_name("my-net").await.unwrap().server,
            "https://other.test/api"
        );
        wait_until(|| async {
            store.list_all().await.unwrap()[0].server == "https://other.test/api"
        })
        .await;
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_noop() {
        let (manager, registry, store) =
            manager_with(session_without_active(), Arc::new(InProcessEventBus::default()));

        manager
            .update(create_test_network("ghost", "ghost-net"))
            .await
            .unwrap();

        assert!(registry.find_by_name("ghost-net").await.is_none());
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_of_active_network_reloads_then_publishes() {
        let mut session = MockSessionHandle::new();
        session
            .expect_active_network()
            .returning(|| Some(create_test_network("c1", "my-net")));
        session
            .expect_profile_id()
            .returning(|| Some("profile-1".to_string()));
        session
            .expect_reload_profile()
            .times(1)
            .returning(|_| Ok(()));

        let bus = Arc::new(InProcessEventBus::default());
        let mut events = bus.subscribe();
        let (manager, _registry, _store) = manager_with(session, bus);

        manager
            .add(create_test_network("c1", "my-net"))
            .await
            .unwrap();
        let mut updated = create_test_network("c1", "my-net");
        updated.server = "https://other.test/api".to_string();
        manager.update(updated).await.unwrap();

        assert_eq!(events.recv().await.unwrap(), "client:changed");
    }

    #[tokio::test]
    async fn test_update_of_inactive_network_does_not_reload() {
        let mut session = MockSessionHandle::new();
        session
            .expect_active_network()
            .returning(|| Some(create_test_network("other", "other-net")));
        session.expect_profile_id().times(0);
        session.expect_reload_profile().times(0);

        let mut publisher = MockNotificationPublisher::new();
        publisher.expect_publish().times(0);

        let (manager, _registry, _store) = manager_with(session, Arc::new(publisher));
        manager
            .add(create_test_network("c1", "my-net"))
            .await
            .unwrap();

        manager
            .update(create_test_network("c1", "my-net"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_propagates_reload_failure_without_publish() {
        let mut session = MockSessionHandle::new();
        session
            .expect_active_network()
            .returning(|| Some(create_test_network("c1", "my-net")));
        session
            .expect_profile_id()
            .returning(|| Some("profile-1".to_string()));
        session.expect_reload_profile().times(1).returning(|_| {
            Err(SessionError::ProfileReloadFailed("storage offline".into()))
        });

        let mut publisher = MockNotificationPublisher::new();
        publisher.expect_publish().times(0);

        let (manager, _registry, _store) = manager_with(session, Arc::new(publisher));
        manager
            .add(create_test_network("c1", "my-net"))
            .await
            .unwrap();

        let result = manager.update(create_test_network("c1", "my-net")).await;
        assert!(matches!(result, Err(NetworkError::ProfileReload(_))));
    }

    // ============================================
    // remove
    // ============================================

    #[tokio::test]
    async fn test_remove_clears_registry_and_persisted_store() {
        let (manager, registry, store) =
            manager_with(session_without_active(), Arc::new(InProcessEventBus::default()));
        manager
            .add(create_test_network("c1", "my-net"))
            .await
            .unwrap();
        wait_until(|| async { store.count().await.unwrap() == 1 }).await;

        manager.remove("c1").await.unwrap();

        assert!(registry.find_by_name("my-net").await.is_none());
        wait_until(|| async { store.count().await.unwrap() == 0 }).await;
    }

    #[tokio::test]
    async fn test_remove_of_active_network_is_rejected() {
        let mut session = MockSessionHandle::new();
        session
            .expect_active_network()
            .returning(|| Some(create_test_network("c1", "my-net")));

        let (manager, registry, _store) =
            manager_with(session, Arc::new(InProcessEventBus::default()));
        manager
            .add(create_test_network("c1", "my-net"))
            .await
            .unwrap();

        let result = manager.remove("c1").await;

        assert!(matches!(
            result,
            Err(NetworkError::ActiveNetworkRemoval(_))
        ));
        assert!(registry.find_by_name("my-net").await.is_some());
    }

    #[tokio::test]
    async fn test_remove_unknown_id_still_issues_idempotent_delete() {
        let (manager, _registry, store) =
            manager_with(session_without_active(), Arc::new(InProcessEventBus::default()));

        manager.remove("ghost").await.unwrap();

        tokio::time::sleep(Duration::from_millis(5)).await;
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
