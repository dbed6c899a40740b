//! Active-network switch coordination.
//!
//! When the currently active network changes identity (an update to the
//! custom network the session points at), downstream consumers hold clients
//! bound to the old network definition. The coordinator runs the required
//! side effects in a fixed order: reload the session profile, and only once
//! that settles, announce `client:changed` so connection pools and pollers
//! rebuild.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::constants::CLIENT_CHANGED_EVENT;
use crate::models::NetworkError;
use crate::services::{NotificationPublisher, SessionHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SwitchPhase {
    Idle,
    Reloading,
}

pub struct NetworkSwitchCoordinator {
    session: Arc<dyn SessionHandle>,
    publisher: Arc<dyn NotificationPublisher>,
    phase: Mutex<SwitchPhase>,
}

impl NetworkSwitchCoordinator {
    pub fn new(session: Arc<dyn SessionHandle>, publisher: Arc<dyn NotificationPublisher>) -> Self {
        Self {
            session,
            publisher,
            phase: Mutex::new(SwitchPhase::Idle),
        }
    }

    /// Runs the active-network change side effects.
    ///
    /// Awaits a full profile reload for the current profile, then publishes
    /// [`CLIENT_CHANGED_EVENT`]. A reload failure is propagated and the
    /// event is never published.
    pub async fn network_changed(&self) -> Result<(), NetworkError> {
        let profile_id = self
            .session
            .profile_id()
            .await
            .ok_or(NetworkError::NoActiveProfile)?;

        *self.phase.lock().await = SwitchPhase::Reloading;
        let reload = self.session.reload_profile(&profile_id).await;
        *self.phase.lock().await = SwitchPhase::Idle;
        reload?;

        self.publisher.publish(CLIENT_CHANGED_EVENT);
        Ok(())
    }

    /// True while a profile reload is in flight.
    pub async fn is_reloading(&self) -> bool {
        *self.phase.lock().await == SwitchPhase::Reloading
    }
}
