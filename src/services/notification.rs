//! Notification bus boundary.
//!
//! Publishing is fire-and-forget with at-least-once delivery to live
//! subscribers. [`InProcessEventBus`] is the default in-process
//! implementation; the wallet shell may substitute its own.

use log::debug;
use tokio::sync::broadcast;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait NotificationPublisher: Send + Sync {
    fn publish(&self, event: &str);
}

/// Broadcast-backed event bus shared by the application's subsystems.
#[derive(Debug)]
pub struct InProcessEventBus {
    sender: broadcast::Sender<String>,
}

impl InProcessEventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.sender.subscribe()
    }
}

impl Default for InProcessEventBus {
    fn default() -> Self {
        Self::new(16)
    }
}

impl NotificationPublisher for InProcessEventBus {
    fn publish(&self, event: &str) {
        debug!("publishing event: {}", event);
        // A send with no live subscribers is not a failure.
        let _ = self.sender.send(event.to_string());
    }
}
