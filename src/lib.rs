//! # wallet-networks
//!
//! Network-state core for a desktop cryptocurrency wallet: the registry of
//! known blockchain networks, the custom-network lifecycle, per-network
//! fee-statistics synchronization, and active-network switch coordination.
//!
//! The embedding application supplies the collaborators at the boundaries
//! (a durable [`repositories::CustomNetworkRepository`], a
//! [`services::SessionHandle`], and a [`services::NotificationPublisher`])
//! and receives wired services from [`bootstrap::NetworkServices`].

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod registry;
pub mod repositories;
pub mod services;

pub use bootstrap::*;
pub use models::*;
pub use registry::NetworkRegistry;
