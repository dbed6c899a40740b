//! # Services Module
//!
//! Implements the network-state services: custom-network lifecycle,
//! fee-statistics synchronization, active-network switch coordination, and
//! the session/notification collaborator boundaries.

mod custom_networks;
pub use custom_networks::*;

pub mod fees;
pub use fees::*;

mod notification;
pub use notification::*;

mod session;
pub use session::*;

mod switch;
pub use switch::*;
