/// Event published on the notification bus after the active network has been
/// updated and the profile reloaded. Downstream subsystems rebuild their
/// network-bound clients on this signal.
pub const CLIENT_CHANGED_EVENT: &str = "client:changed";

/// Maximum accepted length for a custom network id.
pub const MAX_NETWORK_ID_LENGTH: usize = 36;

/// Statistics window requested from v2 fee endpoints, in days.
pub const DEFAULT_FEE_STATISTICS_DAYS: u32 = 7;

/// Default cadence of the periodic fee-statistics refresh.
pub const DEFAULT_FEE_REFRESH_INTERVAL_SECS: u64 = 300;

/// Node API paths for fee statistics.
pub const NODE_FEES_PATH_V2: &str = "api/node/fees";
pub const NODE_FEES_PATH_V1: &str = "api/blocks/getFees";
