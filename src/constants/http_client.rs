/// Default HTTP client connection timeout in seconds.
/// Maximum time to wait for establishing a connection.
pub const DEFAULT_HTTP_CLIENT_CONNECT_TIMEOUT_SECONDS: u64 = 2;

/// Default overall timeout for fee-statistics requests in seconds. A slow
/// node delays only its own refresh slot, never the whole batch.
pub const DEFAULT_HTTP_CLIENT_TIMEOUT_SECONDS: u64 = 10;
