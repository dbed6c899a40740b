mod network;
pub use network::*;

mod http_client;
pub use http_client::*;
