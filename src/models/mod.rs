mod network;
pub use network::*;

mod fee;
pub use fee::*;

mod error;
pub use error::*;
