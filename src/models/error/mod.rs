mod network;
pub use network::*;

mod repository;
pub use repository::*;

mod fetch;
pub use fetch::*;

mod session;
pub use session::*;
