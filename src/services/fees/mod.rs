mod fetcher;
pub use fetcher::*;

mod synchronizer;
pub use synchronizer::*;
