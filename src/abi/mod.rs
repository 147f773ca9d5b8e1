//! ABI resolution: Etherscan fetch, local files, and save-to-disk

pub mod resolver;
pub mod store;

pub use resolver::*;
pub use store::*;
