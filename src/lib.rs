//! DeFi Contract Registry - Contract metadata access for Aave V3 and Compound V3
//!
//! This crate resolves smart-contract addresses from a static registry,
//! obtains their ABIs from Etherscan or local files, and wraps the result
//! in a callable alloy contract instance.

pub mod config;
pub mod errors;
pub mod registry;
pub mod abi;
pub mod locator;
pub mod network;
pub mod contract;
pub mod utils;

// Re-export commonly used items
pub use config::Config;
pub use errors::{FetcherError, FetcherResult, SaveError};
pub use registry::Protocol;
pub use abi::{AbiResolver, AbiSource};
pub use locator::{ContractQuery, ResolvedContract};
pub use contract::{ContractFetcher, DynContract};

// Type alias for our concrete provider
pub type ConcreteProvider = alloy::providers::RootProvider<alloy::transports::BoxTransport>;
