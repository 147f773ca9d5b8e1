//! Error taxonomy for the registry and fetcher

pub mod fetcher_error;

pub use fetcher_error::*;
