//! Custom error types for registry lookups and ABI resolution

use std::path::PathBuf;

use alloy::primitives::Address;
use thiserror::Error;

use crate::registry::Protocol;

#[derive(Error, Debug)]
pub enum FetcherError {
    #[error("missing required environment variable '{name}'")]
    Configuration { name: String },

    #[error("{message}")]
    Validation { message: String },

    #[error("unsupported protocol '{protocol}'")]
    UnsupportedProtocol { protocol: String },

    #[error("no address registered for {protocol} {network} {group}/{role}")]
    AddressNotFound {
        protocol: Protocol,
        network: String,
        group: String,
        role: String,
    },

    #[error("contract '{role}' not found for {protocol} on {network}")]
    ContractNotFound {
        protocol: Protocol,
        network: String,
        role: String,
    },

    #[error("ABI file not found: {path}")]
    AbiFileNotFound { path: PathBuf },

    #[error("failed to read ABI file {path}")]
    AbiFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse ABI: {context}")]
    AbiParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no verified ABI available for {address}")]
    AbiUnavailable { address: Address },

    #[error("etherscan request failed")]
    Http(#[from] reqwest::Error),
}

impl FetcherError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into() }
    }
}

pub type FetcherResult<T> = Result<T, FetcherError>;

/// Failure modes of the ABI save path, kept distinct so callers of the
/// fallible variant can tell a fetch problem from a write problem.
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("ABI fetch for {address} returned no data")]
    FetchEmpty { address: Address },

    #[error("failed to fetch ABI before saving")]
    Fetch(#[source] FetcherError),

    #[error("failed to write ABI file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
