//! Environment-driven settings and Etherscan endpoint configuration

use std::env;

use alloy::primitives::Address;

use crate::errors::{FetcherError, FetcherResult};

pub const DEFAULT_ETHERSCAN_API_URL: &str = "https://api.etherscan.io/api";

const ENV_RPC_URL: &str = "ETH_RPC_URL";
const ENV_ETHERSCAN_API_KEY: &str = "ETHERSCAN_API_KEY";
const ENV_ETHERSCAN_API_URL: &str = "ETHERSCAN_API_URL";

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP RPC endpoint for the Ethereum node
    pub rpc_url: String,
    /// API key for the Etherscan contract ABI endpoint
    pub etherscan_api_key: String,
    /// Etherscan API base URL, overridable for tests and mirrors
    pub etherscan_api_url: String,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Fails fast when `ETH_RPC_URL` or `ETHERSCAN_API_KEY` is missing so
    /// a misconfigured process never gets past startup.
    pub fn from_env() -> FetcherResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup(get: impl Fn(&str) -> Option<String>) -> FetcherResult<Self> {
        let required = |name: &str| {
            get(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| FetcherError::Configuration { name: name.to_string() })
        };

        Ok(Self {
            rpc_url: required(ENV_RPC_URL)?,
            etherscan_api_key: required(ENV_ETHERSCAN_API_KEY)?,
            etherscan_api_url: get(ENV_ETHERSCAN_API_URL)
                .unwrap_or_else(|| DEFAULT_ETHERSCAN_API_URL.to_string()),
        })
    }
}

/// Full `getabi` request URL for a contract address.
pub(crate) fn etherscan_abi_url(base_url: &str, api_key: &str, address: Address) -> String {
    format!("{base_url}?module=contract&action=getabi&address={address}&apikey={api_key}")
}
