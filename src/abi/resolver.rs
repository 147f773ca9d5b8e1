//! ABI resolution from Etherscan and local JSON files

use std::fs;
use std::path::{Path, PathBuf};

use alloy::primitives::Address;
use alloy_json_abi::JsonAbi;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::{self, Config};
use crate::errors::{FetcherError, FetcherResult};

/// Etherscan `getabi` response envelope. `result` holds a JSON-encoded
/// ABI string on success, or an error message otherwise.
#[derive(Debug, Deserialize)]
struct AbiEnvelope {
    status: String,
    result: String,
}

/// Where an ABI comes from. The two fallback behaviors are distinct,
/// caller-selected strategies rather than an overloaded path argument.
#[derive(Debug, Clone)]
pub enum AbiSource {
    /// Fetch from Etherscan; an unverified contract is an error.
    Remote,
    /// Read the given file; never touches the network.
    StrictFile(PathBuf),
    /// Fetch from Etherscan, falling back to the given file only when
    /// the endpoint reports no ABI. Transport errors still propagate.
    RemoteWithFallback(PathBuf),
}

/// Cloning is cheap: the underlying reqwest client is reference-counted.
#[derive(Clone)]
pub struct AbiResolver {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl AbiResolver {
    pub fn new(config: &Config) -> Self {
        Self::with_endpoint(config.etherscan_api_url.clone(), config.etherscan_api_key.clone())
    }

    /// Builds a resolver against an explicit endpoint. Used directly in
    /// tests to point at a mock server.
    pub fn with_endpoint(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetches the verified ABI for `address` from Etherscan.
    ///
    /// Returns `Ok(None)` when the endpoint reports anything other than
    /// status "1" (typically an unverified contract). Transport and
    /// envelope errors propagate.
    pub async fn fetch_remote(&self, address: Address) -> FetcherResult<Option<JsonAbi>> {
        let url = config::etherscan_abi_url(&self.endpoint, &self.api_key, address);
        let envelope: AbiEnvelope = self.client.get(&url).send().await?.json().await?;

        if envelope.status != "1" {
            debug!(
                %address,
                status = %envelope.status,
                message = %envelope.result,
                "etherscan returned no ABI"
            );
            return Ok(None);
        }

        let abi = serde_json::from_str(&envelope.result).map_err(|source| FetcherError::AbiParse {
            context: format!("etherscan result for {address}"),
            source,
        })?;
        Ok(Some(abi))
    }

    /// Loads an ABI from a local JSON file.
    pub fn load_local(path: &Path) -> FetcherResult<JsonAbi> {
        if !path.exists() {
            return Err(FetcherError::AbiFileNotFound { path: path.to_path_buf() });
        }
        let raw = fs::read_to_string(path).map_err(|source| FetcherError::AbiFileRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| FetcherError::AbiParse {
            context: format!("ABI file {}", path.display()),
            source,
        })
    }

    /// Obtains an ABI for `address` according to the selected strategy.
    pub async fn resolve(&self, address: Address, source: &AbiSource) -> FetcherResult<JsonAbi> {
        match source {
            AbiSource::StrictFile(path) => {
                let abi = Self::load_local(path)?;
                info!(%address, path = %path.display(), "loaded ABI from file");
                Ok(abi)
            }
            AbiSource::Remote => {
                let abi = self
                    .fetch_remote(address)
                    .await?
                    .ok_or(FetcherError::AbiUnavailable { address })?;
                info!(%address, "fetched ABI from etherscan");
                Ok(abi)
            }
            AbiSource::RemoteWithFallback(path) => match self.fetch_remote(address).await? {
                Some(abi) => {
                    info!(%address, "fetched ABI from etherscan");
                    Ok(abi)
                }
                None => {
                    warn!(
                        %address,
                        path = %path.display(),
                        "etherscan had no ABI, falling back to file"
                    );
                    Self::load_local(path)
                }
            },
        }
    }
}
