//! Protocol-specific contract resolution against the registry

use std::str::FromStr;

use alloy::primitives::Address;
use tracing::info;

use crate::errors::{FetcherError, FetcherResult};
use crate::registry::{self, Protocol};

/// Selector set for one contract lookup. Which fields are required
/// depends on the protocol; `resolve` validates the combination.
#[derive(Debug, Clone, Default)]
pub struct ContractQuery {
    pub protocol: String,
    pub network: String,
    /// Aave market, e.g. "core_market". Ignored for Compound.
    pub market_type: Option<String>,
    /// Compound base asset, e.g. "usdc". Ignored for Aave.
    pub base_asset: Option<String>,
    /// Contract role within the group, e.g. "pool" or "proxy".
    pub contract_type: Option<String>,
    /// Compound only: take the ABI from this role instead of
    /// `contract_type`. Enables calling a proxy with the implementation
    /// contract's ABI.
    pub abi_contract_type: Option<String>,
}

impl ContractQuery {
    pub fn aave(network: &str, market_type: &str, contract_type: &str) -> Self {
        Self {
            protocol: "aave".to_string(),
            network: network.to_string(),
            market_type: Some(market_type.to_string()),
            contract_type: Some(contract_type.to_string()),
            ..Self::default()
        }
    }

    pub fn compound(network: &str, base_asset: &str, contract_type: &str) -> Self {
        Self {
            protocol: "compound".to_string(),
            network: network.to_string(),
            base_asset: Some(base_asset.to_string()),
            contract_type: Some(contract_type.to_string()),
            ..Self::default()
        }
    }

    pub fn with_abi_contract_type(mut self, abi_contract_type: &str) -> Self {
        self.abi_contract_type = Some(abi_contract_type.to_string());
        self
    }
}

/// A located contract: the address runtime calls target, and the address
/// whose ABI describes it. These differ only for Compound proxies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedContract {
    pub address: Address,
    pub abi_source: Address,
}

/// Resolves a query to a contract address and its ABI source address.
pub fn resolve(query: &ContractQuery) -> FetcherResult<ResolvedContract> {
    let protocol = Protocol::from_str(&query.protocol)?;

    match protocol {
        Protocol::Aave => {
            let (Some(market_type), Some(contract_type)) =
                (query.market_type.as_deref(), query.contract_type.as_deref())
            else {
                return Err(FetcherError::validation(
                    "aave requires both 'market_type' and 'contract_type'",
                ));
            };

            let address = lookup_primary(protocol, &query.network, market_type, contract_type)?;
            Ok(ResolvedContract { address, abi_source: address })
        }
        Protocol::Compound => {
            let (Some(base_asset), Some(contract_type)) =
                (query.base_asset.as_deref(), query.contract_type.as_deref())
            else {
                return Err(FetcherError::validation(
                    "compound requires both 'base_asset' and 'contract_type'",
                ));
            };

            let address = lookup_primary(protocol, &query.network, base_asset, contract_type)?;

            let abi_source = match query.abi_contract_type.as_deref() {
                Some(abi_role) => {
                    let abi_source = registry::lookup(protocol, &query.network, base_asset, abi_role)
                        .map_err(|_| {
                            FetcherError::validation(format!(
                                "ABI contract type '{abi_role}' not found for compound {base_asset} on {}",
                                query.network
                            ))
                        })?;
                    info!(
                        %address,
                        %abi_source,
                        abi_role,
                        "using ABI from separate contract entry"
                    );
                    abi_source
                }
                None => address,
            };

            Ok(ResolvedContract { address, abi_source })
        }
    }
}

/// Primary-address lookup. A registry miss here means the requested
/// contract does not exist for the protocol/network pair.
fn lookup_primary(
    protocol: Protocol,
    network: &str,
    group: &str,
    role: &str,
) -> FetcherResult<Address> {
    registry::lookup(protocol, network, group, role).map_err(|_| FetcherError::ContractNotFound {
        protocol,
        network: network.to_string(),
        role: role.to_string(),
    })
}
