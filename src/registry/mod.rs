//! Static address registry keyed by protocol, network, group, and role

pub mod addresses;

pub use addresses::*;

use std::fmt;
use std::str::FromStr;

use alloy::primitives::Address;

use crate::errors::{FetcherError, FetcherResult};

/// Protocols with entries in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Aave,
    Compound,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Aave => write!(f, "aave"),
            Protocol::Compound => write!(f, "compound"),
        }
    }
}

impl FromStr for Protocol {
    type Err = FetcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aave" => Ok(Protocol::Aave),
            "compound" => Ok(Protocol::Compound),
            other => Err(FetcherError::UnsupportedProtocol { protocol: other.to_string() }),
        }
    }
}

/// Resolves one registry entry to its contract address.
///
/// The group key is the Aave market type or the Compound base asset; the
/// role key is the contract name within that group. A miss anywhere in
/// the key chain is `AddressNotFound`.
pub fn lookup(protocol: Protocol, network: &str, group: &str, role: &str) -> FetcherResult<Address> {
    let address = match protocol {
        Protocol::Aave => AAVE_MARKETS
            .iter()
            .find(|m| m.network == network && m.market == group)
            .and_then(|m| {
                m.contracts
                    .iter()
                    .find(|(name, _)| *name == role)
                    .map(|(_, addr)| *addr)
            }),
        Protocol::Compound => COMPOUND_MARKETS
            .iter()
            .find(|m| m.network == network && m.base_asset == group)
            .and_then(|m| m.role(role)),
    };

    address.ok_or_else(|| FetcherError::AddressNotFound {
        protocol,
        network: network.to_string(),
        group: group.to_string(),
        role: role.to_string(),
    })
}
