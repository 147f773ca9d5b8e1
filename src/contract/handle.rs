//! Callable contract handles over the shared provider

use std::sync::Arc;

use alloy::contract::{ContractInstance, Interface};
use alloy::network::Ethereum;
use alloy::primitives::Address;
use alloy::transports::BoxTransport;
use alloy_json_abi::JsonAbi;

use crate::ConcreteProvider;

/// A dynamically-typed contract instance bound to the shared provider.
pub type DynContract = ContractInstance<BoxTransport, ConcreteProvider, Ethereum>;

/// Wraps an (address, ABI) pair into a callable contract handle.
///
/// Pure construction: no validation that the ABI matches the bytecode at
/// the address.
pub fn make_handle(address: Address, abi: JsonAbi, provider: &Arc<ConcreteProvider>) -> DynContract {
    ContractInstance::new(address, provider.as_ref().clone(), Interface::new(abi))
}
