//! Top-level fetcher tying locator, resolver, and handle factory together

use std::path::Path;
use std::sync::Arc;

use alloy::primitives::Address;
use alloy_json_abi::JsonAbi;
use tracing::info;

use crate::ConcreteProvider;
use crate::abi::{AbiResolver, AbiSource};
use crate::contract::{DynContract, make_handle};
use crate::errors::FetcherResult;
use crate::locator::{self, ContractQuery};

/// Resolves protocol contracts into callable handles.
///
/// Holds the shared provider and the ABI resolver; both are passed in
/// explicitly so tests can substitute fakes.
pub struct ContractFetcher {
    provider: Arc<ConcreteProvider>,
    resolver: AbiResolver,
}

impl ContractFetcher {
    pub fn new(provider: Arc<ConcreteProvider>, resolver: AbiResolver) -> Self {
        Self { provider, resolver }
    }

    /// Resolves a contract and returns a handle for it.
    ///
    /// The ABI decision is strict: with `abi_path` the file is used and
    /// the network is never consulted; without it the ABI always comes
    /// from Etherscan. For Compound queries with an `abi_contract_type`
    /// override, calls target the primary address while the ABI is
    /// fetched for the override's address.
    pub async fn get_contract(
        &self,
        query: &ContractQuery,
        abi_path: Option<&Path>,
    ) -> FetcherResult<DynContract> {
        let resolved = locator::resolve(query)?;

        let source = match abi_path {
            Some(path) => AbiSource::StrictFile(path.to_path_buf()),
            None => AbiSource::Remote,
        };
        let abi = self.resolver.resolve(resolved.abi_source, &source).await?;

        info!(
            protocol = %query.protocol,
            network = %query.network,
            address = %resolved.address,
            "contract handle ready"
        );
        Ok(make_handle(resolved.address, abi, &self.provider))
    }

    /// Fetches an ABI from Etherscan, falling back to `fallback_path`
    /// only when the endpoint has none.
    pub async fn get_abi(&self, address: Address, fallback_path: &Path) -> FetcherResult<JsonAbi> {
        self.resolver
            .resolve(address, &AbiSource::RemoteWithFallback(fallback_path.to_path_buf()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::fixtures::verified_envelope;
    use crate::errors::FetcherError;
    use alloy::primitives::address;
    use alloy::providers::{Provider, ProviderBuilder};
    use mockito::Matcher;

    // No RPC traffic happens in these tests; the provider URL is inert.
    fn test_provider() -> Arc<ConcreteProvider> {
        Arc::new(
            ProviderBuilder::new()
                .on_http("http://localhost:8545".parse().unwrap())
                .boxed(),
        )
    }

    #[tokio::test]
    async fn compound_proxy_handle_fetches_abi_from_implementation() {
        let mut server = mockito::Server::new_async().await;
        let implementation = address!("aeC1954467B6d823A9042E9e9D6E4F40111069a9");
        let mock = server
            .mock("GET", "/")
            .match_query(Matcher::UrlEncoded(
                "address".into(),
                implementation.to_string(),
            ))
            .with_body(verified_envelope())
            .create_async()
            .await;

        let fetcher = ContractFetcher::new(
            test_provider(),
            AbiResolver::with_endpoint(server.url(), "testkey"),
        );
        let query = ContractQuery::compound("ethereum", "usdc", "proxy")
            .with_abi_contract_type("implementation");
        let handle = fetcher.get_contract(&query, None).await.unwrap();

        // Calls target the proxy even though the ABI came from the
        // implementation entry.
        assert_eq!(
            *handle.address(),
            address!("c3d688B66703497DAA19211EEdff47f25384cdc3")
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn explicit_abi_path_skips_etherscan_entirely() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let path = std::env::temp_dir().join(format!(
            "fetcher-strict-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, crate::abi::fixtures::sample_abi().to_string()).unwrap();

        let fetcher = ContractFetcher::new(
            test_provider(),
            AbiResolver::with_endpoint(server.url(), "testkey"),
        );
        let query = ContractQuery::aave("ethereum", "core_market", "pool");
        let handle = fetcher.get_contract(&query, Some(&path)).await.unwrap();

        assert_eq!(
            *handle.address(),
            address!("87870Bca3F3fD6335C3F4ce8392D69350B4fA4E2")
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn get_abi_falls_back_to_file_when_etherscan_has_none() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_body(crate::abi::fixtures::unverified_envelope())
            .create_async()
            .await;

        let path = std::env::temp_dir().join(format!(
            "fetcher-fallback-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, crate::abi::fixtures::sample_abi().to_string()).unwrap();

        let fetcher = ContractFetcher::new(
            test_provider(),
            AbiResolver::with_endpoint(server.url(), "testkey"),
        );
        let abi = fetcher
            .get_abi(address!("87870Bca3F3fD6335C3F4ce8392D69350B4fA4E2"), &path)
            .await
            .unwrap();

        // Etherscan was consulted first, then the file filled in.
        assert!(abi.function("totalSupply").is_some());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn locator_failures_surface_before_any_fetch() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let fetcher = ContractFetcher::new(
            test_provider(),
            AbiResolver::with_endpoint(server.url(), "testkey"),
        );
        let mut query = ContractQuery::compound("ethereum", "usdc", "proxy");
        query.contract_type = None;

        let err = fetcher.get_contract(&query, None).await.unwrap_err();
        assert!(matches!(err, FetcherError::Validation { .. }));
        mock.assert_async().await;
    }
}
