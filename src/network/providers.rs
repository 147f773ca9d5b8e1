//! Network provider setup

use std::sync::Arc;

use alloy::providers::{Provider, ProviderBuilder};
use anyhow::{Context, Result};
use tracing::info;

use crate::{ConcreteProvider, config::Config};

/// Builds the shared HTTP provider from the configured RPC URL and
/// verifies the node answers before handing it out.
pub async fn setup_provider(config: &Config) -> Result<Arc<ConcreteProvider>> {
    let provider: Arc<ConcreteProvider> = Arc::new(
        ProviderBuilder::new()
            .on_http(config.rpc_url.parse().context("Invalid ETH_RPC_URL")?)
            .boxed(),
    );

    info!("Testing connection to Ethereum node...");
    let block = provider
        .get_block_number()
        .await
        .context("Failed to get block number")?;
    info!("Connected to Ethereum at block {}", block);

    Ok(provider)
}
