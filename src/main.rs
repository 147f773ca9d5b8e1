//! DeFi Contract Registry - Smoke-run entry point
//!
//! Resolves a couple of well-known contracts through the full stack:
//! registry lookup, Etherscan ABI fetch, and handle construction.

use std::path::Path;

use anyhow::Result;
use defi_contract_registry::*;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    let _logging_guard = utils::setup_logging()?;
    utils::setup_output_directories()?;

    // Load configuration, failing fast on missing variables
    let config = Config::from_env()?;

    info!("DeFi Contract Registry v0.3.0");
    info!("Configuration:");
    info!("   Etherscan endpoint: {}", config.etherscan_api_url);

    // Setup network provider
    let provider = network::setup_provider(&config).await?;
    let resolver = AbiResolver::new(&config);
    let fetcher = ContractFetcher::new(provider, resolver.clone());

    // Aave V3 pool: address and ABI from the same registry entry
    let pool_query = ContractQuery::aave("ethereum", "core_market", "pool");
    let pool = fetcher.get_contract(&pool_query, None).await?;
    info!("Aave pool handle ready at {}", pool.address());

    // Compound USDC comet: call the proxy with the implementation ABI
    let comet_query = ContractQuery::compound("ethereum", "usdc", "proxy")
        .with_abi_contract_type("implementation");
    let comet = fetcher.get_contract(&comet_query, None).await?;
    info!("Compound USDC comet handle ready at {}", comet.address());

    // Keep a local copy of the pool ABI for offline use
    match resolver
        .save(*pool.address(), "aave_core_pool", Path::new("output/abis"))
        .await
    {
        Some(path) => info!("Pool ABI saved to {}", path.display()),
        None => warn!("Pool ABI was not saved"),
    }

    Ok(())
}
