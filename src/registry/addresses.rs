//! Static contract address tables for supported protocols
//!
//! Addresses are Ethereum mainnet deployments. Entries are process-wide
//! constants; well-formedness is enforced at compile time by `address!`.

use alloy::primitives::{Address, address};

/// Contract roles for one Aave V3 market on one network.
pub struct AaveMarket {
    pub network: &'static str,
    pub market: &'static str,
    pub contracts: &'static [(&'static str, Address)],
}

/// Proxy/implementation pair for one Compound V3 comet market.
///
/// Runtime calls target the proxy; the callable surface is described by
/// the implementation contract's ABI.
pub struct CompoundMarket {
    pub network: &'static str,
    pub base_asset: &'static str,
    pub proxy: Address,
    pub implementation: Address,
}

impl CompoundMarket {
    pub fn role(&self, role: &str) -> Option<Address> {
        match role {
            "proxy" => Some(self.proxy),
            "implementation" => Some(self.implementation),
            _ => None,
        }
    }
}

pub const AAVE_MARKETS: &[AaveMarket] = &[AaveMarket {
    network: "ethereum",
    market: "core_market",
    contracts: &[
        ("pool", address!("87870Bca3F3fD6335C3F4ce8392D69350B4fA4E2")),
        ("ui_pool_data_provider", address!("3F78BBD206e4D3c504Eb854232EdA7e47E9Fd8FC")),
        ("protocol_data_provider", address!("497a1994c46d4f6C864904A9f1fac6328Cb7C8a6")),
        ("oracle", address!("54586bE62E3c3580375aE3723C145253060Ca0C2")),
    ],
}];

pub const COMPOUND_MARKETS: &[CompoundMarket] = &[
    CompoundMarket {
        network: "ethereum",
        base_asset: "usdc",
        proxy: address!("c3d688B66703497DAA19211EEdff47f25384cdc3"),
        implementation: address!("aeC1954467B6d823A9042E9e9D6E4F40111069a9"),
    },
    CompoundMarket {
        network: "ethereum",
        base_asset: "weth",
        proxy: address!("A17581A9E3356d9A858b789D68B4d866e593aE94"),
        implementation: address!("1a7E64b593a9B8796e88a7489a2CEb6d079C850d"),
    },
    CompoundMarket {
        network: "ethereum",
        base_asset: "usdt",
        proxy: address!("3Afdc9BCA9213A35503b077a6072F3D0d5AB0840"),
        implementation: address!("0b4a278345DEAA4c7c61FdD2eB4AEC97e412a0d4"),
    },
    CompoundMarket {
        network: "ethereum",
        base_asset: "wstETH",
        proxy: address!("3D0bb1ccaB520A66e607822fC55BC921738fAFE3"),
        implementation: address!("1F0aa640e4871793AC10029365febe4e8e4b1441"),
    },
    CompoundMarket {
        network: "ethereum",
        base_asset: "usds",
        proxy: address!("5D409e56D886231aDAf00c8775665AD0f9897b56"),
        implementation: address!("BC910e3659BDB03c133961760693DB9118C05B04"),
    },
];
