use std::time::Duration;

use alloy::primitives::{utils::parse_ether, U256};
use serde::{Deserialize, Serialize};
use url::Url;

/// Chain connection and sweep policy settings
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct EthConfig {
    /// Url for rpc commands
    pub rpc: Url,
    /// Network name shown at startup
    pub network: String,
    /// Native currency ticker used in balance output
    pub symbol: String,
    /// Wei left behind by a sweep so the transaction itself stays payable
    pub gas_reserve: U256,
    /// Pause between sweep transactions
    #[serde(with = "humantime_serde")]
    pub sweep_delay: Duration,
}

impl std::fmt::Debug for EthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Hide potentially sensitive query parameters
        f.debug_struct("EthConfig")
            .field("rpc", &self.rpc.host_str().unwrap_or("missing rpc host"))
            .finish()
    }
}

impl Default for EthConfig {
    fn default() -> Self {
        Self {
            rpc: "https://rpc.mbscan.io/".parse().unwrap(),
            network: "MegaBNB Testnet".to_string(),
            symbol: "BNB".to_string(),
            gas_reserve: parse_ether("0.0001").unwrap(),
            sweep_delay: Duration::from_secs(1),
        }
    }
}
