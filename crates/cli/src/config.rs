use std::path::PathBuf;

use color_eyre::{eyre::bail, Result};
use resolve_path::PathResolveExt;
use serde::{Deserialize, Serialize};

use mbnb_ethereum::EthConfig;
use mbnb_faucet::FaucetConfig;

/// Top level config layout
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    /// Flat file holding one `address|privateKey` record per line
    pub wallet_file: PathBuf,
    pub eth: EthConfig,
    pub faucet: FaucetConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wallet_file: "account.txt".into(),
            eth: EthConfig::default(),
            faucet: FaucetConfig::default(),
        }
    }
}

impl Config {
    const DEFAULT_PATH: &str = "~/.config/mbnb/config.toml";

    /// Load the config, filling in missing values with defaults, and writing to disk after.
    pub fn load(path: Option<impl Into<PathBuf>>) -> Result<Self> {
        let path = path.map(|v| v.into()).unwrap_or(Self::DEFAULT_PATH.into());
        let path = path.resolve().to_path_buf();

        // Read config or get the default
        let config = std::fs::read_to_string(&path)
            .ok()
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    bail!("Failed to create configuration directory {parent:?}: {e}");
                }
            }
        }

        // Write config (with potentially new items)
        if let Err(e) = std::fs::write(&path, toml::to_string_pretty(&config)?) {
            bail!("Failed to write configuration to {path:?}: {e}");
        }

        Ok(config)
    }
}
