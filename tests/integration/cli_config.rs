use std::{path::PathBuf, time::Duration};

use alloy_primitives::U256;
use eyre::Result;
use tempfile::TempDir;

use mbnb_cli::{cli::Args, config::Config};

use crate::common::init_test_logging;

/// Test configuration file parsing and validation
#[tokio::test]
async fn test_config_file_parsing() -> Result<()> {
    init_test_logging();

    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("test_config.toml");

    let config_content = r#"
wallet_file = "wallets/main.txt"

[eth]
rpc = "http://localhost:8545/"
symbol = "tBNB"
gas_reserve = "0x5af3107a4000"
sweep_delay = "2s"

[faucet]
url = "http://localhost:9000/airdrop"
claim_delay = "1s"
"#;

    tokio::fs::write(&config_path, config_content).await?;

    let config = Config::load(Some(&config_path))?;

    assert_eq!(config.wallet_file, PathBuf::from("wallets/main.txt"));
    assert_eq!(config.eth.rpc.as_str(), "http://localhost:8545/");
    assert_eq!(config.eth.symbol, "tBNB");
    assert_eq!(config.eth.gas_reserve, U256::from(100_000_000_000_000u64));
    assert_eq!(config.eth.sweep_delay, Duration::from_secs(2));
    assert_eq!(config.faucet.url.as_str(), "http://localhost:9000/airdrop");
    assert_eq!(config.faucet.claim_delay, Duration::from_secs(1));

    // Sections absent from the file keep their defaults
    assert_eq!(config.faucet.cycle_delay, Duration::from_secs(5));

    Ok(())
}

/// A missing config file is created with defaults, ready for editing
#[tokio::test]
async fn test_missing_config_is_created_with_defaults() -> Result<()> {
    init_test_logging();

    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let config = Config::load(Some(&config_path))?;
    assert_eq!(config.wallet_file, PathBuf::from("account.txt"));
    assert_eq!(config.eth.rpc.as_str(), "https://rpc.mbscan.io/");
    assert_eq!(config.faucet.url.as_str(), "https://mbscan.io/airdrop");

    let written = tokio::fs::read_to_string(&config_path).await?;
    let reparsed: Config = toml::from_str(&written)?;
    assert_eq!(reparsed.eth.symbol, "BNB");
    assert_eq!(reparsed.eth.gas_reserve, config.eth.gas_reserve);

    Ok(())
}

#[test]
fn test_rpc_flag_overrides_config() {
    let args = Args {
        generate: None,
        claim: None,
        transfer: None,
        rpc: Some("http://localhost:8545/".parse().unwrap()),
        config: None,
    };

    let mut config = Config::default();
    args.override_config(&mut config);
    assert_eq!(config.eth.rpc.as_str(), "http://localhost:8545/");
}
