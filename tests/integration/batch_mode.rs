use eyre::Result;
use tempfile::TempDir;

use mbnb_cli::{
    batch,
    config::Config,
    workflows::{self, OnExistingFile},
};
use mbnb_wallet::WalletStore;

use crate::common::init_test_logging;

fn offline_config(temp_dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.wallet_file = temp_dir.path().join("account.txt");
    // Point at a closed local port so nothing leaves the machine
    config.eth.rpc = "http://127.0.0.1:1/".parse().unwrap();
    config
}

/// With no store file, batch mode aborts before claiming or sweeping
#[tokio::test]
async fn test_batch_mode_fails_fast_without_wallets() -> Result<()> {
    init_test_logging();

    let temp_dir = TempDir::new()?;
    let config = offline_config(&temp_dir);

    let result = batch::run(config, 1, None).await;
    assert!(result.is_err());

    Ok(())
}

/// An unparseable transfer address is a user error that fails the run
#[tokio::test]
async fn test_batch_mode_rejects_invalid_transfer_address() -> Result<()> {
    init_test_logging();

    let temp_dir = TempDir::new()?;
    let config = offline_config(&temp_dir);

    let store = WalletStore::new(&config.wallet_file);
    workflows::generate(&store, 1, OnExistingFile::Append)?;

    let result = batch::run(config, 0, Some("definitely-not-an-address")).await;
    assert!(result.is_err());

    Ok(())
}
