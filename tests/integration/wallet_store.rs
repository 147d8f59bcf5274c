use eyre::Result;
use tempfile::TempDir;

use mbnb_cli::workflows::{self, OnExistingFile};
use mbnb_wallet::WalletStore;

use crate::common::init_test_logging;

/// Generated wallets survive a trip through the store file, in order
#[test]
fn test_generate_then_load_round_trip() -> Result<()> {
    init_test_logging();

    let temp_dir = TempDir::new()?;
    let store = WalletStore::new(temp_dir.path().join("account.txt"));

    let created = workflows::generate(&store, 5, OnExistingFile::Append)?;
    assert_eq!(created.len(), 5);

    let loaded = workflows::load(&store);
    assert_eq!(loaded.len(), 5);
    for (created, loaded) in created.iter().zip(&loaded) {
        assert_eq!(created.address, loaded.address);
        assert_eq!(created.private_key, loaded.private_key);
        // The recovery phrase lives only in memory at creation time
        assert!(loaded.mnemonic.is_none());
    }

    // Every line in the file is a well-formed record
    let content = std::fs::read_to_string(store.path())?;
    assert_eq!(content.lines().count(), 5);
    for line in content.lines() {
        let (address, key) = line.split_once('|').expect("record separator");
        assert!(address.starts_with("0x") && address.len() == 42);
        assert!(key.starts_with("0x") && key.len() == 66);
    }

    Ok(())
}

/// A second batch appends after the first instead of replacing it
#[test]
fn test_generate_twice_appends() -> Result<()> {
    init_test_logging();

    let temp_dir = TempDir::new()?;
    let store = WalletStore::new(temp_dir.path().join("account.txt"));

    let first = workflows::generate(&store, 2, OnExistingFile::Append)?;
    workflows::generate(&store, 3, OnExistingFile::Append)?;

    let loaded = workflows::load(&store);
    assert_eq!(loaded.len(), 5);
    assert_eq!(loaded[0].address, first[0].address);

    Ok(())
}
