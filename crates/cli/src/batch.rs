use color_eyre::eyre::{bail, Result};
use tracing::info;

use mbnb_faucet::FaucetClient;
use mbnb_wallet::WalletStore;

use crate::config::Config;
use crate::workflows;

/// One-shot claim-and-transfer sequence driven entirely by flags.
///
/// An empty wallet set is fatal here (there is nobody to prompt), while a
/// failed RPC connection only degrades the run to claims without balance
/// checks or transfers.
pub async fn run(config: Config, claim_count: u32, transfer: Option<&str>) -> Result<()> {
    info!("=========================================");
    info!("Batch Mode: Claim & Transfer");
    info!("=========================================");

    let client = workflows::connect(&config.eth).await;
    let store = WalletStore::new(&config.wallet_file);
    let mut wallets = workflows::load(&store);
    if wallets.is_empty() {
        bail!("No wallets found. Run with --generate first.");
    }

    info!("Checking initial balances...");
    workflows::check_balances(client.as_ref(), &mut wallets, &config.eth.symbol).await;

    if claim_count > 0 {
        let faucet = FaucetClient::new(config.faucet.clone());
        workflows::claim_all(&faucet, &wallets, claim_count, &config.eth.symbol).await;

        info!("Checking balances after claiming...");
        workflows::check_balances(client.as_ref(), &mut wallets, &config.eth.symbol).await;
    }

    if let Some(target) = transfer {
        workflows::sweep_all(client.as_ref(), &wallets, target, &config.eth).await?;

        info!("Checking final balances...");
        workflows::check_balances(client.as_ref(), &mut wallets, &config.eth.symbol).await;
    }

    info!("Batch operation completed successfully!");
    Ok(())
}
