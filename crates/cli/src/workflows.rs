use alloy::primitives::{utils::format_ether, Address, U256};
use color_eyre::eyre::{eyre, Result};
use tokio::time::sleep;
use tracing::{error, info, warn};

use mbnb_ethereum::{EthClient, EthConfig};
use mbnb_faucet::{ClaimOutcome, FaucetClient};
use mbnb_wallet::{Wallet, WalletStore};

/// What bulk generation does when the store file already exists.
/// Resolved by the front end: interactively via a prompt, append in batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnExistingFile {
    Overwrite,
    Append,
}

/// Wallets swept and total wei moved by one sweep run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransferSummary {
    pub swept: usize,
    pub total_sent: U256,
}

/// Connect the chain client, degrading to `None` on failure so balance and
/// transfer operations become warn-and-skip instead of crashing.
pub async fn connect(eth: &EthConfig) -> Option<EthClient> {
    match EthClient::connect(eth).await {
        Ok(client) => {
            info!("Connected to {}", eth.network);
            Some(client)
        }
        Err(e) => {
            warn!("Error connecting to network: {e}");
            None
        }
    }
}

/// Generate `count` wallets, appending each to the store as it is created.
///
/// `count` has already been validated by the caller. Key generation failure
/// is fatal; a store write failure stops the run and returns the wallets
/// created so far.
pub fn generate(store: &WalletStore, count: u32, policy: OnExistingFile) -> Result<Vec<Wallet>> {
    if store.exists() && policy == OnExistingFile::Overwrite {
        if let Err(e) = store.clear() {
            error!("Error overwriting {}: {e}", store.path().display());
            return Ok(Vec::new());
        }
        info!("Overwriting {}...", store.path().display());
    }

    info!(
        "Creating {count} new wallets and saving to {}...",
        store.path().display()
    );

    let mut created = Vec::with_capacity(count as usize);
    for i in 0..count {
        let wallet = mbnb_wallet::generate()?;
        if let Err(e) = store.append(&wallet) {
            error!("Error saving wallet: {e}");
            break;
        }

        info!("[{}/{count}] Wallet created and saved:", i + 1);
        info!("   Address:     {}", wallet.address);
        info!("   Private Key: {}", wallet.private_key);
        info!(
            "   Mnemonic:    {}",
            wallet.mnemonic.as_deref().unwrap_or_default()
        );
        created.push(wallet);
    }

    if created.len() == count as usize {
        info!(
            "All {count} wallets have been created and saved to {}",
            store.path().display()
        );
        info!("IMPORTANT: Keep your private keys secure!");
    }
    Ok(created)
}

/// Load the wallet set from the store, replacing whatever the caller held.
/// I/O failures degrade to an empty set.
pub fn load(store: &WalletStore) -> Vec<Wallet> {
    match store.load_all() {
        Ok(wallets) => {
            if store.exists() {
                info!(
                    "Loaded {} wallets from {}",
                    wallets.len(),
                    store.path().display()
                );
            }
            wallets
        }
        Err(e) => {
            error!("Error loading wallets: {e}");
            Vec::new()
        }
    }
}

/// Check and record every wallet's balance in order, returning the total.
/// Per-wallet failures clear that wallet's balance and move on.
pub async fn check_balances(
    client: Option<&EthClient>,
    wallets: &mut [Wallet],
    symbol: &str,
) -> U256 {
    let Some(client) = client else {
        warn!("No RPC connection available. Cannot check balances.");
        return U256::ZERO;
    };
    if wallets.is_empty() {
        warn!("No wallets loaded. Cannot check balances.");
        return U256::ZERO;
    }

    info!("=== CHECKING WALLET BALANCES ===");
    let total_wallets = wallets.len();
    let mut total = U256::ZERO;
    for (i, wallet) in wallets.iter_mut().enumerate() {
        match client.balance_of(wallet.address).await {
            Ok(balance) => {
                wallet.balance = Some(balance);
                total += balance;
                info!(
                    "[{}/{total_wallets}] {}: {} {symbol}",
                    i + 1,
                    wallet.address,
                    format_ether(balance)
                );
            }
            Err(e) => {
                wallet.balance = None;
                error!("Error checking balance for {}: {e}", wallet.address);
            }
        }
    }

    info!(
        "Total balance across all wallets: {} {symbol}",
        format_ether(total)
    );
    total
}

/// Claim the faucet `claims_per_wallet` times for every wallet in order.
///
/// Denials never stop the run. The trailing cycle delay gives claimed funds
/// time to land on-chain before any follow-up balance check.
pub async fn claim_all(
    faucet: &FaucetClient,
    wallets: &[Wallet],
    claims_per_wallet: u32,
    symbol: &str,
) {
    if wallets.is_empty() {
        warn!("No wallets loaded. Please generate or load wallets first.");
        return;
    }

    info!("=== CLAIMING FAUCET FOR ALL WALLETS ({claims_per_wallet} time(s) each) ===");

    let claim_delay = faucet.config().claim_delay;
    for (i, wallet) in wallets.iter().enumerate() {
        info!(
            "Processing wallet {}/{}: {}",
            i + 1,
            wallets.len(),
            wallet.address
        );

        for claim in 0..claims_per_wallet {
            info!("Claim {}/{claims_per_wallet} for {}", claim + 1, wallet.address);
            match faucet.claim(wallet.address).await {
                ClaimOutcome::Granted { amount, tx_hash } => {
                    info!(
                        "Claim success for {} - {amount} {symbol} | TX: 0x{tx_hash}",
                        wallet.address
                    );
                }
                ClaimOutcome::Denied { reason } => {
                    warn!("Claim failed for {}: {reason}", wallet.address);
                }
            }

            if claim + 1 < claims_per_wallet {
                info!("Waiting {}s before next claim...", claim_delay.as_secs());
                sleep(claim_delay).await;
            }
        }
    }

    info!("Waiting for transactions to confirm...");
    sleep(faucet.config().cycle_delay).await;
}

/// Sweep every wallet's balance, minus the gas reserve, to one target.
///
/// An unparseable target is a validation error and aborts before any
/// network traffic. Per-wallet failures are logged and skipped; sweeps are
/// submitted, not confirmed.
pub async fn sweep_all(
    client: Option<&EthClient>,
    wallets: &[Wallet],
    target: &str,
    eth: &EthConfig,
) -> Result<TransferSummary> {
    let target: Address = target
        .trim()
        .parse()
        .map_err(|_| eyre!("Invalid target address: {target}"))?;

    let Some(client) = client else {
        warn!("No RPC connection available. Cannot transfer funds.");
        return Ok(TransferSummary::default());
    };
    if wallets.is_empty() {
        warn!("No wallets loaded. Please generate or load wallets first.");
        return Ok(TransferSummary::default());
    }

    info!("=== TRANSFERRING FUNDS TO TARGET ADDRESS ===");
    info!("Target address: {target}");

    let mut summary = TransferSummary::default();
    for (i, wallet) in wallets.iter().enumerate() {
        match sweep_one(client, wallet, target, eth, i, wallets.len()).await {
            Ok(Some(amount)) => {
                summary.swept += 1;
                summary.total_sent += amount;
            }
            Ok(None) => {}
            Err(e) => error!("Error transferring from {}: {e}", wallet.address),
        }

        if i + 1 < wallets.len() {
            sleep(eth.sweep_delay).await;
        }
    }

    info!("Transfer summary:");
    info!(
        "- Successfully transferred from {}/{} wallets",
        summary.swept,
        wallets.len()
    );
    info!(
        "- Total amount sent: {} {}",
        format_ether(summary.total_sent),
        eth.symbol
    );
    Ok(summary)
}

/// One wallet's sweep: fetch the balance, skip dust, send the rest
async fn sweep_one(
    client: &EthClient,
    wallet: &Wallet,
    target: Address,
    eth: &EthConfig,
    index: usize,
    total: usize,
) -> Result<Option<U256>> {
    let balance = client.balance_of(wallet.address).await?;

    let Some(amount) = sweep_amount(balance, eth.gas_reserve) else {
        info!(
            "[{}/{total}] Skipping {} - balance too low ({} {})",
            index + 1,
            wallet.address,
            format_ether(balance),
            eth.symbol
        );
        return Ok(None);
    };

    info!(
        "[{}/{total}] Sending {} {} from {}...",
        index + 1,
        format_ether(amount),
        eth.symbol,
        wallet.address
    );
    let signer = wallet.signer()?;
    let hash = client.send_value(signer, target, amount).await?;
    info!("Transaction sent! Hash: {hash}");
    Ok(Some(amount))
}

/// Amount a sweep should move for a given balance: everything above the gas
/// reserve, or nothing when the balance is at or below it
pub fn sweep_amount(balance: U256, gas_reserve: U256) -> Option<U256> {
    (balance > gas_reserve).then(|| balance - gas_reserve)
}
