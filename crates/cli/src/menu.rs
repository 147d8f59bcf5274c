use std::io::{self, Write};

use color_eyre::eyre::{bail, Result};
use tracing::{error, info};

use mbnb_faucet::FaucetClient;
use mbnb_wallet::WalletStore;

use crate::config::Config;
use crate::workflows::{self, OnExistingFile};

/// Interactive menu loop over stdin.
///
/// Connects once at startup; a failed connection degrades the session so
/// balance and transfer options warn instead of running.
pub async fn run(config: Config) -> Result<()> {
    info!("=========================================");
    info!("Wallet Manager & Faucet Claimer");
    info!("=========================================");

    let client = workflows::connect(&config.eth).await;
    let faucet = FaucetClient::new(config.faucet.clone());
    let store = WalletStore::new(&config.wallet_file);
    let mut wallets = workflows::load(&store);

    loop {
        println!();
        println!("1. Generate new wallets");
        println!("2. Load wallets from file");
        println!("3. Check all wallet balances");
        println!("4. Claim faucet (1 time per wallet)");
        println!("5. Claim faucet multiple times");
        println!("6. Transfer all funds to address");
        println!("7. Exit");
        println!("Current wallets loaded: {}", wallets.len());

        match prompt("Select an option (1-7): ")?.as_str() {
            "1" => {
                let input = prompt("How many wallets do you want to generate? ")?;
                let count = match input.parse::<u32>() {
                    Ok(count) if count > 0 => count,
                    _ => {
                        error!("Please enter a valid number greater than 0.");
                        continue;
                    }
                };

                let policy = resolve_existing_file(&store)?;
                match workflows::generate(&store, count, policy) {
                    Ok(mut created) => wallets.append(&mut created),
                    Err(e) => error!("Error generating wallets: {e}"),
                }
            }
            "2" => wallets = workflows::load(&store),
            "3" => {
                workflows::check_balances(client.as_ref(), &mut wallets, &config.eth.symbol).await;
            }
            "4" => {
                workflows::claim_all(&faucet, &wallets, 1, &config.eth.symbol).await;
                workflows::check_balances(client.as_ref(), &mut wallets, &config.eth.symbol).await;
            }
            "5" => {
                let input = prompt("How many claims per wallet? ")?;
                let count = input.parse::<u32>().ok().filter(|n| *n > 0).unwrap_or(1);
                workflows::claim_all(&faucet, &wallets, count, &config.eth.symbol).await;
                workflows::check_balances(client.as_ref(), &mut wallets, &config.eth.symbol).await;
            }
            "6" => {
                let target = prompt("Enter address to receive funds: ")?;
                if let Err(e) =
                    workflows::sweep_all(client.as_ref(), &wallets, &target, &config.eth).await
                {
                    error!("{e}");
                }
                workflows::check_balances(client.as_ref(), &mut wallets, &config.eth.symbol).await;
            }
            "7" => {
                info!("Exiting program. Goodbye!");
                return Ok(());
            }
            _ => error!("Invalid option. Please try again."),
        }
    }
}

/// Ask whether an existing store file should be truncated or appended to
fn resolve_existing_file(store: &WalletStore) -> Result<OnExistingFile> {
    if !store.exists() {
        return Ok(OnExistingFile::Append);
    }

    let answer = prompt(&format!(
        "{} already exists. Do you want to overwrite it? [y/N] ",
        store.path().display()
    ))?;
    if answer.eq_ignore_ascii_case("y") {
        Ok(OnExistingFile::Overwrite)
    } else {
        info!("Appending to existing file {}...", store.path().display());
        Ok(OnExistingFile::Append)
    }
}

/// Print a prompt and read one trimmed line from stdin
fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        bail!("stdin closed");
    }
    Ok(line.trim().to_string())
}
