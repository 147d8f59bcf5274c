use std::path::PathBuf;

use clap::Parser;
use url::Url;

use crate::config::Config;

/// Wallet manager and faucet claimer for the MegaBNB testnet.
///
/// Run without flags for the interactive menu; the flags below drive
/// one-shot batch runs.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Generate this many wallets, then exit
    #[arg(short, long, value_name = "COUNT")]
    pub generate: Option<u32>,
    /// Claim the faucet this many times per wallet
    #[arg(short, long, value_name = "COUNT")]
    pub claim: Option<u32>,
    /// Sweep every wallet's balance to this address
    #[arg(short, long, value_name = "ADDRESS")]
    pub transfer: Option<String>,

    /* Config overrides */
    /// HTTP RPC URL for balance checks and transfers
    #[arg(long, env("BNB_RPC_URL"))]
    pub rpc: Option<Url>,
    /// Config file location
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Apply argument overrides to configuration
    pub fn override_config(&self, config: &mut Config) {
        if let Some(rpc) = self.rpc.clone() {
            config.eth.rpc = rpc;
        }
    }
}
