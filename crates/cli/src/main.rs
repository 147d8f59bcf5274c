use clap::Parser;
use color_eyre::eyre::{bail, Result};
use tracing_subscriber::EnvFilter;

use mbnb_cli::{batch, cli, config::Config, menu, workflows};
use mbnb_wallet::WalletStore;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    color_eyre::install()?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();

    let args = cli::Args::parse();
    let mut config = Config::load(args.config.clone())?;
    args.override_config(&mut config);

    if let Some(count) = args.generate {
        if count == 0 {
            bail!("Please enter a valid number greater than 0.");
        }
        let store = WalletStore::new(&config.wallet_file);
        // No prompt in batch generation; an existing store is appended to
        workflows::generate(&store, count, workflows::OnExistingFile::Append)?;
        return Ok(());
    }

    if args.claim.is_some() || args.transfer.is_some() {
        return batch::run(config, args.claim.unwrap_or(0), args.transfer.as_deref()).await;
    }

    menu::run(config).await
}
