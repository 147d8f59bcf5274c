#[path = "../common/mod.rs"]
mod common;

mod batch_mode;
mod cli_config;
mod wallet_store;
