use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::warn;

use crate::Wallet;

/// Line-oriented `address|privateKey` persistence.
///
/// The file is append-only: records are added one line at a time, and the
/// only other mutation is truncating the whole file. Records are never
/// edited in place.
pub struct WalletStore {
    path: PathBuf,
}

impl WalletStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Append one record, creating the file if needed
    pub fn append(&self, wallet: &Wallet) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}|{}", wallet.address, wallet.private_key)
    }

    /// Load every record in file order, skipping blank and malformed lines.
    /// A missing file is an empty store, not an error.
    pub fn load_all(&self) -> io::Result<Vec<Wallet>> {
        if !self.exists() {
            warn!(
                "{} not found. You need to generate wallets first.",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let mut wallets = Vec::new();
        for line in content.lines().filter(|line| !line.trim().is_empty()) {
            match parse_line(line) {
                Some(wallet) => wallets.push(wallet),
                None => warn!("Skipping malformed wallet record: {line}"),
            }
        }
        Ok(wallets)
    }

    /// Truncate the store to empty
    pub fn clear(&self) -> io::Result<()> {
        fs::write(&self.path, "")
    }
}

fn parse_line(line: &str) -> Option<Wallet> {
    let (address, private_key) = line.split_once('|')?;
    Some(Wallet {
        address: address.trim().parse().ok()?,
        private_key: private_key.trim().to_string(),
        mnemonic: None,
        balance: None,
    })
}
